//! Spin format implementation
//!
//! knitr's "spin" documents are plain R scripts in which markdown lives in
//! `#' ` comment lines and chunk options in `#+ ` directive lines. This module
//! converts them to and from notebooks, sharing the notebook mapping of the
//! R Markdown format:
//!
//! | Notebook Element          | Spin Equivalent              |
//! |---------------------------|------------------------------|
//! | Markdown cell             | `#' ` prefixed lines         |
//! | Code cell                 | Plain R lines                |
//! | `Rmd_chunk_options`       | `#+ options` line            |
//! | `metadata.Rmd_header`     | `#' ` prefixed YAML header   |
//!
//! Code runs made only of whitespace never become cells, so blank lines
//! between markdown runs are not preserved.

pub mod parser;
pub mod serializer;

use super::common::check_notebook_language;
use crate::error::FormatError;
use crate::format::{Format, SerializeOptions};
use crate::notebook::{Notebook, NotebookDefaults};

pub use parser::{parse_from_spin, segment_spin};
pub use serializer::serialize_to_spin;

/// Line marker for markdown (and header) lines.
pub const MARKDOWN_MARKER: &str = "#' ";

/// Line marker for chunk option directives.
pub const DIRECTIVE_MARKER: &str = "#+ ";

/// Format implementation for spin-style R scripts
#[derive(Default)]
pub struct SpinFormat {
    defaults: NotebookDefaults,
}

impl SpinFormat {
    pub fn new(defaults: NotebookDefaults) -> Self {
        Self { defaults }
    }
}

impl Format for SpinFormat {
    fn name(&self) -> &str {
        "spin"
    }

    fn description(&self) -> &str {
        "R script with #' markdown and #+ chunk options"
    }

    fn file_extensions(&self) -> &[&str] {
        &["R", "r"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
        Ok(parse_from_spin(source, &self.defaults))
    }

    fn serialize(&self, doc: &Notebook) -> Result<String, FormatError> {
        self.serialize_with_options(doc, &SerializeOptions::default())
    }

    fn serialize_with_options(
        &self,
        doc: &Notebook,
        options: &SerializeOptions,
    ) -> Result<String, FormatError> {
        check_notebook_language(doc, &self.defaults.expected_language);
        serialize_to_spin(doc, options.header.as_ref())
    }
}
