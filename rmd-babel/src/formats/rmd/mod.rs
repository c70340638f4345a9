//! R Markdown format implementation
//!
//! This module implements bidirectional conversion between notebooks and R Markdown,
//! the fenced flat-text dialect: markdown text with code chunks opened by
//! ```` ```{r options} ```` and closed by ```` ``` ````, optionally preceded
//! by a `---` delimited YAML header.
//!
//! # Element Mapping Table
//!
//! | Notebook Element          | R Markdown Equivalent        | Notes                                   |
//! |---------------------------|------------------------------|-----------------------------------------|
//! | Markdown cell             | Markdown text                | Verbatim                                |
//! | Code cell                 | ```` ```{r} ```` chunk       | Empty chunks are kept                   |
//! | `Rmd_chunk_options`       | Text after `{r`              | Opaque string, spaces/commas trimmed    |
//! | `metadata.Rmd_header`     | YAML header                  | Round-trip only                         |
//! | Raw cell                  | (none)                       | Skipped on export                       |
//!
//! # Lossy Conversions
//!
//! - Cell boundaries may gain or lose blank lines; every block is separated by one empty line
//! - Trailing whitespace on each line is dropped on import
//! - Inline code (`` `r expr` ``) stays markdown text
//! - Outputs and execution counts are not exported; notebooks must be re-run

pub mod parser;
pub mod serializer;

use super::common::check_notebook_language;
use crate::error::FormatError;
use crate::format::{Format, SerializeOptions};
use crate::notebook::{Notebook, NotebookDefaults};

pub use parser::{parse_from_rmd, segment_fenced};
pub use serializer::serialize_to_rmd;

/// Format implementation for R Markdown
#[derive(Default)]
pub struct RmdFormat {
    defaults: NotebookDefaults,
}

impl RmdFormat {
    pub fn new(defaults: NotebookDefaults) -> Self {
        Self { defaults }
    }
}

impl Format for RmdFormat {
    fn name(&self) -> &str {
        "rmd"
    }

    fn aliases(&self) -> &[&str] {
        &["fenced"]
    }

    fn description(&self) -> &str {
        "R Markdown with fenced code chunks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["Rmd", "rmd"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
        Ok(parse_from_rmd(source, &self.defaults))
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
        serialize_to_rmd(doc, options.header.as_ref())
    }
}
