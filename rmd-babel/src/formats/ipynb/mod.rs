//! Jupyter notebook format implementation
//!
//! Wraps the notebook container reader/writer (see [`crate::notebook::container`])
//! in the [`Format`] interface so notebooks are selected and converted like any
//! other format. Reading normalizes older notebook versions to version 4.
//!
//! An explicit header passed through [`SerializeOptions`] is stored under
//! `metadata.Rmd_header`, the same place the flat formats put a parsed header.

use crate::error::FormatError;
use crate::format::{Format, SerializeOptions};
use crate::notebook::{read_notebook, write_notebook, Notebook};

/// Format implementation for `.ipynb` notebooks
#[derive(Default)]
pub struct IpynbFormat;

impl Format for IpynbFormat {
    fn name(&self) -> &str {
        "ipynb"
    }

    fn aliases(&self) -> &[&str] {
        &["notebook"]
    }

    fn description(&self) -> &str {
        "Jupyter notebook (nbformat 4)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ipynb"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
        read_notebook(source)
    }

    fn serialize(&self, doc: &Notebook) -> Result<String, FormatError> {
        write_notebook(doc)
    }

    fn serialize_with_options(
        &self,
        doc: &Notebook,
        options: &SerializeOptions,
    ) -> Result<String, FormatError> {
        match &options.header {
            Some(header) if !header.is_null() => {
                let mut doc = doc.clone();
                doc.set_header(header.clone());
                write_notebook(&doc)
            }
            _ => write_notebook(doc),
        }
    }
}
