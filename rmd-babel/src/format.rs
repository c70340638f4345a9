//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing notebooks.

use crate::error::FormatError;
use crate::notebook::Notebook;
use serde_json::Value;

/// Extra parameters for [`Format::serialize_with_options`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerializeOptions {
    /// Header mapping to write instead of the one stored in the notebook.
    pub header: Option<Value>,
}

impl SerializeOptions {
    pub fn with_header(mut self, header: Value) -> Self {
        self.header = Some(header);
        self
    }
}

/// Trait for document formats
///
/// Implementors provide bidirectional conversion between string representation and [`Notebook`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Notebook, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "ipynb", "rmd", "spin")
    fn name(&self) -> &str;

    /// Alternative names accepted when looking the format up
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["ipynb"], ["Rmd", "rmd"])
    ///
    /// Returns a slice of file extensions without the leading dot. The first
    /// entry is used when deriving an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Notebook)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Notebook → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Notebook
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Notebook, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Notebook into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &Notebook) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a Notebook, optionally using extra parameters.
    ///
    /// Formats without use for the options rely on the default implementation,
    /// which delegates to [`Format::serialize`] and rejects a header it would drop.
    fn serialize_with_options(
        &self,
        doc: &Notebook,
        options: &SerializeOptions,
    ) -> Result<String, FormatError> {
        if options.header.is_none() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support an explicit header",
                self.name()
            )))
        }
    }
}
