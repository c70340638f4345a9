//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name or alias.

use crate::error::FormatError;
use crate::format::{Format, SerializeOptions};
use crate::notebook::{Notebook, NotebookDefaults};
use std::collections::HashMap;

/// Registry of document formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let notebook = registry.parse(source, "rmd")?;
/// let json = registry.serialize(&notebook, "ipynb")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        if let Some(format) = self.formats.get(name) {
            return Ok(format.as_ref());
        }
        self.formats
            .values()
            .find(|f| f.aliases().contains(&name))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists (by name or alias)
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Extensions compare case-insensitively, so `doc.RMD` is R Markdown.
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| {
                format
                    .file_extensions()
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(extension))
            })
            .map(|format| format.name().to_string())
    }

    /// The extension used when deriving an output filename for a format
    pub fn primary_extension(&self, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        fmt.file_extensions()
            .first()
            .map(|ext| ext.to_string())
            .ok_or_else(|| {
                FormatError::NotSupported(format!("Format '{format}' has no file extension"))
            })
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Notebook, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a notebook using the specified format
    pub fn serialize(&self, doc: &Notebook, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(doc, format, &SerializeOptions::default())
    }

    /// Serialize a notebook using the specified format and options
    pub fn serialize_with_options(
        &self,
        doc: &Notebook,
        format: &str,
        options: &SerializeOptions,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_notebook_defaults(NotebookDefaults::default())
    }

    /// Create a registry whose flat formats stamp and expect the given notebook settings
    pub fn with_notebook_defaults(defaults: NotebookDefaults) -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::ipynb::IpynbFormat);
        registry.register(crate::formats::rmd::RmdFormat::new(defaults.clone()));
        registry.register(crate::formats::spin::SpinFormat::new(defaults));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
