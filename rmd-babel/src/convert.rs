//! File conversion pipeline.
//!
//! Provides a high-level API for converting documents between registered
//! formats. This module bridges the gap between the format registry and file
//! I/O: a source is parsed into the notebook model, then serialized to the
//! target format, with an optional header override applied on the way out.
//!
//! The four directional drivers (`ipynb_to_rmd`, `rmd_to_ipynb`,
//! `ipynb_to_spin`, `spin_to_ipynb`) are thin wrappers over [`convert_file`].
//! Output is written in a single call once serialization has succeeded; an
//! I/O failure during the write itself may still leave a truncated file.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::common::header::{extract_header, parse_header};
use crate::error::{ConvertError, FormatError};
use crate::format::SerializeOptions;
use crate::notebook::NotebookDefaults;
use crate::registry::FormatRegistry;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Specifies how to convert a document.
///
/// Use the builder pattern to configure the conversion:
///
/// ```ignore
/// let spec = ConvertSpec::new("ipynb", "rmd")
///     .with_header(header)
///     .with_notebook_defaults(defaults);
/// ```
#[derive(Debug, Clone)]
pub struct ConvertSpec<'a> {
    /// Source format name or alias (e.g., "ipynb", "fenced", "spin").
    pub from: &'a str,
    /// Target format name or alias.
    pub to: &'a str,
    /// Header written instead of the one carried by the source.
    pub header: Option<Value>,
    /// Settings for notebooks created from flat text.
    pub defaults: NotebookDefaults,
}

impl<'a> ConvertSpec<'a> {
    /// Creates a new conversion specification between two formats.
    pub fn new(from: &'a str, to: &'a str) -> Self {
        Self {
            from,
            to,
            header: None,
            defaults: NotebookDefaults::default(),
        }
    }

    /// Sets the header to write, overriding any header in the source document.
    pub fn with_header(mut self, header: Value) -> Self {
        self.header = Some(header);
        self
    }

    /// Sets the notebook settings used for parsing and language checks.
    pub fn with_notebook_defaults(mut self, defaults: NotebookDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Converts source text according to the specification.
///
/// # Errors
///
/// Returns [`FormatError`] if either format is unknown, the source cannot be
/// parsed, or the target cannot carry an explicit header.
pub fn convert_str(source: &str, spec: &ConvertSpec<'_>) -> Result<String, FormatError> {
    let registry = FormatRegistry::with_notebook_defaults(spec.defaults.clone());
    let notebook = registry.parse(source, spec.from)?;
    tracing::debug!(
        from = spec.from,
        to = spec.to,
        cells = notebook.cells.len(),
        "parsed source document"
    );

    let options = SerializeOptions {
        header: spec.header.clone(),
    };
    registry.serialize_with_options(&notebook, spec.to, &options)
}

/// Reads `infile`, converts it and writes the result to `outfile`.
pub fn convert_file(
    infile: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
    spec: &ConvertSpec<'_>,
) -> Result<(), ConvertError> {
    let infile = infile.as_ref();
    let outfile = outfile.as_ref();

    let source = fs::read_to_string(infile).map_err(|e| ConvertError::io(infile, e))?;
    let output = convert_str(&source, spec)?;
    fs::write(outfile, output).map_err(|e| ConvertError::io(outfile, e))?;

    tracing::debug!("wrote {}", outfile.display());
    Ok(())
}

/// Notebook to R Markdown. `header` replaces the notebook's stored header.
pub fn ipynb_to_rmd(
    infile: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
    header: Option<Value>,
) -> Result<(), ConvertError> {
    convert_file(infile, outfile, &with_optional_header(ConvertSpec::new("ipynb", "rmd"), header))
}

/// R Markdown to notebook.
pub fn rmd_to_ipynb(
    infile: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
) -> Result<(), ConvertError> {
    convert_file(infile, outfile, &ConvertSpec::new("rmd", "ipynb"))
}

/// Notebook to spin script. `header` replaces the notebook's stored header.
pub fn ipynb_to_spin(
    infile: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
    header: Option<Value>,
) -> Result<(), ConvertError> {
    convert_file(infile, outfile, &with_optional_header(ConvertSpec::new("ipynb", "spin"), header))
}

/// Spin script to notebook.
pub fn spin_to_ipynb(
    infile: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
) -> Result<(), ConvertError> {
    convert_file(infile, outfile, &ConvertSpec::new("spin", "ipynb"))
}

/// Parses a standalone header file.
///
/// Accepts either a bare YAML mapping or one wrapped in `---` delimiters.
pub fn load_header(text: &str) -> Result<Value, FormatError> {
    let mut lines: Vec<&str> = text.lines().collect();
    let starts_delimited = lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.trim() == "---");

    if starts_delimited {
        return extract_header(&mut lines, None).ok_or_else(|| {
            FormatError::ParseError("Header block could not be read".to_string())
        });
    }
    parse_header(text)
}

fn with_optional_header(spec: ConvertSpec<'_>, header: Option<Value>) -> ConvertSpec<'_> {
    match header {
        Some(header) => spec.with_header(header),
        None => spec,
    }
}
