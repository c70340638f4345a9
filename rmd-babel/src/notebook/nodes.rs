//! Core data structures for the notebook model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current notebook format major version.
pub const NBFORMAT_MAJOR: u32 = 4;

/// Notebook metadata key holding the flat-text YAML header.
pub const RMD_HEADER_KEY: &str = "Rmd_header";

/// Cell metadata key holding the chunk options string.
pub const RMD_CHUNK_OPTIONS_KEY: &str = "Rmd_chunk_options";

/// Ordered key/value metadata attached to notebooks and cells.
pub type Metadata = Map<String, Value>;

/// The root of a notebook document.
///
/// Field order matches the key order notebook tooling writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: Metadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    /// An empty notebook stamped with the given defaults.
    pub fn new(defaults: &NotebookDefaults) -> Self {
        Notebook {
            cells: Vec::new(),
            metadata: defaults.metadata(),
            nbformat: NBFORMAT_MAJOR,
            nbformat_minor: defaults.nbformat_minor,
        }
    }

    /// The kernel language recorded in `metadata.language_info.name`.
    pub fn language(&self) -> Option<&str> {
        self.metadata
            .get("language_info")
            .and_then(|info| info.get("name"))
            .and_then(Value::as_str)
    }

    /// The stored flat-text header, if any. A `null` entry counts as absent.
    pub fn header(&self) -> Option<&Value> {
        self.metadata
            .get(RMD_HEADER_KEY)
            .filter(|value| !value.is_null())
    }

    pub fn set_header(&mut self, header: Value) {
        self.metadata.insert(RMD_HEADER_KEY.to_string(), header);
    }
}

/// A single notebook cell, tagged by `cell_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown(MarkdownCell),
    Code(CodeCell),
    Raw(RawCell),
}

impl Cell {
    pub fn source(&self) -> &CellSource {
        match self {
            Cell::Markdown(cell) => &cell.source,
            Cell::Code(cell) => &cell.source,
            Cell::Raw(cell) => &cell.source,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            Cell::Markdown(cell) => &cell.metadata,
            Cell::Code(cell) => &cell.metadata,
            Cell::Raw(cell) => &cell.metadata,
        }
    }

    /// The chunk options string stored in the cell metadata.
    pub fn chunk_options(&self) -> Option<&str> {
        self.metadata()
            .get(RMD_CHUNK_OPTIONS_KEY)
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkdownCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub source: CellSource,
}

impl MarkdownCell {
    pub fn new(source: impl Into<CellSource>, metadata: Metadata) -> Self {
        MarkdownCell {
            attachments: None,
            id: None,
            metadata,
            source: source.into(),
        }
    }
}

/// A code cell. Execution state and outputs are carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeCell {
    #[serde(default)]
    pub execution_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub outputs: Vec<Value>,
    pub source: CellSource,
}

impl CodeCell {
    /// A fresh, unexecuted code cell.
    ///
    /// The metadata starts with the display flags notebook frontends expect
    /// on new cells; `extra` entries (e.g. chunk options) follow them.
    pub fn new(source: impl Into<CellSource>, extra: Metadata) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("collapsed".to_string(), Value::Bool(true));
        metadata.insert("autoscroll".to_string(), Value::Bool(false));
        metadata.extend(extra);
        CodeCell {
            execution_count: None,
            id: None,
            metadata,
            outputs: Vec::new(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub source: CellSource,
}

/// Cell source text, stored either as one string or as a list of lines.
///
/// The list form never implies separators between its elements; each
/// element carries its own trailing newline where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl CellSource {
    /// The full source text.
    pub fn joined(&self) -> String {
        match self {
            CellSource::Text(text) => text.clone(),
            CellSource::Lines(lines) => lines.concat(),
        }
    }

    /// Whether any part of the source holds non-whitespace content.
    pub fn has_content(&self) -> bool {
        match self {
            CellSource::Text(text) => !text.trim().is_empty(),
            CellSource::Lines(lines) => lines.iter().any(|l| !l.trim().is_empty()),
        }
    }
}

impl From<&str> for CellSource {
    fn from(text: &str) -> Self {
        CellSource::Text(text.to_string())
    }
}

impl From<String> for CellSource {
    fn from(text: String) -> Self {
        CellSource::Text(text)
    }
}

impl From<Vec<String>> for CellSource {
    fn from(lines: Vec<String>) -> Self {
        CellSource::Lines(lines)
    }
}

/// Kernel description written to `metadata.kernelspec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kernelspec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

/// Language description written to `metadata.language_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub file_extension: String,
    pub codemirror_mode: String,
    pub mimetype: String,
    pub pygments_lexer: String,
}

/// Settings applied to notebooks created from flat text, and the language
/// the flat renderers expect notebooks to be written in.
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookDefaults {
    pub expected_language: String,
    pub nbformat_minor: u32,
    pub kernelspec: Kernelspec,
    pub language_info: LanguageInfo,
}

impl NotebookDefaults {
    /// Notebook-level metadata for a freshly created notebook.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        // Both structs hold only strings, so conversion cannot fail.
        if let Ok(kernelspec) = serde_json::to_value(&self.kernelspec) {
            metadata.insert("kernelspec".to_string(), kernelspec);
        }
        if let Ok(language_info) = serde_json::to_value(&self.language_info) {
            metadata.insert("language_info".to_string(), language_info);
        }
        metadata
    }
}

impl Default for NotebookDefaults {
    fn default() -> Self {
        Self {
            expected_language: "R".to_string(),
            nbformat_minor: 0,
            kernelspec: Kernelspec {
                display_name: "R".to_string(),
                language: "R".to_string(),
                name: "ir".to_string(),
            },
            language_info: LanguageInfo {
                name: "R".to_string(),
                file_extension: ".r".to_string(),
                codemirror_mode: "r".to_string(),
                mimetype: "text/x-r-source".to_string(),
                pygments_lexer: "r".to_string(),
            },
        }
    }
}
