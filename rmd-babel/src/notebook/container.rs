//! Notebook container I/O (JSON ↔ [`Notebook`])
//!
//! Reading inspects `nbformat` first: version 4 documents deserialize
//! directly, version 3 documents are upgraded in their JSON form before
//! deserializing. Writing produces the layout notebook tooling writes
//! itself: one-space indentation and a trailing newline.

use super::nodes::{Notebook, NBFORMAT_MAJOR};
use crate::error::FormatError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Parse notebook JSON, upgrading older versions to the current major version.
pub fn read_notebook(source: &str) -> Result<Notebook, FormatError> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| FormatError::ParseError(format!("Invalid notebook JSON: {e}")))?;

    let version = value
        .get("nbformat")
        .and_then(Value::as_u64)
        .ok_or_else(|| FormatError::ParseError("Missing 'nbformat' version field".to_string()))?;

    let value = match version {
        4 => value,
        3 => {
            tracing::debug!("upgrading nbformat 3 notebook to version {NBFORMAT_MAJOR}");
            upgrade_v3(value)?
        }
        other => {
            return Err(FormatError::NotSupported(format!(
                "nbformat version {other} (expected 3 or {NBFORMAT_MAJOR})"
            )))
        }
    };

    serde_json::from_value(value)
        .map_err(|e| FormatError::ParseError(format!("Malformed notebook: {e}")))
}

/// Serialize a notebook to JSON text.
pub fn write_notebook(notebook: &Notebook) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
    notebook
        .serialize(&mut serializer)
        .map_err(|e| FormatError::SerializationError(e.to_string()))?;

    let mut text = String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))?;
    text.push('\n');
    Ok(text)
}

/// Rewrite a version 3 notebook into the version 4 layout.
///
/// Worksheets are flattened into a single cell list, heading cells become
/// markdown headings, and code cells move `input`/`prompt_number` to
/// `source`/`execution_count`.
fn upgrade_v3(value: Value) -> Result<Value, FormatError> {
    let Value::Object(mut root) = value else {
        return Err(FormatError::ParseError(
            "Notebook root is not an object".to_string(),
        ));
    };

    let worksheets = match root.remove("worksheets") {
        Some(Value::Array(worksheets)) => worksheets,
        Some(_) => {
            return Err(FormatError::ParseError(
                "'worksheets' is not a list".to_string(),
            ))
        }
        None => Vec::new(),
    };

    let mut cells = Vec::new();
    for worksheet in worksheets {
        if let Some(Value::Array(ws_cells)) = worksheet.get("cells") {
            for cell in ws_cells {
                cells.push(upgrade_cell_v3(cell.clone())?);
            }
        }
    }

    let mut metadata = match root.remove("metadata") {
        Some(Value::Object(metadata)) => metadata,
        _ => Map::new(),
    };
    // v3 stored the notebook name in metadata; v4 takes it from the filename.
    metadata.remove("name");

    let mut upgraded = Map::new();
    upgraded.insert("cells".to_string(), Value::Array(cells));
    upgraded.insert("metadata".to_string(), Value::Object(metadata));
    upgraded.insert("nbformat".to_string(), Value::from(NBFORMAT_MAJOR));
    upgraded.insert("nbformat_minor".to_string(), Value::from(0));
    Ok(Value::Object(upgraded))
}

fn upgrade_cell_v3(cell: Value) -> Result<Value, FormatError> {
    let Value::Object(mut cell) = cell else {
        return Err(FormatError::ParseError("Cell is not an object".to_string()));
    };

    let cell_type = cell
        .get("cell_type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let metadata = cell
        .remove("metadata")
        .unwrap_or_else(|| Value::Object(Map::new()));

    let mut upgraded = Map::new();
    match cell_type.as_str() {
        "code" => {
            upgraded.insert("cell_type".to_string(), Value::from("code"));
            upgraded.insert(
                "execution_count".to_string(),
                cell.remove("prompt_number").unwrap_or(Value::Null),
            );
            upgraded.insert("metadata".to_string(), metadata);
            upgraded.insert(
                "outputs".to_string(),
                cell.remove("outputs").unwrap_or_else(|| Value::Array(vec![])),
            );
            upgraded.insert("source".to_string(), take_source(&mut cell, "input"));
        }
        "heading" => {
            let level = cell.get("level").and_then(Value::as_u64).unwrap_or(1).clamp(1, 6);
            let text = source_text(&take_source(&mut cell, "source"));
            let heading = format!("{} {}", "#".repeat(level as usize), text.trim());
            upgraded.insert("cell_type".to_string(), Value::from("markdown"));
            upgraded.insert("metadata".to_string(), metadata);
            upgraded.insert("source".to_string(), Value::from(heading));
        }
        "markdown" | "raw" => {
            upgraded.insert("cell_type".to_string(), Value::from(cell_type.as_str()));
            upgraded.insert("metadata".to_string(), metadata);
            upgraded.insert("source".to_string(), take_source(&mut cell, "source"));
        }
        // v3 "html" and "plaintext" cells were rendered as markdown.
        _ => {
            upgraded.insert("cell_type".to_string(), Value::from("markdown"));
            upgraded.insert("metadata".to_string(), metadata);
            upgraded.insert("source".to_string(), take_source(&mut cell, "source"));
        }
    }
    Ok(Value::Object(upgraded))
}

fn take_source(cell: &mut Map<String, Value>, key: &str) -> Value {
    cell.remove(key).unwrap_or_else(|| Value::from(""))
}

fn source_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(lines) => lines.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}
