//! YAML metadata header bridge.
//!
//! A header is a YAML mapping delimited by `---` lines at the top of a flat
//! document. It is carried in notebook metadata as a JSON value, so the
//! mapping is parsed straight into [`serde_json::Value`] and emitted from it;
//! nested mappings serialize as plain block mappings and non-ASCII scalars
//! are written unescaped.
//!
//! The spin dialect wraps every header line in the markdown line marker.

use super::text::{join_with_blank_line, prefix_lines, unprefix_line};
use crate::error::FormatError;
use serde_json::Value;

const DELIMITER: &str = "---";

/// Render a header mapping as a `---` delimited block, optionally prefixing
/// every line with `marker`.
pub fn encode_header(header: &Value, marker: Option<&str>) -> Result<String, FormatError> {
    let yaml = serde_yaml::to_string(header)
        .map_err(|e| FormatError::SerializationError(format!("Header YAML emission failed: {e}")))?;

    // The YAML emitter never writes a document start marker and would end
    // the document with "...", so both delimiters are added here.
    let block = join_with_blank_line(&format!("{DELIMITER}\n{yaml}"), DELIMITER);

    Ok(match marker {
        Some(marker) => prefix_lines(&block, marker),
        None => block,
    })
}

/// Parse header text into a mapping value.
pub fn parse_header(text: &str) -> Result<Value, FormatError> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| FormatError::ParseError(format!("Invalid header YAML: {e}")))?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(FormatError::ParseError(
            "Header is not a key/value mapping".to_string(),
        ))
    }
}

/// Remove a leading header block from `lines` and return its mapping.
///
/// The first delimiter must be the first non-blank line, and at least one
/// line must separate it from the closing delimiter; otherwise nothing is
/// extracted and `lines` is left untouched. When a block is found its lines
/// are removed even if the YAML inside fails to parse: the failure is
/// logged and the document continues without a header.
pub fn extract_header(lines: &mut Vec<&str>, marker: Option<&str>) -> Option<Value> {
    let (open, close) = find_delimiters(lines, marker)?;

    let text = lines[open + 1..close]
        .iter()
        .map(|line| match marker {
            Some(marker) => unprefix_line(line, marker),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n");

    lines.drain(open..=close);

    match parse_header(&text) {
        Ok(header) => Some(header),
        Err(err) => {
            tracing::warn!("Error reading document metadata block: {err}");
            tracing::warn!("Trying to continue without header");
            None
        }
    }
}

fn find_delimiters(lines: &[&str], marker: Option<&str>) -> Option<(usize, usize)> {
    let open = lines.iter().position(|line| !line.trim().is_empty())?;
    if !is_delimiter(lines[open], marker) {
        return None;
    }

    let close = open
        + 1
        + lines[open + 1..]
            .iter()
            .position(|line| is_delimiter(line, marker))?;

    if close - open > 1 {
        Some((open, close))
    } else {
        None
    }
}

fn is_delimiter(line: &str, marker: Option<&str>) -> bool {
    match marker {
        Some(marker) => line
            .strip_prefix(marker)
            .is_some_and(|rest| rest.trim_end() == DELIMITER),
        None => line.trim() == DELIMITER,
    }
}
