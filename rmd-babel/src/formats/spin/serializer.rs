//! Spin serialization (notebook → R script export)
//!
//! Markdown cells become `#' ` prefixed lines, code cells are written as
//! plain R preceded by a `#+ ` directive when they carry chunk options.

use super::{DIRECTIVE_MARKER, MARKDOWN_MARKER};
use crate::common::header::encode_header;
use crate::common::text::{join_blocks_with_paragraph_break, join_with_blank_line, prefix_lines};
use crate::error::FormatError;
use crate::notebook::{Cell, Notebook};
use serde_json::Value;

/// Serialize a notebook to a spin-style R script.
///
/// `header` overrides the header stored in the notebook metadata.
pub fn serialize_to_spin(
    notebook: &Notebook,
    header: Option<&Value>,
) -> Result<String, FormatError> {
    let mut blocks = Vec::with_capacity(notebook.cells.len() + 1);

    if let Some(header) = header.filter(|h| !h.is_null()).or_else(|| notebook.header()) {
        blocks.push(encode_header(header, Some(MARKDOWN_MARKER))?);
    }

    for cell in &notebook.cells {
        match cell {
            Cell::Markdown(md) => {
                // Edge newlines would become marker-only lines the paragraph join cannot trim.
                let source = md.source.joined();
                blocks.push(prefix_lines(source.trim_matches('\n'), MARKDOWN_MARKER));
            }
            Cell::Code(code) => {
                let source = code.source.joined();
                let block = match cell.chunk_options() {
                    Some(options) => {
                        join_with_blank_line(&format!("{DIRECTIVE_MARKER}{options}"), &source)
                    }
                    None => source,
                };
                blocks.push(block);
            }
            Cell::Raw(_) => tracing::debug!("skipping raw cell with no spin equivalent"),
        }
    }

    Ok(join_blocks_with_paragraph_break(&blocks))
}
