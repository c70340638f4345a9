//! R Markdown serialization (notebook → Rmd export)
//!
//! Pipeline: Notebook → one text block per header/cell → paragraph-joined string
//!
//! Blocks are separated by one empty line so every chunk stands alone as a
//! markdown paragraph. Chunk delimiters are placed on their own lines
//! without adding blank lines inside the chunk.

use crate::common::header::encode_header;
use crate::common::text::{join_blocks_with_paragraph_break, join_with_blank_line};
use crate::error::FormatError;
use crate::notebook::{Cell, Notebook};
use serde_json::Value;

/// Serialize a notebook to R Markdown.
///
/// `header` overrides the header stored in the notebook metadata.
pub fn serialize_to_rmd(notebook: &Notebook, header: Option<&Value>) -> Result<String, FormatError> {
    let mut blocks = Vec::with_capacity(notebook.cells.len() + 1);

    if let Some(header) = header.filter(|h| !h.is_null()).or_else(|| notebook.header()) {
        blocks.push(encode_header(header, None)?);
    }

    for cell in &notebook.cells {
        match cell {
            Cell::Markdown(md) => blocks.push(md.source.joined()),
            Cell::Code(code) => blocks.push(render_chunk(&code.source.joined(), cell.chunk_options())),
            Cell::Raw(_) => tracing::debug!("skipping raw cell with no R Markdown equivalent"),
        }
    }

    Ok(join_blocks_with_paragraph_break(&blocks))
}

fn render_chunk(source: &str, options: Option<&str>) -> String {
    let start = match options {
        Some(options) => format!("```{{r, {options}}}"),
        None => "```{r}".to_string(),
    };
    let text = join_with_blank_line(&start, source);
    join_with_blank_line(&text, "```")
}
