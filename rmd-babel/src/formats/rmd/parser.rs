//! R Markdown parsing (Rmd → notebook import)
//!
//! Pipeline: Rmd string → lines → header extraction → fenced segmenter → Notebook
//!
//! rmarkdown does not require matching backtick counts on a chunk's opening
//! and closing fences, only three or more on each. Any amount of whitespace
//! may precede the `{r ...}` block, but `r` must be its first character.

use crate::common::header::extract_header;
use crate::common::segmenter::{CellBuffer, SegmentState};
use crate::notebook::{Cell, Notebook, NotebookDefaults};
use once_cell::sync::Lazy;
use regex::Regex;

static CODE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```+\s*\{r(.*)\}\s*$").expect("chunk opening pattern"));
static CODE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```+\s*$").expect("chunk closing pattern"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`r.+`").expect("inline code pattern"));

/// Parse an R Markdown document into a notebook.
///
/// Never fails: a malformed header is dropped with a warning and every
/// other line lands in some cell.
pub fn parse_from_rmd(source: &str, defaults: &NotebookDefaults) -> Notebook {
    let mut notebook = Notebook::new(defaults);
    let mut lines: Vec<&str> = source.lines().collect();

    if let Some(header) = extract_header(&mut lines, None) {
        notebook.set_header(header);
    }

    notebook.cells = segment_fenced(&lines);
    notebook
}

/// Split fenced flat text into cells.
pub fn segment_fenced(lines: &[&str]) -> Vec<Cell> {
    let mut state = SegmentState::Markdown;
    let mut buffer = CellBuffer::new();

    for line in lines {
        match state {
            SegmentState::Markdown => {
                if let Some(caps) = CODE_START.captures(line) {
                    // Whitespace-only markdown between chunks is not a cell.
                    buffer.flush_if_content(SegmentState::Markdown);
                    buffer.set_chunk_options(&caps[1]);
                    state = SegmentState::Code;
                } else {
                    if INLINE_CODE.is_match(line) {
                        tracing::info!("Inline R code detected - treated as text");
                    }
                    buffer.push_line(line);
                }
            }
            SegmentState::Code => {
                if CODE_END.is_match(line) {
                    // Chunks are kept even when empty.
                    buffer.flush(SegmentState::Code);
                    state = SegmentState::Markdown;
                } else {
                    buffer.push_code_line(line);
                }
            }
        }
    }

    if state == SegmentState::Code || !buffer.is_empty() {
        buffer.flush(state);
    }

    buffer.into_cells()
}
