//! Spin parsing (R script with `#'` markdown → notebook import)
//!
//! Pipeline: R script → lines → marked header extraction → spin segmenter → Notebook
//!
//! There are no explicit chunk delimiters: a run of `#' ` lines is markdown,
//! anything else is code, and a `#+ ` directive starts a new chunk carrying
//! its options.

use super::MARKDOWN_MARKER;
use crate::common::header::extract_header;
use crate::common::segmenter::{CellBuffer, SegmentState};
use crate::notebook::{Cell, Notebook, NotebookDefaults};
use once_cell::sync::Lazy;
use regex::Regex;

static SPIN_MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#' (.*)$").expect("spin markdown pattern"));
static SPIN_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\+ (.*)$").expect("spin directive pattern"));

/// Parse a spin-style R script into a notebook.
pub fn parse_from_spin(source: &str, defaults: &NotebookDefaults) -> Notebook {
    let mut notebook = Notebook::new(defaults);
    let mut lines: Vec<&str> = source.lines().collect();

    if let Some(header) = extract_header(&mut lines, Some(MARKDOWN_MARKER)) {
        notebook.set_header(header);
    }

    notebook.cells = segment_spin(&lines);
    notebook
}

/// Split spin flat text into cells.
///
/// Unlike the fenced dialect, code runs holding only whitespace are
/// dropped, and so is a whitespace-only trailing run.
pub fn segment_spin(lines: &[&str]) -> Vec<Cell> {
    let mut state = SegmentState::Markdown;
    let mut buffer = CellBuffer::new();

    for line in lines {
        let markdown = SPIN_MARKDOWN.captures(line);
        let directive = SPIN_DIRECTIVE.captures(line);

        match (state, markdown, directive) {
            (SegmentState::Markdown, Some(caps), _) => buffer.push_line(&caps[1]),
            (SegmentState::Markdown, None, directive) => {
                buffer.flush_if_content(SegmentState::Markdown);
                state = SegmentState::Code;
                match directive {
                    Some(caps) => buffer.set_chunk_options(&caps[1]),
                    None => buffer.push_line(line),
                }
            }
            (SegmentState::Code, Some(caps), _) => {
                buffer.flush_if_content(SegmentState::Code);
                state = SegmentState::Markdown;
                buffer.push_line(&caps[1]);
            }
            (SegmentState::Code, None, Some(caps)) => {
                buffer.flush_if_content(SegmentState::Code);
                buffer.set_chunk_options(&caps[1]);
            }
            (SegmentState::Code, None, None) => buffer.push_line(line),
        }
    }

    buffer.flush_if_content(state);
    buffer.into_cells()
}
