//! Shared pieces of the flat-text → notebook segmenters.
//!
//! Both flat dialects scan lines with the same two-state machine. The
//! state itself lives in the dialect's parser loop; [`CellBuffer`] holds
//! what the loop threads between transitions: the cells emitted so far, the
//! pending source lines and the pending cell metadata.

use crate::notebook::{Cell, CodeCell, MarkdownCell, Metadata, RMD_CHUNK_OPTIONS_KEY};
use serde_json::Value;

/// Which kind of cell the segmenter is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Markdown,
    Code,
}

#[derive(Debug, Default)]
pub struct CellBuffer {
    cells: Vec<Cell>,
    lines: Vec<String>,
    meta: Metadata,
}

impl CellBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any pending line holds non-whitespace content.
    pub fn has_content(&self) -> bool {
        self.lines.iter().any(|line| !line.trim().is_empty())
    }

    /// Append a line, right-trimmed and newline-terminated.
    pub fn push_line(&mut self, line: &str) {
        self.lines.push(format!("{}\n", line.trim_end()));
    }

    /// Append a code line without a trailing newline, terminating the
    /// previous line first. The final line of the cell thus carries no
    /// newline while interior lines keep theirs.
    pub fn push_code_line(&mut self, line: &str) {
        if let Some(last) = self.lines.last_mut() {
            last.push('\n');
        }
        self.lines.push(line.trim_end().to_string());
    }

    /// Record chunk options for the pending cell.
    ///
    /// Surrounding spaces and commas are trimmed; nothing is stored when
    /// the result is empty.
    pub fn set_chunk_options(&mut self, raw: &str) {
        let options = raw.trim_matches(|c| c == ' ' || c == ',');
        if !options.is_empty() {
            self.meta.insert(
                RMD_CHUNK_OPTIONS_KEY.to_string(),
                Value::String(options.to_string()),
            );
        }
    }

    /// Emit the pending lines as a cell of the given kind and reset.
    pub fn flush(&mut self, state: SegmentState) {
        let lines = std::mem::take(&mut self.lines);
        let meta = std::mem::take(&mut self.meta);
        tracing::debug!(?state, lines = lines.len(), "flushing cell");

        let cell = match state {
            SegmentState::Markdown => Cell::Markdown(MarkdownCell::new(lines, meta)),
            SegmentState::Code => Cell::Code(CodeCell::new(lines, meta)),
        };
        self.cells.push(cell);
    }

    /// Flush only if the pending lines hold content; otherwise drop them.
    pub fn flush_if_content(&mut self, state: SegmentState) {
        if self.has_content() {
            self.flush(state);
        } else {
            self.reset();
        }
    }

    /// Drop pending lines and metadata.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.meta.clear();
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
