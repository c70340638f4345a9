//! Shared helpers for the format tests.

use proptest::prelude::*;
use rmd_babel::notebook::{
    Cell, CodeCell, MarkdownCell, Metadata, Notebook, NotebookDefaults, RMD_CHUNK_OPTIONS_KEY,
};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}: {e}"))
}

pub fn markdown(source: &str) -> Cell {
    Cell::Markdown(MarkdownCell::new(source, Metadata::new()))
}

pub fn code(source: &str, options: Option<&str>) -> Cell {
    let mut meta = Metadata::new();
    if let Some(options) = options {
        meta.insert(
            RMD_CHUNK_OPTIONS_KEY.to_string(),
            Value::String(options.to_string()),
        );
    }
    Cell::Code(CodeCell::new(source, meta))
}

pub fn notebook(cells: Vec<Cell>) -> Notebook {
    let mut nb = Notebook::new(&NotebookDefaults::default());
    nb.cells = cells;
    nb
}

/// Cell kinds in order, as their `cell_type` tags.
pub fn kinds(nb: &Notebook) -> Vec<&'static str> {
    nb.cells
        .iter()
        .map(|cell| match cell {
            Cell::Markdown(_) => "markdown",
            Cell::Code(_) => "code",
            Cell::Raw(_) => "raw",
        })
        .collect()
}

/// Joined cell sources in order.
pub fn sources(nb: &Notebook) -> Vec<String> {
    nb.cells.iter().map(|cell| cell.source().joined()).collect()
}

pub fn options(nb: &Notebook) -> Vec<Option<&str>> {
    nb.cells.iter().map(Cell::chunk_options).collect()
}

// Generated cells avoid trailing whitespace and blank lines, which the
// segmenters normalize away, and never start a line with a delimiter or marker.
fn arb_markdown() -> impl Strategy<Value = Cell> {
    prop::collection::vec("[a-z][a-z0-9 ]{0,12}[a-z0-9]", 1..4)
        .prop_map(|lines| markdown(&lines.join("\n")))
}

fn arb_code() -> impl Strategy<Value = Cell> {
    (
        prop::collection::vec("[a-z][a-z0-9 ()<=-]{0,12}[a-z0-9)]", 1..4),
        prop::option::of("[a-z]{1,6}=[0-9]{1,3}"),
    )
        .prop_map(|(lines, options)| code(&lines.join("\n"), options.as_deref()))
}

pub fn arb_notebook() -> impl Strategy<Value = Notebook> {
    prop::collection::vec(prop_oneof![arb_markdown(), arb_code()], 0..6).prop_map(notebook)
}
