//! File driver tests: notebook ↔ flat text through the filesystem.

use crate::common::{fixture, fixture_path, kinds};
use rmd_babel::notebook::read_notebook;
use rmd_babel::{
    convert_file, ipynb_to_rmd, ipynb_to_spin, rmd_to_ipynb, spin_to_ipynb, ConvertError,
    ConvertSpec, FormatError,
};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_rmd_to_ipynb_and_back() {
    let dir = tempdir().unwrap();
    let notebook_path = dir.path().join("header.ipynb");
    let rmd_path = dir.path().join("header.Rmd");

    rmd_to_ipynb(fixture_path("header.Rmd"), &notebook_path).unwrap();
    let nb = read_notebook(&fs::read_to_string(&notebook_path).unwrap()).unwrap();
    assert_eq!(nb.header().unwrap()["ünicode"], "£¼±å");
    assert_eq!(kinds(&nb), vec!["markdown", "code"]);

    ipynb_to_rmd(&notebook_path, &rmd_path, None).unwrap();
    let rmd = fs::read_to_string(&rmd_path).unwrap();
    assert!(rmd.starts_with("---\ntitle: Test document\n"));
    assert!(rmd.contains("lorem ipsum\n\n```{r}\n1+1\n```"));
}

#[test]
fn test_spin_to_ipynb_and_back() {
    let dir = tempdir().unwrap();
    let notebook_path = dir.path().join("chunks.ipynb");
    let script_path = dir.path().join("chunks.R");

    spin_to_ipynb(fixture_path("chunks.R"), &notebook_path).unwrap();
    let nb = read_notebook(&fs::read_to_string(&notebook_path).unwrap()).unwrap();
    assert_eq!(nb.cells.len(), 6);
    assert_eq!(nb.cells[1].chunk_options(), Some("foo=1, bar=2"));

    ipynb_to_spin(&notebook_path, &script_path, None).unwrap();
    let script = fs::read_to_string(&script_path).unwrap();
    assert!(script.starts_with("#+ foo=0\ncode-0\n\n#+ foo=1, bar=2\n"));
}

#[test]
fn test_driver_header_override() {
    let dir = tempdir().unwrap();
    let notebook_path = dir.path().join("outputs.ipynb");
    let script_path = dir.path().join("outputs.R");
    fs::write(&notebook_path, fixture("outputs.ipynb")).unwrap();

    ipynb_to_spin(&notebook_path, &script_path, Some(json!({"title": "Override"}))).unwrap();

    let script = fs::read_to_string(&script_path).unwrap();
    assert!(script.starts_with("#' ---\n#' title: Override\n#' ---\n"));
    assert!(!script.contains("Stored"));
}

#[test]
fn test_rmd_to_spin_carries_header() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("header.R");

    convert_file(
        fixture_path("header.Rmd"),
        &output,
        &ConvertSpec::new("fenced", "spin"),
    )
    .unwrap();

    let script = fs::read_to_string(&output).unwrap();
    assert!(script.starts_with("#' ---\n#' title: Test document\n"));
    assert!(script.ends_with("#' lorem ipsum\n\n1+1"));
}

#[test]
fn test_parse_failure_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.ipynb");
    let output = dir.path().join("broken.Rmd");
    fs::write(&input, "{ not json").unwrap();

    match ipynb_to_rmd(&input, &output, None) {
        Err(ConvertError::Format(FormatError::ParseError(_))) => {}
        other => panic!("Expected parse error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("out.ipynb");

    match rmd_to_ipynb(fixture_path("basic.Rmd"), &output) {
        Err(ConvertError::Io { path, .. }) => assert_eq!(path, output),
        other => panic!("Expected I/O error, got {other:?}"),
    }
}
