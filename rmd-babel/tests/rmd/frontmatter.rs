use crate::common::{fixture, kinds};
use rmd_babel::format::Format;
use rmd_babel::formats::rmd::RmdFormat;
use serde_json::json;

#[test]
fn test_header_import() {
    let nb = RmdFormat::default()
        .parse(&fixture("header.Rmd"))
        .expect("Failed to parse R Markdown");

    let header = nb.header().expect("Expected a header");
    assert_eq!(header["title"], "Test document");
    assert_eq!(header["author"], "foobar <foo@bar.tld>");
    assert_eq!(header["date"], "1970-01-01T00:00:00+0000");
    assert_eq!(header["output"], json!({"html_document": {"toc": true}}));
    assert_eq!(header["ünicode"], "£¼±å");

    assert_eq!(kinds(&nb), vec!["markdown", "code"]);
}

#[test]
fn test_header_survives_two_round_trips() {
    let format = RmdFormat::default();
    let original = format.parse(&fixture("header.Rmd")).unwrap();

    let first = format.serialize(&original).unwrap();
    let reparsed = format.parse(&first).unwrap();
    let second = format.serialize(&reparsed).unwrap();

    assert_eq!(second, first);
    assert_eq!(reparsed.header(), original.header());
    assert!(second.starts_with("---\ntitle: Test document\n"));
    assert!(second.contains("ünicode: £¼±å\n---\n\nlorem ipsum"));
    assert!(second.contains("output:\n  html_document:\n    toc: true\n"));
    assert!(second.contains("1970-01-01T00:00:00+0000"));
    assert!(second.ends_with("```{r}\n1+1\n```"));
}

#[test]
fn test_key_order_preserved() {
    let format = RmdFormat::default();
    let nb = format.parse("---\nzeta: 1\nalpha: 2\nmid: 3\n---\ntext").unwrap();
    let rmd = format.serialize(&nb).unwrap();

    assert!(rmd.starts_with("---\nzeta: 1\nalpha: 2\nmid: 3\n---\n"));
}

#[test]
fn test_malformed_header_is_dropped() {
    let nb = RmdFormat::default()
        .parse(&fixture("malformed_header.Rmd"))
        .expect("Malformed header must not abort parsing");

    assert!(nb.header().is_none());
    assert_eq!(kinds(&nb), vec!["markdown", "code", "markdown"]);
    assert_eq!(nb.cells[0].source().joined(), "Intro paragraph.\n\n");
}

#[test]
fn test_adjacent_delimiters_are_not_a_header() {
    let nb = RmdFormat::default().parse("---\n---\ntext").unwrap();

    assert!(nb.header().is_none());
    assert_eq!(nb.cells[0].source().joined(), "---\n---\ntext\n");
}

#[test]
fn test_single_delimiter_is_not_a_header() {
    let nb = RmdFormat::default().parse("---\ntitle: x\n").unwrap();

    assert!(nb.header().is_none());
    assert_eq!(nb.cells[0].source().joined(), "---\ntitle: x\n");
}

#[test]
fn test_rule_after_text_is_not_a_header() {
    let nb = RmdFormat::default()
        .parse("Intro\n---\nkey: value\n---\n")
        .unwrap();

    assert!(nb.header().is_none());
    assert_eq!(nb.cells.len(), 1);
}
