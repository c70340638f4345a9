//! Export tests for R Markdown
//!
//! Rendered documents are checked with inline snapshots.

use crate::common::{code, fixture, markdown, notebook};
use insta::assert_snapshot;
use rmd_babel::format::{Format, SerializeOptions};
use rmd_babel::formats::rmd::RmdFormat;
use rmd_babel::notebook::{read_notebook, RawCell};
use rmd_babel::notebook::Cell;
use serde_json::json;

#[test]
fn test_basic_document_rerender() {
    let format = RmdFormat::default();
    let nb = format.parse(&fixture("basic.Rmd")).unwrap();
    let rmd = format.serialize(&nb).unwrap();

    assert_snapshot!(rmd, @r###"
markdown-0-0

markdown-0-1

```{r}
code-1
```

markdown-2-0
markdown-2-1

```{r}
code-3
```
"###);
}

#[test]
fn test_chunk_options_rendered_after_comma() {
    let format = RmdFormat::default();
    let nb = format.parse(&fixture("chunks.Rmd")).unwrap();
    let rmd = format.serialize(&nb).unwrap();

    assert!(rmd.starts_with("```{r}\n# no-options 0\n```"));
    assert!(rmd.contains("```{r, foo=1}\n# single-option 1\n```"));
    assert!(rmd.contains("```{r, eval=-(4:5), results='markup', tidy=TRUE}"));
    assert!(rmd.contains("```{r, spaces=3}"));
    assert!(rmd.contains("```{r, foo=5}"));
    assert!(rmd.contains("```{r, foo=6}"));
    assert!(rmd.contains("```{r}\n# r-comma-noopts 7"));
}

#[test]
fn test_notebook_export() {
    let nb = read_notebook(&fixture("outputs.ipynb")).unwrap();
    let rmd = RmdFormat::default().serialize(&nb).unwrap();

    assert_snapshot!(rmd, @r###"
---
title: Stored
---

# Analysis

Text with `r 1+1` inline.

```{r, fig.width=7}
plot(cars)
summary(cars)
```
"###);
}

#[test]
fn test_source_newlines_not_doubled() {
    let nb = notebook(vec![
        markdown("intro\n"),
        code("\nx <- 1\n", None),
        markdown("\noutro"),
    ]);
    let rmd = RmdFormat::default().serialize(&nb).unwrap();

    assert_eq!(rmd, "intro\n\n```{r}\nx <- 1\n```\n\noutro");
}

#[test]
fn test_raw_cells_skipped() {
    let raw: Cell = serde_json::from_value(json!({
        "cell_type": "raw", "metadata": {}, "source": "raw text"
    }))
    .unwrap();
    assert!(matches!(raw, Cell::Raw(RawCell { .. })));

    let nb = notebook(vec![markdown("before"), raw, markdown("after")]);
    let rmd = RmdFormat::default().serialize(&nb).unwrap();
    assert_eq!(rmd, "before\n\nafter");
}

#[test]
fn test_explicit_header_option() {
    let nb = notebook(vec![markdown("body")]);
    let options = SerializeOptions::default().with_header(json!({"title": "Given"}));
    let rmd = RmdFormat::default()
        .serialize_with_options(&nb, &options)
        .unwrap();

    assert_eq!(rmd, "---\ntitle: Given\n---\n\nbody");
}

#[test]
fn test_empty_notebook() {
    let nb = notebook(vec![]);
    assert_eq!(RmdFormat::default().serialize(&nb).unwrap(), "");
}

#[test]
fn test_language_mismatch_still_renders() {
    let mut nb = notebook(vec![code("print(1)", None)]);
    nb.metadata["language_info"]["name"] = json!("python");

    let rmd = RmdFormat::default().serialize(&nb).unwrap();
    assert_eq!(rmd, "```{r}\nprint(1)\n```");
}
