use crate::common::{fixture, kinds, sources};
use insta::assert_snapshot;
use rmd_babel::format::Format;
use rmd_babel::formats::ipynb::IpynbFormat;
use rmd_babel::formats::rmd::RmdFormat;
use rmd_babel::notebook::{read_notebook, write_notebook, Cell, CellSource};
use rmd_babel::FormatError;

#[test]
fn test_outputs_and_ids_preserved() {
    let nb = IpynbFormat.parse(&fixture("outputs.ipynb")).unwrap();
    let written = IpynbFormat.serialize(&nb).unwrap();
    let reread = IpynbFormat.parse(&written).unwrap();

    assert_eq!(reread, nb);
    assert_eq!(kinds(&nb), vec!["markdown", "code", "raw"]);
    assert_eq!(reread.nbformat_minor, 5);
    match &reread.cells[1] {
        Cell::Code(code) => {
            assert_eq!(code.id.as_deref(), Some("b2"));
            assert_eq!(code.execution_count, Some(7));
            assert_eq!(code.outputs.len(), 1);
            assert_eq!(code.outputs[0]["output_type"], "execute_result");
            assert_eq!(code.metadata["scrolled"], true);
        }
        other => panic!("Expected code cell, got {other:?}"),
    }
}

#[test]
fn test_source_form_kept() {
    let nb = read_notebook(&fixture("outputs.ipynb")).unwrap();

    assert!(matches!(nb.cells[0].source(), CellSource::Lines(_)));
    assert!(matches!(nb.cells[2].source(), CellSource::Text(_)));
}

#[test]
fn test_written_layout() {
    let nb = RmdFormat::default().parse("Hello\n```{r}\n1+1\n```").unwrap();
    let json = write_notebook(&nb).unwrap();

    assert_snapshot!(json, @r###"
{
 "cells": [
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": [
    "Hello\n"
   ]
  },
  {
   "cell_type": "code",
   "execution_count": null,
   "metadata": {
    "collapsed": true,
    "autoscroll": false
   },
   "outputs": [],
   "source": [
    "1+1"
   ]
  }
 ],
 "metadata": {
  "kernelspec": {
   "display_name": "R",
   "language": "R",
   "name": "ir"
  },
  "language_info": {
   "name": "R",
   "file_extension": ".r",
   "codemirror_mode": "r",
   "mimetype": "text/x-r-source",
   "pygments_lexer": "r"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 0
}
"###);
    assert!(json.ends_with("}\n"));
}

#[test]
fn test_v3_notebook_upgraded() {
    let nb = read_notebook(&fixture("legacy_v3.ipynb")).unwrap();

    assert_eq!(nb.nbformat, 4);
    assert!(!nb.metadata.contains_key("name"));
    assert_eq!(kinds(&nb), vec!["markdown", "markdown", "code"]);
    assert_eq!(
        sources(&nb),
        vec!["## Results", "Some *notes*.\nMore notes.", "x <- rnorm(10)\nmean(x)"]
    );
    match &nb.cells[2] {
        Cell::Code(code) => {
            assert_eq!(code.execution_count, Some(1));
            assert!(!code.metadata.contains_key("language"));
            assert_eq!(nb.cells[2].chunk_options(), Some("echo=TRUE"));
        }
        other => panic!("Expected code cell, got {other:?}"),
    }
}

#[test]
fn test_v3_notebook_exports_to_rmd() {
    let nb = read_notebook(&fixture("legacy_v3.ipynb")).unwrap();
    let rmd = RmdFormat::default().serialize(&nb).unwrap();

    assert_snapshot!(rmd, @r###"
## Results

Some *notes*.
More notes.

```{r, echo=TRUE}
x <- rnorm(10)
mean(x)
```
"###);
}

#[test]
fn test_unsupported_versions() {
    let result = read_notebook(r#"{"nbformat": 2, "nbformat_minor": 0, "worksheets": []}"#);
    assert!(matches!(result, Err(FormatError::NotSupported(_))));

    let result = read_notebook(r#"{"cells": [], "metadata": {}, "nbformat": 5, "nbformat_minor": 0}"#);
    assert!(matches!(result, Err(FormatError::NotSupported(_))));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        read_notebook("{ not json"),
        Err(FormatError::ParseError(_))
    ));
    assert!(matches!(
        read_notebook(r#"{"cells": []}"#),
        Err(FormatError::ParseError(_))
    ));
}
