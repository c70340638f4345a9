//! R Markdown format tests
//!
//! Tests for bidirectional R Markdown ↔ notebook conversion.

mod export;
mod frontmatter;
