//! Common utilities for the flat-text formats
//!
//! Checks shared by the R Markdown and spin serializers before they render a
//! notebook.

use crate::notebook::Notebook;

/// Warn when the notebook kernel language is not the one the flat format
/// expects. Rendering continues regardless.
///
/// Returns whether the languages matched.
pub fn check_notebook_language(notebook: &Notebook, expected: &str) -> bool {
    let language = notebook.language();
    if language == Some(expected) {
        return true;
    }

    tracing::warn!(
        "Notebook language \"{}\" != {expected}",
        language.unwrap_or("None")
    );
    tracing::warn!("Output is unlikely to be a valid document for the {expected} kernel");
    false
}
