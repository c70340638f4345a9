//! Notebook model shared by every format.
//!
//! Flat-text formats segment into a [`Notebook`] and render from one; the
//! notebook container format reads and writes it as JSON. Fields that carry
//! no meaning for flat text (outputs, execution counts, unknown metadata)
//! are held verbatim so a notebook survives a read/write cycle.

pub mod container;
pub mod nodes;

pub use container::{read_notebook, write_notebook};
pub use nodes::{
    Cell, CellSource, CodeCell, Kernelspec, LanguageInfo, MarkdownCell, Metadata, Notebook,
    NotebookDefaults, RawCell, NBFORMAT_MAJOR, RMD_CHUNK_OPTIONS_KEY, RMD_HEADER_KEY,
};
