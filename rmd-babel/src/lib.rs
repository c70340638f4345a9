//! Conversion between Jupyter notebooks and R Markdown documents
//!
//!     This crate provides a uniform interface for converting between the notebook model and its
//!     text representations: the `.ipynb` JSON container, fenced R Markdown (`.Rmd`) and knitr
//!     spin scripts (`.R`).
//!
//!     This is a pure lib, that is, it powers the ipyrmd cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it to std print, env vars etc.
//!     Diagnostics are emitted as tracing events and the caller decides where they go.
//!
//! Architecture
//!
//!     Every conversion goes through the notebook model (./notebook/nodes.rs). Flat text is
//!     segmented into cells by a line-driven two-state machine, and cells are rendered back into
//!     blocks joined by paragraph breaks. The pieces both flat dialects share (text joining,
//!     the YAML header bridge and the segmenter buffer) live in ./common, so format code only
//!     deals with its own line patterns.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── convert.rs              # ConvertSpec and the file drivers
//!     ├── notebook
//!     │   ├── nodes.rs            # Notebook, Cell, CellSource, NotebookDefaults
//!     │   └── container.rs        # JSON read/write, version 3 upgrade
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     │   └── common              # Shared format checks
//!     ├── common
//!     │   ├── text.rs             # join / prefix helpers
//!     │   ├── header.rs           # YAML header bridge
//!     │   └── segmenter.rs        # CellBuffer and SegmentState
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── <format>
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <docname>.<ext>
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Round tripping
//!
//!     Flat text cannot hold everything a notebook does: outputs, execution counts and raw cells are
//!     lost when going to R Markdown or spin. What must survive is cell order, cell source (modulo
//!     trailing whitespace per line), chunk options (`metadata.Rmd_chunk_options`) and the header
//!     (`metadata.Rmd_header`). Rendering, segmenting and rendering again yields the first rendering.
//!
//! Library Choices
//!
//!     Notebook JSON goes through serde_json with preserved key order, headers through serde_yaml
//!     parsed straight into serde_json values, and line patterns through regex.
pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod notebook;
pub mod registry;

pub mod common;

pub use convert::{
    convert_file, convert_str, ipynb_to_rmd, ipynb_to_spin, load_header, rmd_to_ipynb,
    spin_to_ipynb, ConvertSpec,
};
pub use error::{ConvertError, FormatError};
pub use format::{Format, SerializeOptions};
pub use notebook::{Notebook, NotebookDefaults};
pub use registry::FormatRegistry;
