//! Format-agnostic building blocks for the flat-text formats.
//!
//! Text joining, the YAML header bridge and the segmenter state are shared
//! by the fenced and spin dialects, which only differ in how they classify
//! lines and decorate rendered blocks.

pub mod header;
pub mod segmenter;
pub mod text;
