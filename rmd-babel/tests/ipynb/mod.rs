//! Notebook container tests

mod container;
mod drivers;
