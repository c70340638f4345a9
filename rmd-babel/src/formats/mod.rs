//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the notebook model and its text representations.

pub mod common;
pub mod ipynb;
pub mod rmd;
pub mod spin;

pub use ipynb::IpynbFormat;
pub use rmd::RmdFormat;
pub use spin::SpinFormat;
