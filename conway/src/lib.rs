//! Toroidal Game of Life with a shape census.
//!
//! [`step`] advances a [`Grid`] one generation with wrap-around neighbours.
//! [`Classifier`] scans a grid against the built-in [`PatternCatalog`] and
//! [`report::render`] turns the counts into a text record for a
//! [`ReportSink`].

pub mod classify;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod report;
pub mod step;

pub use classify::{classify, ClassificationResult, Classifier};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use patterns::{Category, PatternCatalog, Template};
pub use report::{publish, render, ReportSink, RunMeta};
pub use step::{next_row, run, step};
