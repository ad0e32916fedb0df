//! Weather station dataset for the drift dashboard
//!
//! Reads the station CSV export and computes the aggregates shown next to
//! the drift animation: yearly means, monthly means and crop sowing windows.

pub mod crops;
pub mod dataset;
pub mod stats;

pub use crops::*;
pub use dataset::*;
pub use stats::*;
