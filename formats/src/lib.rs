//! Definition of the data formats used by `relief`.
//!
//! This module makes the link between the raw CSV text fetched from a source and the
//! figure descriptor submitted to the rendering service:
//!
//! - `Grid` is the 2-D elevation matrix parsed from CSV.
//! - `Figure` wraps one surface trace over a `Grid` plus the layout record.
//! - `Format` names the input formats a source can serve.
//!

// Re-export for convenience
//
pub use figure::*;
pub use format::*;
pub use grid::*;

mod figure;
mod format;
mod grid;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
