//! Library part of the `reliefctl` utility.
//!
//! The data formats are in the `relief-formats` crate and the sites' parameters in the
//! `relief-sources` crate.  This crate only glues them together: resolve a site from
//! the registry, run the fetch → grid → figure → submit pipeline, and present the
//! registry content.
//!

// Re-export
//
pub use cli::*;
pub use cmds::*;
pub use config::*;

mod cli;
mod cmds;
mod config;

/// Default fetch site
pub const DEF_SITE: &str = "mt-bruno";
/// Default render site
pub const DEF_RENDERER: &str = "chart-studio";
/// Default destination name for the rendered figure
pub const DEF_FILENAME: &str = "elevations-3d-surface";
