//! Access methods, one module per site kind.
//!

pub mod chartstudio;
pub mod elevation;

pub use chartstudio::*;
pub use elevation::*;
