//! All sub-command implementations.
//!

pub use fetch::*;
pub use list::*;
pub use plot::*;

mod fetch;
mod list;
mod plot;
