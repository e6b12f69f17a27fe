//! Module to deal with the different kind of sites we can connect to to fetch or render data.
//!
//! The different submodules deal with the differences between sites:
//!
//! - authentication (anonymous, API key)
//! - fetching data (GET of the CSV body)
//! - rendering data (authenticated POST of a figure)
//!

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use relief_formats::{Figure, Format, LoadError};

// Re-export these modules for a shorter import path.
//
pub use access::*;
pub use auth::*;
pub use error::*;
pub use site::*;
pub use sources::*;

mod access;
mod auth;
mod error;
mod site;
mod sources;

#[macro_use]
mod macros;

/// Describe the different features of a site.
///
#[derive(Clone, Copy, Debug, Default, Deserialize, Ord, PartialOrd, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Capability {
    #[default]
    None = 0,
    Fetch = 1,
    Render = 2,
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Capability::None => "none",
            Capability::Fetch => "fetch",
            Capability::Render => "render",
        };
        write!(f, "{s}")
    }
}

/// We have two different traits, one per side of the pipeline.
///
#[derive(Debug)]
pub enum Flow {
    Fetchable(Box<dyn Fetchable>),
    Renderable(Box<dyn Renderable>),
}

impl Flow {
    /// Return the name of the underlying object
    ///
    #[inline]
    pub fn name(&self) -> String {
        match self {
            Flow::Fetchable(s) => s.name(),
            Flow::Renderable(s) => s.name(),
        }
    }
}

/// This trait enables us to manage different ways of connecting and fetching data under
/// a single interface.
///
pub trait Fetchable: Debug {
    /// Return site's name
    fn name(&self) -> String;
    /// If credentials are needed, get a token for subsequent operations
    fn authenticate(&self) -> Result<String, AuthError>;
    /// Fetch actual data
    fn fetch(&self, token: &str) -> Result<String, LoadError>;
    /// Returns the input format
    fn format(&self) -> Format;
}

/// This trait covers the other network boundary: submitting a figure to a hosted
/// rendering service under a given name.  The response body is never interpreted,
/// only the status line is.
///
pub trait Renderable: Debug {
    /// Return site's name
    fn name(&self) -> String;
    /// Check credentials are present and usable for subsequent operations
    fn authenticate(&self) -> Result<String, AuthError>;
    /// Submit the figure for rendering under `name`
    fn submit(&self, figure: &Figure, name: &str) -> eyre::Result<()>;
}

/// Default configuration filename
const CONFIG: &str = "sources.hcl";

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
