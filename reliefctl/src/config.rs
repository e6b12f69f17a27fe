//! Credentials overlay for the CLI tool.
//!
//! `config.hcl` only carries per-site credentials, merged over the registry at
//! startup.  This keeps keys out of both the source and `sources.hcl`.
//!

use std::collections::BTreeMap;
use std::path::Path;

use eyre::Result;
use serde::Deserialize;
use tracing::trace;

use relief_common::{ConfigFile, Versioned};
use relief_sources::Auth;

/// Config filename
const CONFIG: &str = "config.hcl";
/// Current version
pub const CVERSION: usize = 1;

/// Configuration for the CLI tool, supposed to include parameters and most importantly
/// credentials for the various sites.
///
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Version
    pub version: usize,
    /// Each site credentials
    #[serde(default)]
    pub site: BTreeMap<String, Auth>,
}

impl Versioned for Config {
    const VERSION: usize = CVERSION;
    const FILENAME: &'static str = CONFIG;

    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Load the named file, or the default one.  A missing default file is fine, the
    /// tool then runs without credentials and only the render side will complain.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Config> {
        if fname.is_none() && !ConfigFile::<Config>::default_file().exists() {
            trace!("no {CONFIG}, running without credentials");
            return Ok(Config::default());
        }
        Ok(ConfigFile::<Config>::load(fname)?.into_inner())
    }
}
