//! This is the exposed part of the `relief-sources` API: the site registry.
//!

use std::collections::btree_map::{IntoValues, Iter, Keys, Values};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use relief_common::{ConfigFile, Versioned};

use crate::{Auth, Site, CONFIG};

/// Current `sources.hcl` version
const CVERSION: usize = 1;

/// What is read from the configuration file.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SourcesConfig {
    version: usize,
    site: BTreeMap<String, Site>,
}

impl Versioned for SourcesConfig {
    const VERSION: usize = CVERSION;
    const FILENAME: &'static str = CONFIG;

    fn version(&self) -> usize {
        self.version
    }
}

/// List of sites, this is the only exposed struct from here.
///
#[derive(Clone, Debug, Default)]
pub struct Sources {
    site: BTreeMap<String, Site>,
}

/// Initialise a `Sources` from a `BTreeMap`
///
impl From<BTreeMap<String, Site>> for Sources {
    fn from(value: BTreeMap<String, Site>) -> Self {
        Sources { site: value }
    }
}

/// Initialise a `Sources` from a list of pairs
///
impl From<Vec<(String, Site)>> for Sources {
    fn from(value: Vec<(String, Site)>) -> Self {
        let mut sites = BTreeMap::<String, Site>::new();
        value.iter().for_each(|(n, s)| {
            sites.insert(n.clone(), s.clone());
        });
        Sources { site: sites }
    }
}

impl From<SourcesConfig> for Sources {
    fn from(value: SourcesConfig) -> Self {
        // The site name is the block label, not a field in the file.
        //
        let all = value
            .site
            .iter()
            .map(|(n, s)| {
                let mut site = s.clone();

                site.name = n.to_string();
                (n.to_string(), site)
            })
            .collect::<Vec<_>>();
        Sources::from(all)
    }
}

impl Sources {
    /// Load the site registry.  Use the file given on the CLI if any, otherwise the
    /// default one, otherwise fall back to the builtin registry so the tool works
    /// out of the box.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Self> {
        let cfg = match fname {
            Some(fname) => ConfigFile::<SourcesConfig>::load(Some(fname))?.into_inner(),
            None => {
                let def = ConfigFile::<SourcesConfig>::default_file();
                if def.exists() {
                    ConfigFile::<SourcesConfig>::load(Some(def.as_path()))?.into_inner()
                } else {
                    trace!("no {CONFIG}, using builtin registry");
                    hcl::from_str(include_str!("sources.hcl"))?
                }
            }
        };
        Ok(Sources::from(cfg))
    }

    /// The builtin registry shipped with the crate.
    ///
    pub fn builtin() -> Result<Self> {
        let cfg: SourcesConfig = hcl::from_str(include_str!("sources.hcl"))?;
        Ok(Sources::from(cfg))
    }

    /// Install default files
    ///
    #[tracing::instrument]
    pub fn install_defaults(dir: &PathBuf) -> std::io::Result<()> {
        // Create config directory if needed
        //
        if !dir.exists() {
            fs::create_dir_all(dir)?
        }

        // Copy content of `sources.hcl` into place.
        //
        let fname: PathBuf = dir.join(CONFIG);
        let content = include_str!("sources.hcl");
        fs::write(fname, content)
    }

    /// Overlay credentials loaded from the CLI configuration file onto the
    /// matching sites.
    ///
    #[tracing::instrument(skip(self))]
    pub fn auth(&mut self, creds: BTreeMap<String, Auth>) {
        creds.into_iter().for_each(|(name, auth)| {
            if let Some(site) = self.site.get_mut(&name) {
                site.auth = Some(auth);
            }
        });
    }

    /// List of currently known sites into a nicely formatted string.
    ///
    #[tracing::instrument(skip(self))]
    pub fn list(&self) -> Result<String> {
        let header = vec!["Name", "Type", "Format", "URL", "Auth"];

        let mut builder = Builder::default();
        builder.push_record(header);

        self.site.iter().for_each(|(n, s)| {
            let auth = if let Some(auth) = &s.auth {
                match auth {
                    Auth::Anon => "open",
                    Auth::Key { .. } => "API key",
                    Auth::UserKey { .. } => "user+API key",
                    Auth::Login { .. } => "login",
                }
                .to_string()
            } else {
                "anon".to_owned()
            };

            let row = vec![
                n.clone(),
                s.dtype.to_string(),
                s.format.clone(),
                s.base_url.clone(),
                auth,
            ];
            builder.push_record(row);
        });

        let table = builder.build().with(Style::rounded()).to_string();
        let table = format!("Listing all sources:\n{table}");
        Ok(table)
    }
}

// -----

/// Helper methods, wrapping the inner `BTreeMap`.
///
impl Sources {
    /// Wrap `get`
    ///
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Site> {
        self.site.get(name)
    }

    /// Wrap `get_mut`
    ///
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Site> {
        self.site.get_mut(name)
    }

    /// Wrap `is_empty()`
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }

    /// Wrap `len()`
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.site.len()
    }

    /// Wrap `keys()`
    ///
    #[inline]
    pub fn keys(&self) -> Keys<'_, String, Site> {
        self.site.keys()
    }

    /// Wrap `iter()`
    ///
    #[inline]
    pub fn iter(&self) -> Iter<'_, String, Site> {
        self.site.iter()
    }

    /// Wrap `values()`
    ///
    #[inline]
    pub fn values(&self) -> Values<'_, String, Site> {
        self.site.values()
    }

    /// Wrap `into_values()`
    ///
    #[inline]
    pub fn into_values(self) -> IntoValues<String, Site> {
        self.site.into_values()
    }

    /// Wrap `contains_key()`
    ///
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.site.contains_key(name)
    }
}
