//!  Module that defines what is a site (website, API endpoint, etc.)
//!
//! This is used to configure the list of possible sources through `sources.hcl`.
//!
//! Sites come in two kinds: `fetch` sites serve a CSV body, `render` sites accept a
//! figure submission.  Either kind can require credentials.  A set of routes can be
//! defined per site depending on how the API is designed.
//!

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use relief_formats::Format;

use crate::access::{chartstudio::ChartStudio, elevation::Elevation};
use crate::{Auth, Capability, Flow, Sources};

/// Describe what a site is and associated credentials.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Site {
    /// Name of the site, filled from the key in `sources.hcl`
    #[serde(default)]
    pub name: String,
    /// What the site is for
    pub dtype: Capability,
    /// Type of input
    pub format: String,
    /// Base URL (to avoid repeating)
    pub base_url: String,
    /// Credentials
    pub auth: Option<Auth>,
    /// Different URLs available
    pub routes: Option<BTreeMap<String, String>>,
}

impl Site {
    /// Basic `new()`
    ///
    pub fn new() -> Self {
        Site::default()
    }

    /// Load site by checking whether it is present in the configuration file
    ///
    #[tracing::instrument(skip(cfg))]
    pub fn load(name: &str, cfg: &Sources) -> Result<Flow> {
        trace!("Loading site {}", name);
        match cfg.get(name) {
            Some(site) => match site.dtype {
                Capability::Fetch => {
                    let s = Elevation::new().load(site).clone();
                    Ok(Flow::Fetchable(Box::new(s)))
                }
                Capability::Render => {
                    let s = ChartStudio::new().load(site).clone();
                    Ok(Flow::Renderable(Box::new(s)))
                }
                Capability::None => Err(eyre!("site {name} has no usable type")),
            },
            None => Err(eyre!("no such site {name}")),
        }
    }

    /// Return the site input format
    ///
    pub fn format(&self) -> Format {
        Format::from_str(&self.format).unwrap_or_default()
    }

    /// Return the list of routes
    ///
    pub fn list(&self) -> Vec<&String> {
        match &self.routes {
            Some(routes) => routes.keys().collect::<Vec<_>>(),
            _ => vec![],
        }
    }

    /// Check whether site has the mentioned route
    ///
    pub fn has(&self, meth: &str) -> bool {
        match &self.routes {
            Some(routes) => routes.contains_key(meth),
            _ => false,
        }
    }

    /// Retrieve a route
    ///
    pub fn route(&self, key: &str) -> Option<&String> {
        match &self.routes {
            Some(routes) => routes.get(key),
            _ => None,
        }
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let auth = match self.auth.clone() {
            Some(auth) => auth,
            _ => Auth::Anon,
        };
        write!(
            f,
            "{{ type={} format={} url={} auth={} routes={:?} }}",
            self.dtype, self.format, self.base_url, auth, self.routes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_default() -> Sources {
        Sources::builtin().unwrap()
    }

    #[test]
    fn test_site_load_good() {
        let cfg = set_default();

        let s = Site::load("mt-bruno", &cfg);
        assert!(s.is_ok());
        let s = s.unwrap();
        assert!(matches!(s, Flow::Fetchable(_)));
        assert_eq!("mt-bruno", s.name());
    }

    #[test]
    fn test_site_load_render() {
        let cfg = set_default();

        let s = Site::load("chart-studio", &cfg);
        assert!(s.is_ok());
        assert!(matches!(s.unwrap(), Flow::Renderable(_)));
    }

    #[test]
    fn test_site_load_unknown() {
        let cfg = set_default();

        let s = Site::load("bar", &cfg);
        assert!(s.is_err());
    }

    #[test]
    fn test_site_format() {
        let cfg = set_default();

        let s = cfg.get("mt-bruno").unwrap();
        assert_eq!(Format::Csv, s.format());
    }

    #[test]
    fn test_site_route() {
        let cfg = set_default();

        let s = cfg.get("mt-bruno").unwrap();
        assert!(s.has("get"));

        let r = s.route("get");
        assert!(r.is_some());
        assert_eq!(
            "/plotly/datasets/master/api_docs/mt_bruno_elevation.csv",
            r.unwrap()
        );
    }

    #[test]
    fn test_site_list() {
        let cfg = set_default();

        let s = cfg.get("chart-studio").unwrap();
        assert_eq!(vec!["plot"], s.list());
    }
}
