//! Elevation dataset site-specifics
//!
//! Phases:
//! 1. `authenticate()` is a pass-through: the dataset is either public or keyed
//! 2. use the (possibly empty) key to GET the CSV body
//!
//! Data fetched is raw CSV text, parsed into a `Grid` by the caller.
//!
//! This implement the `Fetchable` trait described in `lib.rs`.
//!

use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use tracing::{debug, trace};

use relief_formats::{Format, LoadError};

use crate::site::Site;
use crate::{http_get, http_get_auth, Auth, AuthError, Capability, Fetchable};

/// This describe an HTTP endpoint serving a CSV elevation matrix.
///
#[derive(Clone, Debug)]
pub struct Elevation {
    /// Describe the different features of the source
    pub features: Vec<Capability>,
    /// Site name from the registry
    pub site: String,
    /// Input format
    pub format: Format,
    /// Base site url taken from config
    pub base_url: String,
    /// Add this to `base_url` to fetch data
    pub get: String,
    /// Optional API key
    pub api_key: String,
    /// reqwest blocking client
    pub client: Client,
}

impl Elevation {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("elevation::new");

        // Set some reasonable defaults
        //
        Elevation {
            features: vec![Capability::Fetch],
            site: "elevation".to_owned(),
            format: Format::Csv,
            base_url: "".to_owned(),
            get: "".to_owned(),
            api_key: "".to_owned(),
            client: Client::new(),
        }
    }

    /// Load our site details from what is in the configuration file
    ///
    #[tracing::instrument]
    pub fn load(&mut self, site: &Site) -> &mut Self {
        trace!("elevation::load({site})");

        self.site = site.name.clone();
        self.format = site.format();
        self.base_url = site.base_url.to_owned();
        if let Some(Auth::Key { api_key }) = &site.auth {
            self.api_key = api_key.to_owned();
        }
        if let Some(get) = site.route("get") {
            self.get = get.to_owned();
        }
        self
    }
}

impl Default for Elevation {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetchable for Elevation {
    fn name(&self) -> String {
        self.site.to_string()
    }

    /// No token round-trip here: the key from the registry is the token.
    ///
    #[tracing::instrument(skip(self))]
    fn authenticate(&self) -> Result<String, AuthError> {
        trace!("elevation::authenticate");

        Ok(self.api_key.clone())
    }

    /// Fetch the CSV body as a long String.
    ///
    #[tracing::instrument(skip(self))]
    fn fetch(&self, token: &str) -> Result<String, LoadError> {
        trace!("elevation::fetch");

        let url = format!("{}{}", self.base_url, self.get);
        let resp = if token.is_empty() {
            http_get!(self, url)
        } else {
            http_get_auth!(self, url, token)
        }
        .map_err(|e| LoadError::HTTP(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let resp = resp.text().map_err(|e| LoadError::HTTP(e.to_string()))?;
        if resp.trim().is_empty() {
            return Err(LoadError::Empty);
        }

        debug!("{} bytes read.", resp.len());
        Ok(resp)
    }

    /// Returns the site's input format
    ///
    fn format(&self) -> Format {
        self.format
    }
}
