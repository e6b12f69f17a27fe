//! Hosted rendering service site-specifics
//!
//! Phases:
//! 1. `authenticate()` checks that a username/API key pair is configured
//! 2. `submit()` POSTs the serialized figure plus the target name to the `plot` route
//!
//! The service is treated as a black box: the response body is never interpreted,
//! only the status line is mapped onto the error taxonomy.
//!
//! This implement the `Renderable` trait described in `lib.rs`.
//!

use clap::{crate_name, crate_version};
use eyre::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, trace};

use relief_formats::Figure;

use crate::site::Site;
use crate::{http_post_basic, Auth, AuthError, Capability, RenderError, Renderable};

/// What we send for one rendering call.
///
#[derive(Debug, Serialize)]
struct Submission<'a> {
    /// Trace + layout
    figure: &'a Figure,
    /// Destination name (filename/slug) under the account
    filename: &'a str,
    /// Hosted plots are public by default
    world_readable: bool,
}

/// This describe the hosted plotting service we submit figures to.
///
#[derive(Clone, Debug)]
pub struct ChartStudio {
    /// Describe the different features of the source
    pub features: Vec<Capability>,
    /// Site name from the registry
    pub site: String,
    /// Base site url taken from config
    pub base_url: String,
    /// Add this to `base_url` to submit a figure
    pub plot: String,
    /// Auth data, account name
    pub username: String,
    /// Auth data, API key
    pub api_key: String,
    /// reqwest blocking client
    pub client: Client,
}

impl ChartStudio {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("chartstudio::new");

        // Set some reasonable defaults
        //
        ChartStudio {
            features: vec![Capability::Render],
            site: "chart-studio".to_owned(),
            base_url: "".to_owned(),
            plot: "".to_owned(),
            username: "".to_owned(),
            api_key: "".to_owned(),
            client: Client::new(),
        }
    }

    /// Load our site details from what is in the configuration file
    ///
    #[tracing::instrument]
    pub fn load(&mut self, site: &Site) -> &mut Self {
        trace!("chartstudio::load({site})");

        self.site = site.name.clone();
        self.base_url = site.base_url.to_owned();
        if let Some(Auth::UserKey { username, api_key }) = &site.auth {
            self.username = username.to_owned();
            self.api_key = api_key.to_owned();
        }
        if let Some(plot) = site.route("plot") {
            self.plot = plot.to_owned();
        }
        self
    }
}

impl Default for ChartStudio {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for ChartStudio {
    fn name(&self) -> String {
        self.site.to_string()
    }

    /// Credentials are injected through the configuration, never embedded.  Missing
    /// ones fail here, before any network call is made.
    ///
    #[tracing::instrument(skip(self))]
    fn authenticate(&self) -> Result<String, AuthError> {
        trace!("chartstudio::authenticate({:?})", &self.username);

        if self.username.is_empty() || self.api_key.is_empty() {
            return Err(AuthError::NoCredentials(self.site.clone()));
        }
        Ok(self.api_key.clone())
    }

    /// Submit the figure for rendering under `name`.  One POST, no retry.
    ///
    #[tracing::instrument(skip(self, figure))]
    fn submit(&self, figure: &Figure, name: &str) -> Result<()> {
        trace!("chartstudio::submit({name})");

        if self.plot.is_empty() {
            return Err(RenderError::NoRoute(self.site.clone()).into());
        }

        let data = Submission {
            figure,
            filename: name,
            world_readable: true,
        };

        let url = format!("{}{}", self.base_url, self.plot);
        let user = &self.username;
        let key = &self.api_key;
        let resp = http_post_basic!(self, url, user, key, &data)
            .map_err(|e| RenderError::HTTP(e.to_string()))?;

        let status = resp.status();
        debug!("status={status}");

        match status {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AuthError::Rejected(self.username.clone()).into())
            }
            StatusCode::TOO_MANY_REQUESTS => Err(RenderError::Quota.into()),
            s => Err(RenderError::Rejected(s.as_u16()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use relief_formats::Grid;

    use super::*;

    fn client(base_url: &str) -> ChartStudio {
        ChartStudio {
            features: vec![Capability::Render],
            site: "chart-studio".to_string(),
            base_url: base_url.to_string(),
            plot: "/clientresp".to_string(),
            username: "user".to_string(),
            api_key: "key".to_string(),
            client: Client::new(),
        }
    }

    fn figure() -> Figure {
        Figure::surface(&Grid::from_csv("1,2,3\n4,5,6\n7,8,9").unwrap())
    }

    #[test]
    fn test_chartstudio_no_credentials() {
        let mut c = client("http://localhost");
        c.username = "".to_string();

        let t = c.authenticate();
        assert!(matches!(t, Err(AuthError::NoCredentials(_))));
    }

    #[test]
    fn test_chartstudio_authenticate() {
        let c = client("http://localhost");

        let t = c.authenticate();
        assert!(t.is_ok());
        assert_eq!("key", t.unwrap());
    }

    #[test]
    fn test_chartstudio_submit() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST)
                .header(
                    "user-agent",
                    format!("{}/{}", crate_name!(), crate_version!()),
                )
                .header("content-type", "application/json")
                .path("/clientresp")
                .body_contains("elevations-3d-surface")
                .body_contains("\"type\":\"surface\"");
            then.status(200).body("{}");
        });

        let c = client(&server.base_url());
        let res = c.submit(&figure(), "elevations-3d-surface");

        m.assert();
        assert!(res.is_ok());
    }

    #[test]
    fn test_chartstudio_submit_rejected_auth() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/clientresp");
            then.status(401);
        });

        let c = client(&server.base_url());
        let res = c.submit(&figure(), "elevations-3d-surface");

        m.assert();
        assert!(res.is_err());
        assert!(res
            .unwrap_err()
            .downcast_ref::<AuthError>()
            .is_some());
    }

    #[test]
    fn test_chartstudio_submit_quota() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/clientresp");
            then.status(429);
        });

        let c = client(&server.base_url());
        let res = c.submit(&figure(), "elevations-3d-surface");

        m.assert();
        assert!(matches!(
            res.unwrap_err().downcast_ref::<RenderError>(),
            Some(RenderError::Quota)
        ));
    }

    #[test]
    fn test_chartstudio_submit_rejected() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST).path("/clientresp");
            then.status(500);
        });

        let c = client(&server.base_url());
        let res = c.submit(&figure(), "elevations-3d-surface");

        m.assert();
        assert!(matches!(
            res.unwrap_err().downcast_ref::<RenderError>(),
            Some(RenderError::Rejected(500))
        ));
    }

    #[test]
    fn test_chartstudio_no_route() {
        let mut c = client("http://localhost");
        c.plot = "".to_string();

        let res = c.submit(&figure(), "elevations-3d-surface");
        assert!(matches!(
            res.unwrap_err().downcast_ref::<RenderError>(),
            Some(RenderError::NoRoute(_))
        ));
    }
}
