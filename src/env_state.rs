//! # Skywatch environment state
//!
//! This module defines [`SkywatchEnv`], the shared environment object passed to
//! the remote collaborators. It owns the persistent **HTTP client** used for
//! geocoding and catalog retrieval.
//!
//! The core computation modules never touch this object; only
//! [`crate::geocode`] and [`crate::catalog::search`] perform I/O.
//!
//! ## Structure
//!
//! ```text
//! SkywatchEnv
//! └── http_client  (ureq::Agent)
//! ```

use std::convert::TryFrom;
use std::time::Duration;

use ureq::{
    http::{self, Uri},
    Agent,
};

use crate::skywatch_errors::SkywatchError;

/// Shared environment holding the HTTP client used by the collaborators.
#[derive(Debug, Clone)]
pub struct SkywatchEnv {
    pub http_client: Agent,
}

impl Default for SkywatchEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl SkywatchEnv {
    /// Create a new environment with an HTTP client using default settings
    /// and a 10 second global timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();
        let agent: Agent = config.into();

        SkywatchEnv { http_client: agent }
    }

    /// Perform a GET request and return the response body as a string.
    pub(crate) fn get_from_url<U>(&self, url: U) -> Result<String, SkywatchError>
    where
        Uri: TryFrom<U>,
        <Uri as TryFrom<U>>::Error: Into<http::Error>,
    {
        Ok(self
            .http_client
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?)
    }
}
