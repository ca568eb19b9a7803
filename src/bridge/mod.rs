//! HTTP bridge to the training service
//!
//! Hands the data-mirror snapshot to the training backend and brings back
//! its answers. The bridge only ever works on owned snapshots, so a failed
//! exchange can never leave the editor's mirrors half-updated.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{NetsketchError, Result};
use crate::wire::{EpochProgress, ProbeRequest, TopologySpec};

/// Where the training service listens when nothing else is configured.
pub const DEFAULT_TRAINING_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the training-service URL.
pub const TRAINING_URL_ENV: &str = "NETSKETCH_TRAINING_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the training service.
#[derive(Debug)]
pub struct TrainingBridge {
    base_url: String,
    client: Client,
}

impl TrainingBridge {
    /// Create a bridge against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(bridge_err)?;
        Ok(Self { base_url, client })
    }

    /// Create a bridge from `NETSKETCH_TRAINING_URL`, falling back to the
    /// default local address.
    pub fn from_env() -> Result<Self> {
        let url =
            std::env::var(TRAINING_URL_ENV).unwrap_or_else(|_| DEFAULT_TRAINING_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a topology snapshot. The service replies with an echo of the
    /// (possibly adjusted) topology, which the caller feeds back into the
    /// facade via `load`.
    pub fn submit_topology(&self, spec: &TopologySpec) -> Result<TopologySpec> {
        let url = format!("{}/setup-network", self.base_url);
        info!(%url, layers = spec.len(), "submitting topology");

        let response = self
            .client
            .post(&url)
            .json(spec)
            .send()
            .map_err(bridge_err)?;
        self.check_status(&response)?;

        let echo: TopologySpec = response.json().map_err(bridge_err)?;
        debug!(layers = echo.len(), "training service echoed topology");
        Ok(echo)
    }

    /// Submit a neuron-activation probe and wait for one progress message.
    pub fn probe(&self, request: &ProbeRequest) -> Result<EpochProgress> {
        let url = format!("{}/probe", self.base_url);
        debug!(%url, layer = request.layer_index, node = request.node_index, "probing");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(bridge_err)?;
        self.check_status(&response)?;

        response.json().map_err(bridge_err)
    }

    fn check_status(&self, response: &reqwest::blocking::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NetsketchError::Bridge {
                reason: format!("training service returned {}", status),
            })
        }
    }
}

fn bridge_err(err: reqwest::Error) -> NetsketchError {
    NetsketchError::Bridge {
        reason: err.to_string(),
    }
}
