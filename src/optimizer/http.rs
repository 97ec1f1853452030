//! Blocking HTTP client for the optimize service.

use std::time::Duration;

use super::{OptimizeRequest, OptimizeResponse, OptimizerService};
use crate::config::OptimizerConfig;
use crate::error::{CartwiseError, Result};

pub struct HttpOptimizer {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for HttpOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOptimizer")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpOptimizer {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        if endpoint.trim().is_empty() {
            return Err(CartwiseError::MissingConfig("optimizer.endpoint".to_string()));
        }
        if endpoint.starts_with("http://") {
            tracing::debug!("optimizer endpoint uses unencrypted HTTP");
        }

        let timeout = Duration::from_secs(timeout_secs.max(1));
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cartwise/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| CartwiseError::Config(format!("optimizer http client: {err}")))?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn from_config(config: &OptimizerConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| CartwiseError::MissingConfig("optimizer.endpoint".to_string()))?;
        Self::new(endpoint, config.timeout_secs)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OptimizerService for HttpOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse> {
        tracing::debug!(endpoint = %self.endpoint, items = request.cart.len(), "sending optimize request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|err| CartwiseError::ExternalFetch(format!("optimize request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CartwiseError::ExternalFetch(format!("optimizer HTTP {status}")));
        }

        response
            .json()
            .map_err(|err| CartwiseError::ExternalFetch(format!("optimizer response parse: {err}")))
    }
}
