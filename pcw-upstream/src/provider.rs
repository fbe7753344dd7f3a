//! HTTP client for the external address-lookup provider.
//!
//! The provider exposes the same path shape the proxy serves:
//! `GET {base}/pcw/{api_key}/address/{catalog}/{fragment}?format=json`.
//! One attempt per call; a non-2xx reply is a valid [`ProviderReply`], not
//! an adapter failure, so the pipeline can relay the provider's own error
//! semantics untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use pcw_core::{AddressProvider, Catalog, ProviderReply, ProxyError, Result};

/// Upstream provider configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider, e.g. `http://mock-service:8080`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://mock-service:8080".into(),
            timeout_seconds: 10,
        }
    }
}

impl ProviderConfig {
    /// Creates a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// HTTP address provider client.
pub struct HttpAddressProvider {
    config: ProviderConfig,
    http_client: reqwest::Client,
}

impl HttpAddressProvider {
    /// Creates a provider client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ProviderConfig::new(base_url))
    }

    /// Creates a provider client with custom configuration.
    pub fn with_config(config: ProviderConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    fn lookup_url(&self, catalog: Catalog, api_key: &str, fragment: &str) -> String {
        format!(
            "{}/pcw/{}/address/{}/{}?format=json",
            self.config.base_url.trim_end_matches('/'),
            api_key,
            catalog.prefix(),
            fragment
        )
    }

    fn map_reqwest_error(&self, e: reqwest::Error) -> ProxyError {
        if e.is_timeout() {
            ProxyError::UpstreamTimeout {
                seconds: self.config.timeout_seconds,
            }
        } else {
            ProxyError::UpstreamUnavailable(e.to_string())
        }
    }
}

#[async_trait]
impl AddressProvider for HttpAddressProvider {
    #[instrument(skip(self, api_key))]
    async fn fetch(
        &self,
        catalog: Catalog,
        api_key: &str,
        fragment: &str,
    ) -> Result<ProviderReply> {
        let url = self.lookup_url(catalog, api_key, fragment);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        debug!(status, bytes = body.len(), "upstream reply");
        Ok(ProviderReply { status, body })
    }
}
