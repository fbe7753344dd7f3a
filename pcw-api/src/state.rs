//! App state and process configuration.

use std::sync::Arc;

use pcw_cache::RedisCacheConfig;
use pcw_core::{AddressCache, AddressProvider};
use pcw_lookup::LookupService;
use pcw_upstream::ProviderConfig;

/// Process configuration, environment-first with `.env` fallback.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Port the proxy listens on.
    pub http_port: u16,
    /// Cache store connection settings.
    pub redis: RedisCacheConfig,
    /// Upstream provider settings.
    pub upstream: ProviderConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            redis: RedisCacheConfig::default(),
            upstream: ProviderConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the environment.
    ///
    /// Recognized variables: `HTTP_PORT`, `REDIS_HOST`, `REDIS_PORT`,
    /// `CACHE_TIMEOUT_SECONDS`, `UPSTREAM_URL`, `UPSTREAM_TIMEOUT_SECONDS`.
    /// Anything unset falls back to the defaults above.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Self {
            http_port: env_parsed("HTTP_PORT", defaults.http_port),
            redis: RedisCacheConfig {
                host: env_string("REDIS_HOST", defaults.redis.host),
                port: env_parsed("REDIS_PORT", defaults.redis.port),
                timeout_seconds: env_parsed(
                    "CACHE_TIMEOUT_SECONDS",
                    defaults.redis.timeout_seconds,
                ),
            },
            upstream: ProviderConfig {
                base_url: env_string("UPSTREAM_URL", defaults.upstream.base_url),
                timeout_seconds: env_parsed(
                    "UPSTREAM_TIMEOUT_SECONDS",
                    defaults.upstream.timeout_seconds,
                ),
            },
        }
    }
}

fn env_string(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Shared per-process state: the orchestrator over its injected adapters.
pub struct AppState {
    /// The cache-aside pipeline.
    pub lookup: LookupService,
}

impl AppState {
    /// Wires the orchestrator to the given adapters.
    pub fn new(cache: Arc<dyn AddressCache>, provider: Arc<dyn AddressProvider>) -> Self {
        Self {
            lookup: LookupService::new(cache, provider),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.redis.port, 6379);
    }
}
