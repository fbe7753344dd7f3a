//! Redis cache client.
//!
//! A thin get/set adapter over `redis::aio::ConnectionManager`. The manager
//! is a long-lived, cheaply cloneable handle that reconnects on its own;
//! each call here is additionally bounded by the configured timeout so a
//! hung cache surfaces as [`ProxyError::CacheTimeout`] instead of a stuck
//! request.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use pcw_core::{AddressCache, CacheKey, ProxyError, Result};

/// Redis cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RedisCacheConfig {
    /// Redis host name.
    pub host: String,
    /// Redis port.
    pub port: u16,
    /// Per-call timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            host: "redis".into(),
            port: 6379,
            timeout_seconds: 2,
        }
    }
}

impl RedisCacheConfig {
    /// Creates a configuration for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// The connection URL for this configuration.
    pub fn url(&self) -> String {
        format!("redis://{}:{}", self.host, self.port)
    }
}

/// Redis-backed address cache.
pub struct RedisCache {
    conn: ConnectionManager,
    timeout_seconds: u64,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Connects to Redis and returns the adapter.
    ///
    /// A bad URL is a [`ProxyError::Config`]; a refused connection at
    /// startup is a [`ProxyError::CacheUnavailable`].
    pub async fn connect(config: &RedisCacheConfig) -> Result<Self> {
        let client = redis::Client::open(config.url())
            .map_err(|e| ProxyError::Config(format!("invalid redis url: {e}")))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| ProxyError::CacheUnavailable(e.to_string()))?;

        info!(url = %config.url(), "connected to redis");

        Ok(Self {
            conn,
            timeout_seconds: config.timeout_seconds,
        })
    }

    fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn map_redis_error(&self, e: redis::RedisError) -> ProxyError {
        if e.is_timeout() {
            ProxyError::CacheTimeout {
                seconds: self.timeout_seconds,
            }
        } else if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() {
            ProxyError::CacheUnavailable(e.to_string())
        } else {
            ProxyError::CacheProtocol(e.to_string())
        }
    }
}

#[async_trait]
impl AddressCache for RedisCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Bytes>> {
        let mut conn = self.conn.clone();

        let value: Option<Vec<u8>> =
            tokio::time::timeout(self.call_timeout(), conn.get(key.as_str()))
                .await
                .map_err(|_| ProxyError::CacheTimeout {
                    seconds: self.timeout_seconds,
                })?
                .map_err(|e| self.map_redis_error(e))?;

        debug!(key = %key, present = value.is_some(), "redis get");
        Ok(value.map(Bytes::from))
    }

    async fn put(&self, key: &CacheKey, payload: Bytes) -> Result<()> {
        let mut conn = self.conn.clone();

        tokio::time::timeout(
            self.call_timeout(),
            conn.set::<_, _, ()>(key.as_str(), payload.as_ref()),
        )
        .await
        .map_err(|_| ProxyError::CacheTimeout {
            seconds: self.timeout_seconds,
        })?
        .map_err(|e| self.map_redis_error(e))?;

        debug!(key = %key, bytes = payload.len(), "redis set");
        Ok(())
    }
}
