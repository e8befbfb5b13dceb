use anyhow::Result;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::{future::Future, time::Duration};
use tracing::{debug, error, warn};

/// Lock TTL in seconds. Short-lived so a crashed holder cannot wedge a key.
const LOCK_TTL_SECONDS: u64 = 10;

const LOCK_RETRY_INTERVAL_MS: u64 = 50;

/// 40 * 50ms = 2 seconds, well under the outbound request timeout.
const LOCK_MAX_RETRIES: u32 = 40;

/// Extra lifetime of the stale copy beyond the main TTL.
const STALE_EXTENSION_SECONDS: u64 = 300;

/// Read-through cache for geo lookups.
///
/// Every key lives under `namespace`, so several deployments can share one
/// Redis. Redis failures degrade to a direct fetch; only the fetch's own
/// error ever reaches the caller.
#[derive(Clone)]
pub struct RedisCache {
    client: Client,
    namespace: String,
}

impl RedisCache {
    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    pub fn open(url: &str, namespace: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Client::open(url)?, namespace))
    }

    /// `namespace:kind:id`, with `id` lower-cased and trimmed.
    pub fn key(&self, kind: &str, id: &str) -> String {
        format!("{}:{}:{}", self.namespace, kind, id.trim().to_lowercase())
    }

    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: u64) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)?;
        let _: () = conn.set_ex(key, json, ttl).await?;
        Ok(())
    }

    /// Fetch-through with stampede protection.
    ///
    /// On a miss only the lock winner calls `fetch_fn`; everyone else polls
    /// for the value, then falls back to the stale copy, then fetches
    /// directly. Fetch errors are never cached.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &str, ttl: u64, fetch_fn: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.get::<T>(key).await {
            Ok(Some(cached)) => {
                debug!(key, "cache hit");
                return Ok(cached);
            }
            Ok(None) => debug!(key, "cache miss"),
            Err(e) => {
                error!(key, error = %e, "Redis GET failed, bypassing cache");
                return fetch_fn().await;
            }
        }

        let stale_key = format!("{}:stale", key);
        let lock_key = format!("{}:lock", key);

        let mut conn = match self.client.get_multiplexed_async_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!(key, error = %e, "Redis connection failed, fetching directly");
                return fetch_fn().await;
            }
        };

        let lock_acquired: bool = redis::cmd("SET")
            .arg(&lock_key)
            .arg("1")
            .arg("NX")
            .arg("EX")
            .arg(LOCK_TTL_SECONDS)
            .query_async::<Option<String>>(&mut conn)
            .await
            .map(|v| v.is_some())
            .unwrap_or_else(|e| {
                error!(lock_key = %lock_key, error = %e, "Redis SET NX failed, treating as not acquired");
                false
            });

        if lock_acquired {
            let result = fetch_fn().await;

            if let Ok(value) = &result {
                if let Err(e) = self.set(key, value, ttl).await {
                    error!(key, error = %e, "Failed to write cache, response served uncached");
                }
                if let Err(e) = self
                    .set(&stale_key, value, ttl + STALE_EXTENSION_SECONDS)
                    .await
                {
                    warn!(key, error = %e, "Failed to write stale copy");
                }
            }

            if let Err(e) = conn.del::<_, ()>(&lock_key).await {
                warn!(key, error = %e, "Failed to release lock, it expires in {}s", LOCK_TTL_SECONDS);
            }

            return result;
        }

        debug!(key, "lock held by a peer, waiting");
        for attempt in 0..LOCK_MAX_RETRIES {
            tokio::time::sleep(Duration::from_millis(LOCK_RETRY_INTERVAL_MS)).await;
            match self.get::<T>(key).await {
                Ok(Some(cached)) => {
                    debug!(key, attempt, "cache populated by peer");
                    return Ok(cached);
                }
                Ok(None) => continue,
                Err(e) => {
                    error!(key, attempt, error = %e, "Redis failed while waiting");
                    break;
                }
            }
        }

        match self.get::<T>(&stale_key).await {
            Ok(Some(stale)) => {
                warn!(key, "serving stale copy");
                return Ok(stale);
            }
            Ok(None) => debug!(key, "no stale copy"),
            Err(e) => error!(stale_key = %stale_key, error = %e, "Redis failed reading stale copy"),
        }

        warn!(key, "stampede protection exhausted, fetching directly");
        fetch_fn().await
    }
}
