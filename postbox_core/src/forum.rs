use crate::rest::RestClient;
use crate::store_config::Transport;
use crate::{Context, Result, StoreConfig};
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use redis::AsyncCommands;

/// Central handle to the remote store that every queue context shares
#[derive(Clone)]
pub struct Forum {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Rest(RestClient),
    Redis(Pool),
}

impl Forum {
    /// Create a forum for the given store; no requests are made until the first command
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let backend = match config.transport()? {
            Transport::Rest => Backend::Rest(RestClient::new(config.url(), config.token())?),
            // native URLs carry their own credentials, e.g. `rediss://default:<token>@host:6379`
            Transport::Redis => {
                let pool = PoolConfig::from_url(config.url()).create_pool(Some(Runtime::Tokio1))?;
                Backend::Redis(pool)
            }
        };
        Ok(Self { backend })
    }

    /// Create a context for a specific queue
    pub fn queue(&self, queue: &str) -> Context {
        Context::new(self.clone(), queue)
    }

    /// Round-trip liveness check
    pub async fn ping(&self) -> Result<String> {
        match &self.backend {
            Backend::Rest(client) => client.ping().await,
            Backend::Redis(pool) => {
                let mut conn = pool.get().await?;
                let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
                Ok(pong)
            }
        }
    }

    /// Append to the tail of the list, returning the list length after the push
    pub async fn rpush(&self, key: &str, value: &str) -> Result<usize> {
        match &self.backend {
            Backend::Rest(client) => client.rpush(key, value).await,
            Backend::Redis(pool) => {
                let mut conn = pool.get().await?;
                let length: usize = conn.rpush(key, value).await?;
                Ok(length)
            }
        }
    }

    /// Remove and return the head of the list
    pub async fn lpop(&self, key: &str) -> Result<Option<String>> {
        match &self.backend {
            Backend::Rest(client) => client.lpop(key).await,
            Backend::Redis(pool) => {
                let mut conn = pool.get().await?;
                let entry: Option<String> = conn.lpop(key, None).await?;
                Ok(entry)
            }
        }
    }
}
