//! Pool of reusable HTTP clients
//!
//! A client is checked out for the duration of one request and returned when
//! the guard is dropped. Clients hold no per-request state, so any idle
//! instance can serve any lookup.

use std::ops::Deref;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::config::CheckerConfig;
use crate::version::error::LookupError;

pub struct ClientPool {
    idle: Mutex<Vec<reqwest::Client>>,
    config: CheckerConfig,
}

impl ClientPool {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Checks out an idle client, building a new one if none is available
    pub fn acquire(&self) -> Result<PooledClient<'_>, LookupError> {
        let reused = self.lock_idle()?.pop();
        let client = match reused {
            Some(client) => client,
            None => self.build_client()?,
        };

        Ok(PooledClient { pool: self, client })
    }

    /// Number of clients currently waiting to be reused
    pub fn idle_count(&self) -> usize {
        self.idle.lock().map(|idle| idle.len()).unwrap_or(0)
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        debug!("Building HTTP client");

        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(self.config.timeout())
            .connect_timeout(self.config.connect_timeout())
            .build()?;

        Ok(client)
    }

    fn release(&self, client: reqwest::Client) {
        // A poisoned lock only costs us the reuse of this client
        if let Ok(mut idle) = self.idle.lock() {
            if idle.len() < self.config.max_idle_clients {
                idle.push(client);
            }
        }
    }

    fn lock_idle(&self) -> Result<MutexGuard<'_, Vec<reqwest::Client>>, LookupError> {
        self.idle.lock().map_err(|_| LookupError::LockPoisoned)
    }
}

impl Default for ClientPool {
    fn default() -> Self {
        Self::new(CheckerConfig::default())
    }
}

/// A client checked out of a [`ClientPool`]; returned to the pool on drop
pub struct PooledClient<'a> {
    pool: &'a ClientPool,
    client: reqwest::Client,
}

impl Deref for PooledClient<'_> {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl Drop for PooledClient<'_> {
    fn drop(&mut self) {
        // Clones share the same connection pool; this hands the handle back
        self.pool.release(self.client.clone());
    }
}
