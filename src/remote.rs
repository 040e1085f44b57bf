use anyhow::{Context, Result};

mod error;
pub use self::error::SyncError;
mod http_client;
mod operations;
mod types;
pub use self::types::*;

/// Blocking client for the Stackly remote API. One fetch per remote
/// collection plus the create writes; see the operations module.
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("stackly")
            .build()
            .context("build reqwest client")?;
        let base_url = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
