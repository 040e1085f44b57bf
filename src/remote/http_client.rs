use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;
use super::{RemoteClient, SyncError};

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
    ) -> Result<T, SyncError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|err| SyncError::Transport(err.to_string()))?;

        let resp = ensure_ok(resp, label)?;
        resp.json()
            .map_err(|err| SyncError::Decode(format!("{}: {}", label, err)))
    }

    pub(super) fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        label: &str,
    ) -> Result<(), SyncError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|err| SyncError::Transport(err.to_string()))?;

        ensure_ok(resp, label)?;
        Ok(())
    }
}

/// Classifies a non-2xx response by status, preferring the server-provided
/// `{message}` body for user-facing text.
fn ensure_ok(
    resp: reqwest::blocking::Response,
    label: &str,
) -> Result<reqwest::blocking::Response, SyncError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ErrorBody>()
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("{} failed", label));

    if status == reqwest::StatusCode::NOT_FOUND {
        Err(SyncError::NotFound(message))
    } else if status.is_server_error() {
        Err(SyncError::Server {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(SyncError::Client {
            status: status.as_u16(),
            message,
        })
    }
}
