//! Remote state gateway over the HTTP key-value contract.

use reqwest::{Client, StatusCode};
use serde_json::json;
use url::Url;

use crate::sync::types::{StateDocument, SyncError};

/// Fetch/upsert contract against the remote store. The session layer only
/// sees this trait; tests substitute an in-memory implementation.
pub trait StateGateway {
    /// Fetch the stored document for `user_id`. `Ok(None)` is the expected
    /// not-found outcome on first run.
    fn fetch(&self, user_id: &str) -> Result<Option<StateDocument>, SyncError>;

    /// Push the whole document, replacing whatever the store currently
    /// holds for `user_id` (last-writer-wins, no merge).
    fn upsert(&self, user_id: &str, doc: &StateDocument) -> Result<(), SyncError>;
}

/// HTTP gateway talking to the backend's `/api/getData` and
/// `/api/saveData` endpoints.
///
/// Owns its tokio runtime so callers stay synchronous; remote calls block
/// the calling thread for their duration.
pub struct HttpStateGateway {
    base_url: Url,
    client: Client,
    rt: tokio::runtime::Runtime,
}

impl HttpStateGateway {
    pub fn new(base_url: &str) -> Result<Self, SyncError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
            rt: tokio::runtime::Runtime::new()?,
        })
    }

    fn endpoint(&self, path: &str, user_id: &str) -> Result<Url, SyncError> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut().append_pair("userId", user_id);
        Ok(url)
    }
}

impl StateGateway for HttpStateGateway {
    fn fetch(&self, user_id: &str) -> Result<Option<StateDocument>, SyncError> {
        let url = self.endpoint("api/getData", user_id)?;
        let resp = self.rt.block_on(self.client.get(url).send())?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(SyncError::Status {
                code: resp.status().as_u16(),
            });
        }

        let doc = self.rt.block_on(resp.json::<StateDocument>())?;
        Ok(Some(doc))
    }

    fn upsert(&self, user_id: &str, doc: &StateDocument) -> Result<(), SyncError> {
        let url = self.endpoint("api/saveData", user_id)?;
        // The contract takes {state, actions}; the server stamps userId in.
        let body = json!({ "state": doc.state, "actions": doc.actions });
        let resp = self.rt.block_on(self.client.post(url).json(&body).send())?;

        if !resp.status().is_success() {
            return Err(SyncError::Status {
                code: resp.status().as_u16(),
            });
        }
        Ok(())
    }
}
