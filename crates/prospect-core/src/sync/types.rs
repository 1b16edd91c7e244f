//! Core types for remote state synchronization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::{ActionTracker, ChallengeState, PostRotation};

/// The action side of the stored document: the rotation plus the six
/// counters, flattened so the JSON keys sit next to `linkedinPosts`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsDocument {
    pub linkedin_posts: PostRotation,
    #[serde(flatten)]
    pub tracker: ActionTracker,
}

/// The whole persisted document for one user, exactly as stored remotely:
/// `{userId, state, actions}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    #[serde(default)]
    pub user_id: String,
    pub state: ChallengeState,
    pub actions: ActionsDocument,
}

/// Current sync status of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Last successful save or load.
    pub last_sync_at: Option<DateTime<Utc>>,
    /// Whether a debounced save is waiting to be sent.
    pub pending_save: bool,
}

/// Transport errors. Not-found is not represented here -- the gateway maps
/// it to `Ok(None)` because it is the expected first-run outcome.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned HTTP {code}")]
    Status { code: u16 },

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
