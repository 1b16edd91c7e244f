//! # Prospect Challenge Core Library
//!
//! This library provides the core business logic for the Prospect Challenge
//! sales-prospecting tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; the backend service
//! is a thin document store behind an HTTP key-value contract.
//!
//! ## Architecture
//!
//! - **Challenge Engine**: An in-memory state model for points, per-category
//!   action counters and the LinkedIn post rotation; every mutation produces
//!   an [`Event`]
//! - **Sync**: Write-behind persistence to a remote key-value store with a
//!   single debounced pending-save slot
//! - **Storage**: TOML-based configuration and the locally persisted user id
//!
//! ## Key Components
//!
//! - [`ChallengeEngine`]: Core state engine (points, counters, rotation)
//! - [`ChallengeSession`]: Engine + gateway + debounce, one per session
//! - [`StateGateway`]: Remote fetch/upsert contract
//! - [`Config`]: Application configuration management

pub mod challenge;
pub mod error;
pub mod events;
pub mod storage;
pub mod sync;

pub use challenge::{
    ActionCategory, ActionProgress, ActionTracker, CategoryProgress, ChallengeEngine,
    ChallengeState, PostCategory, PostEntry, PostRotation,
};
pub use error::{ConfigError, CoreError, IdentityError};
pub use events::Event;
pub use storage::Config;
pub use sync::{
    ActionsDocument, ChallengeSession, HttpStateGateway, StateDocument, StateGateway, SyncError,
    SyncStatus, WriteBehind,
};
