//! One user session: engine + gateway + write-behind queue.
//!
//! The session performs the one-shot initial load, funnels every engine
//! mutation into the debounce slot and pushes due saves. All remote
//! failures degrade silently: the engine always stays usable with whatever
//! state it last held in memory.

use chrono::{DateTime, Utc};

use crate::challenge::{ActionCategory, ChallengeEngine, PostCategory};
use crate::events::Event;
use crate::sync::gateway::StateGateway;
use crate::sync::types::SyncStatus;
use crate::sync::write_behind::WriteBehind;

pub struct ChallengeSession<G: StateGateway> {
    user_id: String,
    engine: ChallengeEngine,
    gateway: G,
    queue: WriteBehind,
    last_sync_at: Option<DateTime<Utc>>,
}

impl<G: StateGateway> ChallengeSession<G> {
    /// Start a session with a fresh default engine. Call
    /// [`load`](Self::load) before mutating to pick up remote state.
    pub fn new(user_id: impl Into<String>, gateway: G, debounce_ms: u64) -> Self {
        Self {
            user_id: user_id.into(),
            engine: ChallengeEngine::new(),
            gateway,
            queue: WriteBehind::new(debounce_ms),
            last_sync_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn engine(&self) -> &ChallengeEngine {
        &self.engine
    }

    pub fn status(&self) -> SyncStatus {
        SyncStatus {
            last_sync_at: self.last_sync_at,
            pending_save: self.queue.has_pending(),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// One-shot initial load. Replaces the whole engine state when the
    /// remote store has a document; keeps the defaults on not-found or any
    /// failure. Returns whether remote state was applied.
    pub fn load(&mut self) -> bool {
        match self.gateway.fetch(&self.user_id) {
            Ok(Some(doc)) => {
                self.engine = ChallengeEngine::from_document(doc);
                self.last_sync_at = Some(Utc::now());
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load challenge state; starting from defaults");
                false
            }
        }
    }

    /// Push the pending save if its quiet period has elapsed. Returns
    /// whether a save was sent (successfully or not).
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.queue.take_due(now) {
            Some(doc) => {
                self.push(doc);
                true
            }
            None => false,
        }
    }

    /// Push the pending save immediately, ignoring the quiet period. Used
    /// at session end; delivery is still best-effort.
    pub fn flush(&mut self) -> bool {
        match self.queue.take_pending() {
            Some(doc) => {
                self.push(doc);
                true
            }
            None => false,
        }
    }

    /// Push the current state unconditionally, discarding any pending
    /// save. Returns whether the remote accepted it.
    pub fn save_now(&mut self) -> bool {
        self.queue.take_pending();
        let doc = self.engine.document(&self.user_id);
        self.push(doc)
    }

    // ── Commands (delegating to the engine, scheduling a save) ───────

    pub fn perform_action(&mut self, category: ActionCategory) -> Event {
        let event = self.engine.perform_action(category);
        self.mark_dirty();
        event
    }

    pub fn perform_linkedin_post(&mut self, category: PostCategory) -> Option<Event> {
        let event = self.engine.perform_linkedin_post(category)?;
        self.mark_dirty();
        Some(event)
    }

    pub fn skip_linkedin_post(&mut self, category: PostCategory) -> Option<Event> {
        let event = self.engine.skip_linkedin_post(category)?;
        self.mark_dirty();
        Some(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn mark_dirty(&mut self) {
        self.queue
            .schedule(self.engine.document(&self.user_id), Utc::now());
    }

    fn push(&mut self, doc: crate::sync::types::StateDocument) -> bool {
        match self.gateway.upsert(&self.user_id, &doc) {
            Ok(()) => {
                self.last_sync_at = Some(Utc::now());
                true
            }
            Err(e) => {
                // No retry: the snapshot is dropped, the next change
                // schedules a fresh one.
                tracing::warn!(error = %e, "failed to save challenge state; save skipped");
                false
            }
        }
    }
}
