//! Challenge state engine.
//!
//! The engine is a plain in-memory state model. It has no internal threads
//! and no ambient state -- one instance owns one session's challenge data
//! and every mutation goes through the command methods below, each of which
//! returns the [`Event`] it produced.
//!
//! ## State
//!
//! ```text
//! ChallengeState (points, level, last action time, week label)
//!   + ActionTracker (six counters with weekly targets)
//!   + PostRotation  (four-slot LinkedIn cycle)
//! ```
//!
//! Points only ever increase. `level` and `week_start_date` are carried and
//! persisted but never recomputed here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rotation::{PostCategory, PostRotation};
use super::tracker::{ActionCategory, ActionTracker};
use crate::events::Event;
use crate::sync::{ActionsDocument, StateDocument};

/// Points awarded for a published LinkedIn post, regardless of category.
const LINKEDIN_POST_POINTS: u64 = 100;

/// Header state of the challenge: the part that is not a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeState {
    pub points: u64,
    pub level: u32,
    #[serde(default)]
    pub last_action_time: Option<DateTime<Utc>>,
    pub week_start_date: String,
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self {
            points: 0,
            level: 1,
            last_action_time: None,
            week_start_date: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Per-category progress line for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category: ActionCategory,
    pub count: u64,
    pub weekly_target: u64,
    pub percent: f64,
}

/// Core challenge engine.
///
/// Composes the header state, the action tracker and the post rotation into
/// the one aggregate that is rendered and persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChallengeEngine {
    state: ChallengeState,
    tracker: ActionTracker,
    rotation: PostRotation,
}

impl ChallengeEngine {
    /// Fresh engine: zero points, level 1, empty counters, full rotation,
    /// week label fixed to today.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an engine from a stored document, replacing all three parts.
    pub fn from_document(doc: StateDocument) -> Self {
        Self {
            state: doc.state,
            tracker: doc.actions.tracker,
            rotation: doc.actions.linkedin_posts,
        }
    }

    /// The full persisted shape of this engine for the given user.
    pub fn document(&self, user_id: &str) -> StateDocument {
        StateDocument {
            user_id: user_id.to_string(),
            state: self.state.clone(),
            actions: ActionsDocument {
                linkedin_posts: self.rotation.clone(),
                tracker: self.tracker.clone(),
            },
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &ChallengeState {
        &self.state
    }

    pub fn points(&self) -> u64 {
        self.state.points
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.tracker
    }

    pub fn rotation(&self) -> &PostRotation {
        &self.rotation
    }

    /// 0.0 .. 100.0 progress toward the category's weekly target.
    pub fn progress_percent(&self, category: ActionCategory) -> f64 {
        self.tracker.progress_percent(category)
    }

    /// Progress lines for all six categories, in declaration order.
    pub fn progress(&self) -> Vec<CategoryProgress> {
        ActionCategory::ALL
            .iter()
            .map(|&category| {
                let entry = self.tracker.progress(category);
                CategoryProgress {
                    category,
                    count: entry.count,
                    weekly_target: entry.weekly_target,
                    percent: entry.percent(),
                }
            })
            .collect()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            points: self.state.points,
            level: self.state.level,
            week_start_date: self.state.week_start_date.clone(),
            last_action_time: self.state.last_action_time,
            available_posts: self.rotation.available(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Log one outreach action: the counter goes up by one and the
    /// category's fixed point value is awarded.
    pub fn perform_action(&mut self, category: ActionCategory) -> Event {
        let count = self.tracker.increment(category);
        let points_awarded = category.point_value();
        self.award(points_awarded);
        Event::ActionLogged {
            category,
            count,
            points_awarded,
            total_points: self.state.points,
            at: Utc::now(),
        }
    }

    /// Publish a LinkedIn post of the given category. Awards the fixed post
    /// bonus. Returns `None` (no state change, no points) when the category
    /// was already acted on this cycle.
    pub fn perform_linkedin_post(&mut self, category: PostCategory) -> Option<Event> {
        let rotation_reset = self.rotation.publish(category)?;
        self.award(LINKEDIN_POST_POINTS);
        Some(Event::PostPublished {
            category,
            points_awarded: LINKEDIN_POST_POINTS,
            total_points: self.state.points,
            rotation_reset,
            at: Utc::now(),
        })
    }

    /// Skip a LinkedIn post category for this cycle. No points. Returns
    /// `None` when the category was already acted on.
    pub fn skip_linkedin_post(&mut self, category: PostCategory) -> Option<Event> {
        let rotation_reset = self.rotation.skip(category)?;
        Some(Event::PostSkipped {
            category,
            rotation_reset,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// The only place `points` and `last_action_time` change.
    fn award(&mut self, amount: u64) {
        self.state.points += amount;
        self.state.last_action_time = Some(Utc::now());
    }
}
