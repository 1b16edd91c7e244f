use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::{ActionCategory, PostCategory};

/// Every state change in the engine produces an Event.
/// The CLI prints them; the session layer schedules a save when one fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ActionLogged {
        category: ActionCategory,
        count: u64,
        points_awarded: u64,
        total_points: u64,
        at: DateTime<Utc>,
    },
    PostPublished {
        category: PostCategory,
        points_awarded: u64,
        total_points: u64,
        /// True when this post exhausted the rotation and all four
        /// categories became available again in the same step.
        rotation_reset: bool,
        at: DateTime<Utc>,
    },
    PostSkipped {
        category: PostCategory,
        rotation_reset: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        points: u64,
        level: u32,
        week_start_date: String,
        last_action_time: Option<DateTime<Utc>>,
        available_posts: Vec<PostCategory>,
        at: DateTime<Utc>,
    },
}
