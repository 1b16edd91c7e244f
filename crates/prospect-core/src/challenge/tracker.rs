//! Per-category action counters and weekly targets.
//!
//! Six outreach categories are tracked. Each has a fixed weekly target used
//! for progress display and a fixed point value awarded per action. Counts
//! have no upper bound; the target is never enforced as a cap.

use serde::{Deserialize, Serialize};

/// The tracked outreach categories. Wire names are camelCase to match the
/// stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionCategory {
    Calls,
    NetworkingMeetings,
    Recommendations,
    PersonalizedEmails,
    Comments,
    Messages,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 6] = [
        ActionCategory::Calls,
        ActionCategory::NetworkingMeetings,
        ActionCategory::Recommendations,
        ActionCategory::PersonalizedEmails,
        ActionCategory::Comments,
        ActionCategory::Messages,
    ];

    /// Points awarded per logged action.
    pub fn point_value(&self) -> u64 {
        match self {
            ActionCategory::Calls => 50,
            ActionCategory::NetworkingMeetings => 200,
            ActionCategory::Recommendations => 150,
            ActionCategory::PersonalizedEmails => 75,
            ActionCategory::Comments => 30,
            ActionCategory::Messages => 50,
        }
    }

    /// Weekly target used for progress display only.
    pub fn weekly_target(&self) -> u64 {
        match self {
            ActionCategory::Calls => 30,
            ActionCategory::NetworkingMeetings => 2,
            ActionCategory::Recommendations => 5,
            ActionCategory::PersonalizedEmails => 5,
            ActionCategory::Comments => 5,
            ActionCategory::Messages => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Calls => "calls",
            ActionCategory::NetworkingMeetings => "networkingMeetings",
            ActionCategory::Recommendations => "recommendations",
            ActionCategory::PersonalizedEmails => "personalizedEmails",
            ActionCategory::Comments => "comments",
            ActionCategory::Messages => "messages",
        }
    }
}

impl std::str::FromStr for ActionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calls" => Ok(ActionCategory::Calls),
            "networkingMeetings" | "networking-meetings" | "meetings" => {
                Ok(ActionCategory::NetworkingMeetings)
            }
            "recommendations" => Ok(ActionCategory::Recommendations),
            "personalizedEmails" | "personalized-emails" | "emails" => {
                Ok(ActionCategory::PersonalizedEmails)
            }
            "comments" => Ok(ActionCategory::Comments),
            "messages" => Ok(ActionCategory::Messages),
            other => Err(format!("unknown action category: {other}")),
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of one category: actions logged so far and the weekly target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionProgress {
    pub count: u64,
    pub weekly_target: u64,
}

impl ActionProgress {
    fn fresh(category: ActionCategory) -> Self {
        Self {
            count: 0,
            weekly_target: category.weekly_target(),
        }
    }

    /// 0.0 .. 100.0, capped at 100 even when the count exceeds the target.
    pub fn percent(&self) -> f64 {
        if self.weekly_target == 0 {
            return 0.0;
        }
        (self.count as f64 / self.weekly_target as f64 * 100.0).min(100.0)
    }
}

/// Counters for all six categories.
///
/// Serializes field-per-category so the JSON matches the stored document
/// (`{"calls":{"count":..,"weeklyTarget":..},...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionTracker {
    pub calls: ActionProgress,
    pub networking_meetings: ActionProgress,
    pub recommendations: ActionProgress,
    pub personalized_emails: ActionProgress,
    pub comments: ActionProgress,
    pub messages: ActionProgress,
}

impl Default for ActionTracker {
    fn default() -> Self {
        Self {
            calls: ActionProgress::fresh(ActionCategory::Calls),
            networking_meetings: ActionProgress::fresh(ActionCategory::NetworkingMeetings),
            recommendations: ActionProgress::fresh(ActionCategory::Recommendations),
            personalized_emails: ActionProgress::fresh(ActionCategory::PersonalizedEmails),
            comments: ActionProgress::fresh(ActionCategory::Comments),
            messages: ActionProgress::fresh(ActionCategory::Messages),
        }
    }
}

impl ActionTracker {
    pub fn progress(&self, category: ActionCategory) -> &ActionProgress {
        match category {
            ActionCategory::Calls => &self.calls,
            ActionCategory::NetworkingMeetings => &self.networking_meetings,
            ActionCategory::Recommendations => &self.recommendations,
            ActionCategory::PersonalizedEmails => &self.personalized_emails,
            ActionCategory::Comments => &self.comments,
            ActionCategory::Messages => &self.messages,
        }
    }

    fn progress_mut(&mut self, category: ActionCategory) -> &mut ActionProgress {
        match category {
            ActionCategory::Calls => &mut self.calls,
            ActionCategory::NetworkingMeetings => &mut self.networking_meetings,
            ActionCategory::Recommendations => &mut self.recommendations,
            ActionCategory::PersonalizedEmails => &mut self.personalized_emails,
            ActionCategory::Comments => &mut self.comments,
            ActionCategory::Messages => &mut self.messages,
        }
    }

    /// Increment the category's counter by one, returning the new count.
    pub fn increment(&mut self, category: ActionCategory) -> u64 {
        let entry = self.progress_mut(category);
        entry.count += 1;
        entry.count
    }

    /// Progress toward the weekly target, in [0, 100].
    pub fn progress_percent(&self, category: ActionCategory) -> f64 {
        self.progress(category).percent()
    }
}
