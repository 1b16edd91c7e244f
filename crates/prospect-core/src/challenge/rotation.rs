//! LinkedIn post rotation.
//!
//! Four post categories form one rotation cycle. Each category can be posted
//! or skipped exactly once per cycle; both consume its availability. When the
//! last available category is consumed, the whole set resets in the same
//! step, so a resting state with zero available categories is never
//! observable from outside.

use serde::{Deserialize, Serialize};

/// The four LinkedIn post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Info,
    Humor,
    Testimonial,
    News,
}

impl PostCategory {
    pub const ALL: [PostCategory; 4] = [
        PostCategory::Info,
        PostCategory::Humor,
        PostCategory::Testimonial,
        PostCategory::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Info => "info",
            PostCategory::Humor => "humor",
            PostCategory::Testimonial => "testimonial",
            PostCategory::News => "news",
        }
    }
}

impl std::str::FromStr for PostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(PostCategory::Info),
            "humor" => Ok(PostCategory::Humor),
            "testimonial" => Ok(PostCategory::Testimonial),
            "news" => Ok(PostCategory::News),
            other => Err(format!("unknown post category: {other}")),
        }
    }
}

impl std::fmt::Display for PostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rotation slot. `done` is true only for published (not skipped) posts
/// in the current cycle; `available` is false once the slot was acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub done: bool,
    pub available: bool,
}

impl Default for PostEntry {
    fn default() -> Self {
        Self {
            done: false,
            available: true,
        }
    }
}

/// Rotation state for all four categories.
///
/// Serializes field-per-category to match the stored document
/// (`{"info":{"done":..,"available":..},...}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostRotation {
    pub info: PostEntry,
    pub humor: PostEntry,
    pub testimonial: PostEntry,
    pub news: PostEntry,
}

impl PostRotation {
    pub fn entry(&self, category: PostCategory) -> &PostEntry {
        match category {
            PostCategory::Info => &self.info,
            PostCategory::Humor => &self.humor,
            PostCategory::Testimonial => &self.testimonial,
            PostCategory::News => &self.news,
        }
    }

    fn entry_mut(&mut self, category: PostCategory) -> &mut PostEntry {
        match category {
            PostCategory::Info => &mut self.info,
            PostCategory::Humor => &mut self.humor,
            PostCategory::Testimonial => &mut self.testimonial,
            PostCategory::News => &mut self.news,
        }
    }

    pub fn is_available(&self, category: PostCategory) -> bool {
        self.entry(category).available
    }

    pub fn available_count(&self) -> usize {
        PostCategory::ALL
            .iter()
            .filter(|c| self.is_available(**c))
            .count()
    }

    /// Categories still open in the current cycle.
    pub fn available(&self) -> Vec<PostCategory> {
        PostCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.is_available(*c))
            .collect()
    }

    /// Publish a post. Returns `None` (no state change) if the category was
    /// already acted on this cycle; otherwise `Some(reset)` where `reset`
    /// reports whether the transition exhausted the cycle.
    pub fn publish(&mut self, category: PostCategory) -> Option<bool> {
        let entry = self.entry_mut(category);
        if !entry.available {
            return None;
        }
        *entry = PostEntry {
            done: true,
            available: false,
        };
        Some(self.reset_if_exhausted())
    }

    /// Skip a post without publishing. Same availability rules as
    /// [`publish`](Self::publish), no points involved.
    pub fn skip(&mut self, category: PostCategory) -> Option<bool> {
        let entry = self.entry_mut(category);
        if !entry.available {
            return None;
        }
        *entry = PostEntry {
            done: false,
            available: false,
        };
        Some(self.reset_if_exhausted())
    }

    /// Cycle boundary: once no category is available, all four go back to
    /// fresh in the same logical step as the triggering transition.
    fn reset_if_exhausted(&mut self) -> bool {
        if self.available_count() > 0 {
            return false;
        }
        *self = PostRotation::default();
        true
    }
}
