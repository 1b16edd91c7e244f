mod engine;
mod rotation;
mod tracker;

pub use engine::{CategoryProgress, ChallengeEngine, ChallengeState};
pub use rotation::{PostCategory, PostEntry, PostRotation};
pub use tracker::{ActionCategory, ActionProgress, ActionTracker};
