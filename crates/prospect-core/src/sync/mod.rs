mod gateway;
mod session;
mod types;
mod write_behind;

pub use gateway::{HttpStateGateway, StateGateway};
pub use session::ChallengeSession;
pub use types::{ActionsDocument, StateDocument, SyncError, SyncStatus};
pub use write_behind::WriteBehind;
