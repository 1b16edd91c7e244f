//! Session plumbing shared by the commands.

use prospect_core::storage::get_or_create_user_id;
use prospect_core::{ChallengeSession, Config, CoreError, HttpStateGateway};

/// One CLI invocation is one challenge session: load remote state (or fall
/// back to defaults), apply the command, flush the pending save on finish.
pub struct SessionHandle {
    pub session: ChallengeSession<HttpStateGateway>,
    sync_enabled: bool,
}

impl SessionHandle {
    pub fn open() -> Result<Self, CoreError> {
        let config = Config::load_or_default();
        let user_id = get_or_create_user_id()?;
        let gateway = HttpStateGateway::new(&config.server.base_url)?;
        let mut session = ChallengeSession::new(user_id, gateway, config.sync.debounce_ms);

        let sync_enabled = config.sync.enabled;
        if sync_enabled {
            session.load();
        }

        Ok(Self {
            session,
            sync_enabled,
        })
    }

    /// End the session, pushing whatever save is still pending.
    pub fn finish(mut self) {
        if self.sync_enabled {
            self.session.flush();
        }
    }
}
