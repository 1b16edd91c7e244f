use clap::Subcommand;
use serde_json::json;

use crate::common::SessionHandle;

#[derive(Subcommand)]
pub enum SyncAction {
    /// Push the current state to the remote store immediately
    Now,
    /// Print sync status as JSON
    Status,
}

pub fn run(action: SyncAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SyncAction::Now => {
            let mut handle = SessionHandle::open()?;
            let saved = handle.session.save_now();
            let status = handle.session.status();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "saved": saved,
                    "status": status,
                }))?
            );
        }
        SyncAction::Status => {
            let handle = SessionHandle::open()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&handle.session.status())?
            );
        }
    }
    Ok(())
}
