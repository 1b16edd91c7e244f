mod config;
mod user_id;

pub use config::Config;
pub use user_id::{get_or_create_user_id, get_or_create_user_id_at};

use std::io;
use std::path::PathBuf;

/// Returns `~/.config/prospect-challenge[-dev]/` based on PROSPECT_ENV.
///
/// Set PROSPECT_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PROSPECT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("prospect-challenge-dev")
    } else {
        base_dir.join("prospect-challenge")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
