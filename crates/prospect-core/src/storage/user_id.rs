// Local user identity for remote persistence.
// Format: "user_<uuid>"

use std::fs;
use std::io::Write;
use std::path::Path;

use uuid::Uuid;

use crate::error::IdentityError;

const USER_ID_FILE: &str = "user_id.txt";
const USER_ID_PREFIX: &str = "user_";

/// Get or create the user id at the specified path.
/// Creates a new user id file if it doesn't exist.
///
/// # Arguments
/// * `path` - Directory path where user_id.txt is stored
///
/// # Returns
/// User id string in format "user_<uuid>"
pub fn get_or_create_user_id_at(path: &Path) -> Result<String, IdentityError> {
    let user_id_path = path.join(USER_ID_FILE);

    if user_id_path.exists() {
        let content = fs::read_to_string(&user_id_path)?;
        let user_id = content.trim().to_string();

        if user_id.starts_with(USER_ID_PREFIX) {
            return Ok(user_id);
        } else {
            return Err(IdentityError::InvalidFormat(user_id));
        }
    }

    let user_id = format!("{}{}", USER_ID_PREFIX, Uuid::new_v4());

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let mut file = fs::File::create(&user_id_path)?;
    writeln!(file, "{}", user_id)?;

    Ok(user_id)
}

/// Get or create the user id in the default data directory.
pub fn get_or_create_user_id() -> Result<String, IdentityError> {
    let dir = super::data_dir()?;
    get_or_create_user_id_at(&dir)
}
