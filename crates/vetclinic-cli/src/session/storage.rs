//! Session storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use super::StoredSession;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "vetclinic").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk, readable by the owner only.
pub fn save_session(session: &StoredSession) -> Result<()> {
    let path = session_path()?;
    let json = serde_json::to_string_pretty(session)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    debug!(path = %path.display(), "session saved");
    Ok(())
}

/// Load the stored session, if there is one.
pub fn load_session() -> Result<Option<StoredSession>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored = serde_json::from_str(&json).context("Invalid session file")?;
    Ok(Some(stored))
}

/// Remove the stored session. Returns false if there was none.
pub fn clear_session() -> Result<bool> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove session file")?;
    Ok(true)
}
