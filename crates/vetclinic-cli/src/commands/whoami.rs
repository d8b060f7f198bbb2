//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(global: &GlobalArgs, _args: WhoamiArgs) -> Result<()> {
    let session = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'vetclinic login' first.")?;

    if global.json {
        return output::json_pretty(&serde_json::json!({
            "user_id": session.user_id,
            "username": session.username,
            "role": session.role,
            "api_url": session.api_url,
            "logged_in_at": session.logged_in_at,
        }));
    }

    output::field("User ID", &session.user_id);
    output::field("User", &session.username);
    output::field("Role", &session.role);
    output::field("API", &session.api_url);
    output::field("Since", &session.logged_in_at.to_rfc3339());

    Ok(())
}
