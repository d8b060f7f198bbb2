//! Login command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;

use vetclinic_core::models::Usuario;
use vetclinic_core::{ResourceClient, ResourceId};
use vetclinic_http::HttpClient;

use crate::cli::GlobalArgs;
use crate::output;
use crate::session::{StoredSession, storage};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Id of the clinic user to act as
    #[arg(long)]
    pub user_id: String,

    /// Username; looked up from the API when omitted
    #[arg(long, requires = "role")]
    pub username: Option<String>,

    /// Role; looked up from the API when omitted
    #[arg(long, requires = "username")]
    pub role: Option<String>,

    /// Bearer token to send with every request
    #[arg(long, env = "VETCLINIC_TOKEN")]
    pub token: Option<String>,
}

pub async fn run(global: &GlobalArgs, args: LoginArgs) -> Result<()> {
    let config = global.client_config(None, args.token.clone())?;
    let api_url = config.base.to_string();

    let (username, role) = match (args.username, args.role) {
        (Some(username), Some(role)) => (username, role),
        _ => {
            eprintln!("{}", "Looking up user...".dimmed());
            let http = HttpClient::new(config).context("Failed to create HTTP client")?;
            let id = ResourceId::new(&args.user_id).context("Invalid user id")?;
            let usuario = http
                .resource::<Usuario>()
                .get(&id)
                .await
                .context("Failed to look up user")?;
            (usuario.nombre_usuario, usuario.rol_usuario)
        }
    };

    let session = StoredSession {
        user_id: args.user_id,
        username,
        role,
        api_url,
        token: args.token,
        logged_in_at: Utc::now(),
    };
    storage::save_session(&session).context("Failed to save session")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &session.username);
    output::field("Role", &session.role);
    output::field("API", &session.api_url);

    Ok(())
}
