//! Menu command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use vetclinic_core::nav::{AuthService, menu_for};

use crate::cli::GlobalArgs;
use crate::output;
use crate::session::{CliAuth, storage};

#[derive(Args, Debug)]
pub struct MenuArgs {}

pub fn run(global: &GlobalArgs, _args: MenuArgs) -> Result<()> {
    let auth = CliAuth::new(storage::load_session().context("Failed to load session")?);
    let items = menu_for(auth.user_role());

    if global.json {
        let items: Vec<_> = items
            .iter()
            .map(|i| serde_json::json!({"title": i.title, "path": i.route.path(), "icon": i.icon}))
            .collect();
        return output::json_pretty(&items);
    }

    if !auth.is_authenticated() {
        output::info("Not logged in; showing the public menu.");
    }
    for item in items {
        println!("{:<14} {}", item.title, item.route.path().dimmed());
    }
    Ok(())
}
