//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::{print_record, screen};
use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Record id
    pub id: String,
}

pub async fn run<R: Columns>(global: &GlobalArgs, session: &Session, args: GetArgs) -> Result<()> {
    let record = fetch::<R>(global, session, &args.id).await?;
    print_record(global, &record)
}

/// Look a record up through a list screen's id search.
pub(super) async fn fetch<R: Columns>(global: &GlobalArgs, session: &Session, id: &str) -> Result<R> {
    let mut screen = screen::<R>(global, session);
    screen
        .search_by_id(id)
        .await
        .with_context(|| format!("Failed to fetch {} '{}'", R::PATH, id))?;
    screen
        .records()
        .first()
        .cloned()
        .with_context(|| format!("{} '{}' not found", R::PATH, id))
}
