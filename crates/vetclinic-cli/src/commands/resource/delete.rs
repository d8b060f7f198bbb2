//! Delete command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use vetclinic_core::traits::AlwaysConfirm;
use vetclinic_core::Confirm;

use super::get::fetch;
use super::screen_with;
use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;
use crate::output;
use crate::prompt::{StdinConfirm, TerminalNotifier};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: String,

    /// Do not ask for confirmation
    #[arg(long)]
    pub force: bool,
}

pub async fn run<R: Columns>(global: &GlobalArgs, session: &Session, args: DeleteArgs) -> Result<()> {
    let record = fetch::<R>(global, session, &args.id).await?;

    let confirm: &dyn Confirm = if args.force { &AlwaysConfirm } else { &StdinConfirm };

    let notifier = Arc::new(TerminalNotifier::default());
    let mut screen = screen_with::<R>(global, session, notifier.clone());
    let deleted = screen
        .delete(&record, confirm)
        .await
        .with_context(|| format!("Failed to delete {} '{}'", R::PATH, args.id))?;

    if !deleted {
        if let Some(reason) = notifier.take_error() {
            bail!("{} '{}' was not deleted: {}", R::PATH, args.id, reason);
        }
        output::info("Nothing deleted.");
    }
    Ok(())
}
