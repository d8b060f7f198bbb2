//! The verbs every entity shares.

mod create;
mod delete;
mod get;
mod list;
mod related;
mod update;

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Subcommand};

use vetclinic_core::nav::Route;
use vetclinic_http::HttpResource;
use vetclinic_screen::ListScreen;

use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;
use crate::output;
use crate::prompt::TerminalNotifier;

#[derive(Args, Debug)]
pub struct ResourceCommand {
    #[command(subcommand)]
    pub command: ResourceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ResourceSubcommand {
    /// List one page of records
    List(list::ListArgs),

    /// Show one record
    Get(get::GetArgs),

    /// Create a record from field=value pairs
    Create(create::CreateArgs),

    /// Change some fields of a record
    Update(update::UpdateArgs),

    /// Delete a record after confirmation
    Delete(delete::DeleteArgs),

    /// Records pointing at another record, e.g. appointments of an animal
    Related(related::RelatedArgs),
}

pub async fn handle<R: Columns>(global: &GlobalArgs, cmd: ResourceCommand) -> Result<()> {
    let session = Session::enter(global, Route::for_resource::<R>())?;

    match cmd.command {
        ResourceSubcommand::List(args) => list::run::<R>(global, &session, args).await,
        ResourceSubcommand::Get(args) => get::run::<R>(global, &session, args).await,
        ResourceSubcommand::Create(args) => create::run::<R>(global, &session, args).await,
        ResourceSubcommand::Update(args) => update::run::<R>(global, &session, args).await,
        ResourceSubcommand::Delete(args) => delete::run::<R>(global, &session, args).await,
        ResourceSubcommand::Related(args) => related::run::<R>(global, &session, args).await,
    }
}

type Screen<R> = ListScreen<R, HttpResource<R>>;

/// A list screen for `R` acting as the signed-in user.
fn screen<R: Columns>(global: &GlobalArgs, session: &Session) -> Screen<R> {
    screen_with(global, session, Arc::new(TerminalNotifier::default()))
}

/// Like [`screen`], reporting through a notifier the caller keeps.
fn screen_with<R: Columns>(
    global: &GlobalArgs,
    session: &Session,
    notifier: Arc<TerminalNotifier>,
) -> Screen<R> {
    ListScreen::new(
        session.http.resource::<R>(),
        notifier,
        session.screen_config(global),
    )
}

/// Parse `field=value`.
pub(crate) fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{s}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((field.to_string(), value.to_string()))
}

fn print_records<R: Columns>(global: &GlobalArgs, records: &[R]) -> Result<()> {
    if global.json {
        return output::json_pretty(records);
    }
    if records.is_empty() {
        output::info("No records found.");
        return Ok(());
    }
    let rows: Vec<_> = records.iter().map(Columns::row).collect();
    output::table(R::HEADERS, &rows);
    Ok(())
}

fn print_record<R: Columns>(global: &GlobalArgs, record: &R) -> Result<()> {
    if global.json {
        return output::json_pretty(record);
    }
    for (header, value) in R::HEADERS.iter().zip(record.row()) {
        output::field(header, &value);
    }
    Ok(())
}
