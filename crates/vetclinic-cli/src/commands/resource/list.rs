//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;

use vetclinic_core::FilterSet;

use super::{parse_assignment, print_records, screen};
use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Only records where field=value (repeatable)
    #[arg(long = "filter", value_parser = parse_assignment)]
    pub filters: Vec<(String, String)>,

    /// Show only the record with this id
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run<R: Columns>(global: &GlobalArgs, session: &Session, args: ListArgs) -> Result<()> {
    let filters: FilterSet = args.filters.into_iter().collect();

    let mut screen = screen::<R>(global, session)
        .with_filters(filters)
        .with_page(args.page);

    match args.id.as_deref() {
        Some(id) => screen.search_by_id(id).await,
        None => screen.mount().await,
    }
    .with_context(|| format!("Failed to list {}", R::PATH))?;

    print_records(global, screen.records())?;

    if !global.json && args.id.is_none() {
        let p = screen.pagination();
        let estimated = if p.estimated { " (estimated)" } else { "" };
        output::info(&format!("Page {} of {}{}", p.current_page, p.total_pages, estimated));
    }
    Ok(())
}
