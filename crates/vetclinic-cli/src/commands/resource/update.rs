//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::get::fetch;
use super::{parse_assignment, print_record, screen};
use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: String,

    /// New value as field=value (repeatable); an empty value clears the field
    #[arg(long = "set", value_parser = parse_assignment, required = true)]
    pub values: Vec<(String, String)>,
}

pub async fn run<R: Columns>(global: &GlobalArgs, session: &Session, args: UpdateArgs) -> Result<()> {
    let record = fetch::<R>(global, session, &args.id).await?;

    let mut screen = screen::<R>(global, session);
    screen.open_edit(record);

    let form = screen.form_mut().context("Edit form did not open")?;
    for (field, value) in args.values {
        form.set(&field, value)?;
    }

    let updated = screen
        .save()
        .await
        .with_context(|| format!("Failed to update {} '{}'", R::PATH, args.id))?;

    print_record(global, &updated)
}
