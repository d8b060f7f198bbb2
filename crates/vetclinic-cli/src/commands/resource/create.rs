//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::{parse_assignment, print_record, screen};
use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Field value as field=value (repeatable)
    #[arg(long = "set", value_parser = parse_assignment, required = true)]
    pub values: Vec<(String, String)>,
}

pub async fn run<R: Columns>(global: &GlobalArgs, session: &Session, args: CreateArgs) -> Result<()> {
    let mut screen = screen::<R>(global, session);
    screen.open_create();

    let form = screen.form_mut().context("Create form did not open")?;
    for (field, value) in args.values {
        form.set(&field, value)?;
    }

    let created = screen
        .save()
        .await
        .with_context(|| format!("Failed to create {}", R::PATH))?;

    print_record(global, &created)
}
