//! Related command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use vetclinic_core::{ResourceClient, ResourceId};

use super::print_records;
use crate::cli::GlobalArgs;
use crate::columns::Columns;
use crate::commands::Session;

#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Foreign-key field, e.g. animal_id
    #[arg(long = "by")]
    pub foreign_key: String,

    /// Id the foreign key must equal
    pub id: String,
}

pub async fn run<R: Columns>(global: &GlobalArgs, session: &Session, args: RelatedArgs) -> Result<()> {
    if R::field(&args.foreign_key).is_none() {
        bail!("{} has no field '{}'", R::PATH, args.foreign_key);
    }
    let id = ResourceId::new(&args.id).context("Invalid id")?;

    let records = session
        .http
        .resource::<R>()
        .list_related(&args.foreign_key, &id)
        .await
        .with_context(|| format!("Failed to list {} by {}", R::PATH, args.foreign_key))?;

    print_records(global, &records)
}
