use super::open_store;
use crate::libs::{todo::TodoFilter, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which todos to show
    #[arg(short, long, value_enum, default_value_t = TodoFilter::All)]
    filter: TodoFilter,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };

    store.set_filter(list_args.filter);
    View::render(&store.snapshot());

    Ok(())
}
