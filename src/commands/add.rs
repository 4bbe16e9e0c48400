use super::open_store;
use crate::{
    libs::{messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the new todo; multiple words are joined with spaces
    #[arg(required = true)]
    title: Vec<String>,
}

pub async fn cmd(add_args: AddArgs) -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };

    if let Some(todo) = store.add_todo(&add_args.title.join(" ")).await {
        msg_success!(Message::TodoAdded(todo.title));
    }
    View::render(&store.snapshot());

    Ok(())
}
