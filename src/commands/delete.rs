use super::{find_todo, open_store};
use crate::{
    libs::{messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the todo to delete
    id: u32,
}

pub async fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };
    let Some(todo) = find_todo(&store, delete_args.id) else {
        return Ok(());
    };

    store.delete_todo(todo.id).await;
    if store.error().is_none() {
        msg_success!(Message::TodoDeleted(todo.id));
    }
    View::render(&store.snapshot());

    Ok(())
}
