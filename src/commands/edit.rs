use super::{find_todo, open_store};
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the todo to edit
    id: u32,
    /// New title; leave it out to delete the todo
    title: Vec<String>,
}

pub async fn cmd(edit_args: EditArgs) -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };
    let Some(todo) = find_todo(&store, edit_args.id) else {
        return Ok(());
    };

    let title = edit_args.title.join(" ");
    let title = title.trim();

    if title == todo.title {
        msg_info!(Message::TodoUnchanged);
    } else if !store.rename_todo(&todo, title).await {
        match title.is_empty() {
            true => msg_success!(Message::TodoDeleted(todo.id)),
            false => msg_success!(Message::TodoUpdated(title.to_string())),
        }
    }
    View::render(&store.snapshot());

    Ok(())
}
