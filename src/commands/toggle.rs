use super::{find_todo, open_store};
use crate::{
    libs::{messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// ID of the todo to toggle
    id: u32,
}

pub async fn cmd(toggle_args: ToggleArgs) -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };
    let Some(todo) = find_todo(&store, toggle_args.id) else {
        return Ok(());
    };

    if !store.toggle_todo(&todo).await {
        match todo.completed {
            true => msg_success!(Message::TodoReopened(todo.title)),
            false => msg_success!(Message::TodoCompleted(todo.title)),
        }
    }
    View::render(&store.snapshot());

    Ok(())
}

pub async fn cmd_all() -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };

    if !store.snapshot().todos.is_empty() {
        store.toggle_all().await;

        let state = store.snapshot();
        if state.error.is_none() {
            match state.all_completed() {
                true => msg_success!(Message::AllCompleted),
                false => msg_success!(Message::AllReopened),
            }
        }
    }
    View::render(&store.snapshot());

    Ok(())
}
