use super::open_store;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_success,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };

    let before = store.snapshot().todos.len();
    if !store.snapshot().has_completed() {
        msg_info!(Message::NothingToClear);
        return Ok(());
    }

    store.clear_completed().await;

    let removed = before - store.snapshot().todos.len();
    if removed > 0 {
        msg_success!(Message::CompletedCleared(removed));
    }
    View::render(&store.snapshot());

    Ok(())
}
