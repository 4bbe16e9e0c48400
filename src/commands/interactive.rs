//! Interactive session over a loaded list.
//!
//! Each round renders the list, then asks for an action. The store stays
//! alive between rounds, so an error banner clears itself while the prompt
//! is waiting and the next render no longer shows it.

use super::open_store;
use crate::{
    api::TodosClient,
    libs::{
        messages::Message,
        store::TodoStore,
        todo::{Todo, TodoFilter},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuItem {
    Add,
    Toggle,
    Edit,
    Delete,
    ToggleAll,
    ClearCompleted,
    Filter,
    DismissError,
    Refresh,
    Quit,
}

impl MenuItem {
    fn label(self) -> Message {
        match self {
            MenuItem::Add => Message::MenuAdd,
            MenuItem::Toggle => Message::MenuToggle,
            MenuItem::Edit => Message::MenuEdit,
            MenuItem::Delete => Message::MenuDelete,
            MenuItem::ToggleAll => Message::MenuToggleAll,
            MenuItem::ClearCompleted => Message::MenuClearCompleted,
            MenuItem::Filter => Message::MenuFilter,
            MenuItem::DismissError => Message::MenuDismissError,
            MenuItem::Refresh => Message::MenuRefresh,
            MenuItem::Quit => Message::MenuQuit,
        }
    }
}

/// Items offered for the current state; row actions need at least one task.
fn menu(store: &TodoStore<TodosClient>) -> Vec<MenuItem> {
    let state = store.snapshot();
    let mut items = vec![MenuItem::Add];

    if !state.todos.is_empty() {
        items.extend([MenuItem::Toggle, MenuItem::Edit, MenuItem::Delete, MenuItem::ToggleAll]);
    }
    if state.has_completed() {
        items.push(MenuItem::ClearCompleted);
    }
    items.push(MenuItem::Filter);
    if state.error.is_some() {
        items.push(MenuItem::DismissError);
    }
    items.extend([MenuItem::Refresh, MenuItem::Quit]);
    items
}

pub async fn cmd() -> Result<()> {
    let Some(store) = open_store().await? else {
        return Ok(());
    };

    loop {
        let state = store.snapshot();
        View::render(&state);
        if state.error.is_some() {
            msg_print!(Message::ErrorBannerHint);
        }

        let items = menu(&store);
        let labels: Vec<String> = items.iter().map(|item| item.label().to_string()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match items[selection] {
            MenuItem::Add => {
                let title: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptNewTitle.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                if let Some(todo) = store.add_todo(&title).await {
                    msg_success!(Message::TodoAdded(todo.title));
                }
            }
            MenuItem::Toggle => {
                if let Some(todo) = select_todo(&store)? {
                    store.toggle_todo(&todo).await;
                }
            }
            MenuItem::Edit => {
                if let Some(todo) = select_todo(&store)? {
                    let title: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptEditTitle.to_string())
                        .with_initial_text(todo.title.clone())
                        .allow_empty(true)
                        .interact_text()?;
                    if title.trim() == todo.title {
                        msg_info!(Message::TodoUnchanged);
                    } else {
                        store.rename_todo(&todo, &title).await;
                    }
                }
            }
            MenuItem::Delete => {
                if let Some(todo) = select_todo(&store)? {
                    store.delete_todo(todo.id).await;
                }
            }
            MenuItem::ToggleAll => store.toggle_all().await,
            MenuItem::ClearCompleted => store.clear_completed().await,
            MenuItem::Filter => {
                let labels: Vec<String> = TodoFilter::VALUES.iter().map(ToString::to_string).collect();
                let current = store.snapshot().filter;
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptFilter.to_string())
                    .items(&labels)
                    .default(TodoFilter::VALUES.iter().position(|filter| *filter == current).unwrap_or(0))
                    .interact()?;
                store.set_filter(TodoFilter::VALUES[selection]);
            }
            MenuItem::DismissError => store.dismiss_error(),
            MenuItem::Refresh => store.load().await,
            MenuItem::Quit => break,
        }
    }

    msg_print!(Message::Goodbye);
    Ok(())
}

/// Picks one of the visible tasks, or returns `None` when the filter hides all.
fn select_todo(store: &TodoStore<TodosClient>) -> Result<Option<Todo>> {
    let state = store.snapshot();
    let visible = state.visible();
    if visible.is_empty() {
        msg_info!(Message::NoVisibleTodos(state.filter));
        return Ok(None);
    }

    let labels: Vec<String> = visible
        .iter()
        .map(|todo| format!("{} {} {}", todo.id, if todo.completed { "[x]" } else { "[ ]" }, todo.title))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTodo.to_string())
        .items(&labels)
        .interact()?;

    Ok(visible.into_iter().nth(selection))
}
