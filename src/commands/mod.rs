pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod init;
pub mod interactive;
pub mod list;
pub mod toggle;

use crate::{
    api::TodosClient,
    libs::{
        config::Config,
        messages::Message,
        store::TodoStore,
        todo::{Todo, TodoQueries},
        view::View,
    },
    msg_debug, msg_error, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show todos", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Add a todo", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Toggle completion of a todo", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Mark all todos completed, or all active if they already are")]
    ToggleAll,
    #[command(about = "Change the title of a todo (an empty title deletes it)", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a todo", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all completed todos")]
    ClearCompleted,
    #[command(about = "Manage todos interactively")]
    Interactive,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::ToggleAll => toggle::cmd_all().await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::ClearCompleted => clear::cmd().await,
            Commands::Interactive => interactive::cmd().await,
        }
    }
}

/// Builds the store for the configured user and loads the list.
///
/// Returns `None` after showing the "no user configured" screen, or after
/// rendering the load error when the initial fetch failed.
pub async fn open_store() -> Result<Option<TodoStore<TodosClient>>> {
    let path = Config::path()?;
    msg_debug!(Message::ConfigPath(path.display().to_string()));
    let config = Config::read_from(&path)?;
    let Some(user_id) = config.resolve_user_id()? else {
        msg_warning!(Message::UserNotConfigured, true);
        msg_print!(Message::UserNotConfiguredHint);
        return Ok(None);
    };

    let store = TodoStore::new(TodosClient::new(&config.api(), user_id)?, user_id);
    store.load().await;

    if store.error().is_some() {
        View::render(&store.snapshot());
        return Ok(None);
    }

    Ok(Some(store))
}

/// Looks up a loaded task, reporting unknown ids.
pub fn find_todo(store: &TodoStore<TodosClient>, id: u32) -> Option<Todo> {
    let todo = store.snapshot().todos.find_by_id(id).cloned();
    if todo.is_none() {
        msg_error!(Message::TodoNotFound(id));
    }
    todo
}
