//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one match, so wording stays consistent
//! between the one-shot commands and the interactive session.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoAdded(title) => format!("Added '{}'", title),
            Message::TodoUpdated(title) => format!("Renamed to '{}'", title),
            Message::TodoDeleted(id) => format!("Todo #{} deleted", id),
            Message::TodoCompleted(title) => format!("Completed '{}'", title),
            Message::TodoReopened(title) => format!("Reopened '{}'", title),
            Message::TodoNotFound(id) => format!("Todo with ID {} not found.", id),
            Message::TodoUnchanged => "No changes detected.".to_string(),
            Message::TodosHeader(filter) => format!("todos ({})", filter),
            Message::NoTodos => "Nothing to do yet. Add one with 'todos add <title>'".to_string(),
            Message::NoVisibleTodos(filter) => format!("No {} todos.", filter.to_string().to_lowercase()),
            Message::CompletedCleared(count) => format!("Cleared {} completed todo(s).", count),
            Message::NothingToClear => "There are no completed todos to clear.".to_string(),
            Message::AllCompleted => "All todos marked as completed.".to_string(),
            Message::AllReopened => "All todos marked as active.".to_string(),
            Message::ItemsLeft(count) => match count {
                1 => "1 item left".to_string(),
                _ => format!("{} items left", count),
            },
            Message::SavingPlaceholder => "saving...".to_string(),

            // === ERROR BANNER ===
            Message::ErrorBanner(kind) => kind.to_string(),
            Message::ErrorBannerHint => "(choose 'Dismiss error' to hide)".to_string(),

            // === USER MESSAGES ===
            Message::UserNotConfigured => "No user is configured, so there are no todos to show.".to_string(),
            Message::UserNotConfiguredHint => "Run 'todos init' or set TODOS_USER_ID to your user id.".to_string(),
            Message::InvalidUserId(value) => format!("'{}' is not a valid user id.", value),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigPath(path) => format!("Using configuration file {}", path),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleApi => "Todos API settings".to_string(),
            Message::ConfigModuleUser => "User settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the todos API URL".to_string(),
            Message::PromptUserId => "Enter your user id".to_string(),
            Message::PromptAction => "What would you like to do?".to_string(),
            Message::PromptNewTitle => "What needs to be done?".to_string(),
            Message::PromptSelectTodo => "Select a todo".to_string(),
            Message::PromptEditTitle => "Title (leave empty to delete)".to_string(),
            Message::PromptFilter => "Show".to_string(),

            // === INTERACTIVE MENU ===
            Message::MenuAdd => "Add todo".to_string(),
            Message::MenuToggle => "Toggle todo".to_string(),
            Message::MenuEdit => "Edit todo".to_string(),
            Message::MenuDelete => "Delete todo".to_string(),
            Message::MenuToggleAll => "Toggle all".to_string(),
            Message::MenuClearCompleted => "Clear completed".to_string(),
            Message::MenuFilter => "Change filter".to_string(),
            Message::MenuDismissError => "Dismiss error".to_string(),
            Message::MenuRefresh => "Refresh".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::Goodbye => "Bye!".to_string(),
        };
        write!(f, "{}", text)
    }
}
