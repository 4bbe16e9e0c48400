use super::messages::Message;
use super::state::TodoState;
use super::todo::{Todo, TodoFilter};
use crate::{msg_error, msg_info, msg_print};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a full screen: header, list, footer and error banner.
    pub fn render(state: &TodoState) {
        if !state.todos.is_empty() {
            msg_print!(Self::header(state), true);
        }

        if state.todos.is_empty() && !state.is_creating() {
            msg_info!(Message::NoTodos);
        } else if state.visible().is_empty() && !state.is_creating() {
            msg_info!(Message::NoVisibleTodos(state.filter));
        } else {
            Self::todos(state).printstd();
        }

        if !state.todos.is_empty() {
            msg_print!(Self::footer(state));
        }

        if let Some(kind) = state.error {
            msg_error!(Message::ErrorBanner(kind), true);
        }
    }

    /// The toggle-all indicator followed by the list title.
    pub fn header(state: &TodoState) -> String {
        let indicator = if state.all_completed() { "[x]" } else { "[ ]" };
        format!("{} {}", indicator, Message::TodosHeader(state.filter))
    }

    /// Visible tasks, plus the placeholder row while a creation is in flight.
    pub fn todos(state: &TodoState) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", ""]);
        for todo in state.visible() {
            let marker = if state.is_pending(todo.id) { "..." } else { "" };
            table.add_row(row![todo.id, Self::checkbox(&todo), todo.title, marker]);
        }
        if let Some(placeholder) = &state.pending_create {
            table.add_row(row!["-", Self::checkbox(placeholder), placeholder.title, Message::SavingPlaceholder]);
        }

        table
    }

    /// Items-left counter, filter links and the clear-completed control.
    pub fn footer(state: &TodoState) -> String {
        let filters = TodoFilter::VALUES
            .iter()
            .map(|filter| match *filter == state.filter {
                true => format!("[{}]", filter),
                false => filter.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut footer = format!("{}   {}", Message::ItemsLeft(state.items_left()), filters);
        if state.has_completed() {
            footer.push_str(&format!("   {}", Message::MenuClearCompleted));
        }
        footer
    }

    fn checkbox(todo: &Todo) -> &'static str {
        match todo.completed {
            true => "[x]",
            false => "[ ]",
        }
    }
}
