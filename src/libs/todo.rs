//! Task model and the pure queries the views are derived from.
//!
//! A [`Todo`] mirrors the record served by the remote API. Everything else in
//! this module is a pure function of a task slice: filtering by
//! [`TodoFilter`], the "items left" counter and the completion indicators used
//! by the footer and the toggle-all control.
//!
//! ## Usage
//!
//! ```rust
//! use todos::libs::todo::{Todo, TodoFilter, TodoQueries};
//!
//! let todos = vec![Todo::new(1, 7, "Write docs", false), Todo::new(2, 7, "Ship", true)];
//! assert_eq!(todos.items_left(), 1);
//! assert_eq!(todos.filter_by(TodoFilter::Completed).len(), 1);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of a task that has not been persisted yet.
pub const PLACEHOLDER_ID: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u32, user_id: u32, title: &str, completed: bool) -> Self {
        Todo {
            id,
            user_id,
            title: title.to_string(),
            completed,
        }
    }

    /// An optimistic, not yet persisted task shown while its creation is in flight.
    pub fn placeholder(user_id: u32, title: &str) -> Self {
        Self::new(PLACEHOLDER_ID, user_id, title, false)
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo<'a> {
    pub user_id: u32,
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> From<&'a Todo> for NewTodo<'a> {
    fn from(todo: &'a Todo) -> Self {
        NewTodo {
            user_id: todo.user_id,
            title: &todo.title,
            completed: todo.completed,
        }
    }
}

/// A single field changed by an update intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoField {
    Title(String),
    Completed(bool),
}

impl TodoField {
    /// Full record with only this field replaced.
    pub fn apply(&self, todo: &Todo) -> Todo {
        let mut updated = todo.clone();
        match self {
            TodoField::Title(title) => updated.title = title.clone(),
            TodoField::Completed(completed) => updated.completed = *completed,
        }
        updated
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const VALUES: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        };
        write!(f, "{}", name)
    }
}

/// Derived views over a task list.
pub trait TodoQueries {
    /// Tasks selected by `filter`, in collection order.
    fn filter_by(&self, filter: TodoFilter) -> Vec<Todo>;
    /// Number of tasks that are not completed.
    fn items_left(&self) -> usize;
    fn has_completed(&self) -> bool;
    /// True when every task is completed. Vacuously true for an empty list.
    fn all_completed(&self) -> bool;
    fn find_by_id(&self, id: u32) -> Option<&Todo>;
}

impl TodoQueries for [Todo] {
    fn filter_by(&self, filter: TodoFilter) -> Vec<Todo> {
        self.iter().filter(|todo| filter.matches(todo)).cloned().collect()
    }

    fn items_left(&self) -> usize {
        self.iter().filter(|todo| !todo.completed).count()
    }

    fn has_completed(&self) -> bool {
        self.iter().any(|todo| todo.completed)
    }

    fn all_completed(&self) -> bool {
        self.iter().all(|todo| todo.completed)
    }

    fn find_by_id(&self, id: u32) -> Option<&Todo> {
        self.iter().find(|todo| todo.id == id)
    }
}

impl TodoQueries for Vec<Todo> {
    fn filter_by(&self, filter: TodoFilter) -> Vec<Todo> {
        self.as_slice().filter_by(filter)
    }

    fn items_left(&self) -> usize {
        self.as_slice().items_left()
    }

    fn has_completed(&self) -> bool {
        self.as_slice().has_completed()
    }

    fn all_completed(&self) -> bool {
        self.as_slice().all_completed()
    }

    fn find_by_id(&self, id: u32) -> Option<&Todo> {
        self.as_slice().find_by_id(id)
    }
}
