//! Store state snapshot and its pure transition function.
//!
//! [`TodoState`] is everything the presentation layer renders: the
//! authoritative task collection, the active filter, the placeholder of an
//! in-flight creation, the ids with in-flight bulk operations and the current
//! error. It never changes in place from the outside; [`TodoState::reduce`]
//! consumes a snapshot and an [`Action`] and returns the next snapshot.
//!
//! ## Ordering
//!
//! Asynchronous settlements may arrive in any order and after the collection
//! has changed underneath them. Every collection mutation is therefore keyed
//! by task id (retain, replace-by-id), never by position, so a late
//! settlement applies to whatever the collection holds at that moment.
//!
//! ## Error expiry
//!
//! Raising or dismissing an error bumps `error_generation`. An auto-clear
//! timer carries the generation it was armed for and only clears the error if
//! nothing newer has been raised since.

use super::error::ErrorType;
use super::todo::{Todo, TodoFilter, TodoQueries};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Loaded(Vec<Todo>),
    FilterChanged(TodoFilter),
    CreateStarted(Todo),
    Created(Todo),
    CreateSettled,
    Deleted(u32),
    Updated(Todo),
    PendingMarked(Vec<u32>),
    PendingCleared,
    CompletionApplied { ids: Vec<u32>, completed: bool },
    ErrorRaised(ErrorType),
    ErrorDismissed,
    ErrorExpired(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub filter: TodoFilter,
    pub pending_create: Option<Todo>,
    pub pending: BTreeSet<u32>,
    pub error: Option<ErrorType>,
    pub error_generation: u64,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Loaded(todos) => self.todos = todos,
            Action::FilterChanged(filter) => self.filter = filter,
            Action::CreateStarted(placeholder) => self.pending_create = Some(placeholder),
            Action::Created(todo) => self.todos.push(todo),
            Action::CreateSettled => self.pending_create = None,
            Action::Deleted(id) => self.todos.retain(|todo| todo.id != id),
            Action::Updated(updated) => {
                for todo in self.todos.iter_mut().filter(|todo| todo.id == updated.id) {
                    *todo = updated.clone();
                }
            }
            Action::PendingMarked(ids) => self.pending = ids.into_iter().collect(),
            Action::PendingCleared => self.pending.clear(),
            Action::CompletionApplied { ids, completed } => {
                for todo in self.todos.iter_mut().filter(|todo| ids.contains(&todo.id)) {
                    todo.completed = completed;
                }
            }
            Action::ErrorRaised(kind) => {
                self.error = Some(kind);
                self.error_generation += 1;
            }
            Action::ErrorDismissed => {
                self.error = None;
                self.error_generation += 1;
            }
            Action::ErrorExpired(generation) => {
                if generation == self.error_generation {
                    self.error = None;
                }
            }
        }
        self
    }

    /// Tasks selected by the active filter.
    pub fn visible(&self) -> Vec<Todo> {
        self.todos.filter_by(self.filter)
    }

    pub fn items_left(&self) -> usize {
        self.todos.items_left()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.has_completed()
    }

    pub fn all_completed(&self) -> bool {
        self.todos.all_completed()
    }

    /// Whether the row for `id` should be shown as busy.
    pub fn is_pending(&self, id: u32) -> bool {
        self.pending.contains(&id)
    }

    pub fn is_creating(&self) -> bool {
        self.pending_create.is_some()
    }
}
