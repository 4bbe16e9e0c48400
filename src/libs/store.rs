//! Task list store: async orchestration over the remote API.
//!
//! The store owns the current [`TodoState`] and turns user intents into API
//! calls. State changes happen only when a call settles, by dispatching an
//! [`Action`] through [`TodoState::reduce`]. The state lock is held for a
//! single transition and never across an `.await`, so intents issued while
//! others are still in flight (two deletes racing a bulk delete, say) each
//! land atomically on whatever the collection holds at settlement time.
//!
//! ## Errors
//!
//! Intents never return API errors. Failures are logged with their cause and
//! converted into an [`ErrorType`] shown in the error banner. The banner
//! clears itself [`ERROR_CLEAR_DELAY`] after being raised unless it is
//! dismissed, superseded, or was raised by a failed initial load.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos::api::{ApiConfig, TodosClient};
//! use todos::libs::store::TodoStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = TodoStore::new(TodosClient::new(&ApiConfig::default(), 42)?, 42);
//! store.load().await;
//! store.add_todo("Buy milk").await;
//! store.toggle_all().await;
//! println!("{} items left", store.snapshot().items_left());
//! # Ok(())
//! # }
//! ```

use super::error::ErrorType;
use super::state::{Action, TodoState};
use super::todo::{Todo, TodoField, TodoFilter, TodoQueries};
use crate::api::TodoApi;
use futures::future::join_all;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// How long an error stays in the banner before clearing itself.
pub const ERROR_CLEAR_DELAY: Duration = Duration::from_secs(3);

pub struct TodoStore<A> {
    api: A,
    user_id: u32,
    state: Arc<Mutex<TodoState>>,
    error_timer: Mutex<Option<JoinHandle<()>>>,
}

/// Applies one transition and returns the resulting error generation.
fn apply(state: &Mutex<TodoState>, action: Action) -> u64 {
    tracing::debug!(?action, "dispatch");
    let mut guard = state.lock();
    let current = std::mem::take(&mut *guard);
    *guard = current.reduce(action);
    guard.error_generation
}

impl<A: TodoApi> TodoStore<A> {
    pub fn new(api: A, user_id: u32) -> Self {
        Self {
            api,
            user_id,
            state: Arc::new(Mutex::new(TodoState::new())),
            error_timer: Mutex::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> TodoState {
        self.state.lock().clone()
    }

    pub fn error(&self) -> Option<ErrorType> {
        self.state.lock().error
    }

    /// Replaces the collection with the server's list.
    ///
    /// A failure leaves the collection empty and raises
    /// [`ErrorType::UnableToLoad`] without an auto-clear timer.
    pub async fn load(&self) {
        match self.api.list().await {
            Ok(todos) => {
                tracing::info!(count = todos.len(), user_id = self.user_id, "todos loaded");
                self.dispatch(Action::Loaded(todos));
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load todos");
                self.raise_sticky(ErrorType::UnableToLoad);
            }
        }
    }

    /// Creates a task titled `title` (trimmed).
    ///
    /// Returns the persisted task, or `None` when the title is blank, another
    /// creation is still in flight, or the API call failed.
    pub async fn add_todo(&self, title: &str) -> Option<Todo> {
        let title = title.trim();
        if title.is_empty() {
            self.raise(ErrorType::EmptyTitle);
            return None;
        }

        let placeholder = Todo::placeholder(self.user_id, title);
        {
            let mut guard = self.state.lock();
            if guard.is_creating() {
                tracing::debug!(title, "creation already in flight, ignoring");
                return None;
            }
            let current = std::mem::take(&mut *guard);
            *guard = current.reduce(Action::CreateStarted(placeholder.clone()));
        }

        let created = match self.api.create(&placeholder).await {
            Ok(todo) => {
                tracing::info!(id = todo.id, "todo created");
                self.dispatch(Action::Created(todo.clone()));
                Some(todo)
            }
            Err(e) => {
                tracing::warn!(error = %e, title, "failed to create todo");
                self.raise(ErrorType::UnableToAdd);
                None
            }
        };

        self.dispatch(Action::CreateSettled);
        created
    }

    /// Deletes one task. The row is not marked pending.
    pub async fn delete_todo(&self, id: u32) {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "todo deleted");
                self.dispatch(Action::Deleted(id));
            }
            Err(e) => {
                tracing::warn!(error = %e, id, "failed to delete todo");
                self.raise(ErrorType::UnableToDelete);
            }
        }
    }

    /// Sends `todo` with one field changed and stores the server's version.
    ///
    /// Returns `true` when the update failed; the collection is then left
    /// untouched so the caller can decide whether to revert its edit.
    pub async fn update_todo(&self, todo: &Todo, field: TodoField) -> bool {
        let request = field.apply(todo);
        match self.api.update(&request).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, "todo updated");
                self.dispatch(Action::Updated(updated));
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, id = todo.id, "failed to update todo");
                self.raise(ErrorType::UnableToUpdate);
                true
            }
        }
    }

    /// Flips the completion flag of one task. Returns `true` on failure.
    pub async fn toggle_todo(&self, todo: &Todo) -> bool {
        self.update_todo(todo, TodoField::Completed(!todo.completed)).await
    }

    /// Commits an inline title edit. Returns `true` on failure.
    ///
    /// An unchanged title is a successful no-op; a blank title deletes the task.
    pub async fn rename_todo(&self, todo: &Todo, title: &str) -> bool {
        let title = title.trim();
        if title == todo.title {
            return false;
        }

        if title.is_empty() {
            self.delete_todo(todo.id).await;
            return self.state.lock().todos.find_by_id(todo.id).is_some();
        }

        self.update_todo(todo, TodoField::Title(title.to_string())).await
    }

    /// Deletes every completed task.
    ///
    /// All deletes run concurrently and each settles on its own: fulfilled
    /// ones are removed, any rejection raises [`ErrorType::UnableToDelete`].
    pub async fn clear_completed(&self) {
        let ids: Vec<u32> = self.snapshot().todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect();
        if ids.is_empty() {
            return;
        }

        self.dispatch(Action::PendingMarked(ids.clone()));

        let results = join_all(ids.iter().map(|&id| async move { (id, self.api.delete(id).await) })).await;
        for (id, result) in results {
            match result {
                Ok(()) => self.dispatch(Action::Deleted(id)),
                Err(e) => {
                    tracing::warn!(error = %e, id, "failed to delete completed todo");
                    self.raise(ErrorType::UnableToDelete);
                }
            }
        }

        self.dispatch(Action::PendingCleared);
    }

    /// Marks every active task completed, or, when none is active, marks
    /// every task active again.
    ///
    /// The new value is applied only if every update succeeds. Updates the
    /// server accepted before another one failed are not reconciled.
    pub async fn toggle_all(&self) {
        let todos = self.snapshot().todos;
        if todos.is_empty() {
            return;
        }

        let completed = !todos.all_completed();
        let targets = if completed { todos.filter_by(TodoFilter::Active) } else { todos };
        let ids: Vec<u32> = targets.iter().map(|todo| todo.id).collect();

        self.dispatch(Action::PendingMarked(ids.clone()));

        let requests: Vec<Todo> = targets.iter().map(|todo| TodoField::Completed(completed).apply(todo)).collect();
        let results = join_all(requests.iter().map(|todo| self.api.update(todo))).await;
        let failures: Vec<anyhow::Error> = results.into_iter().filter_map(Result::err).collect();

        if failures.is_empty() {
            tracing::info!(count = ids.len(), completed, "completion toggled");
            self.dispatch(Action::CompletionApplied { ids, completed });
        } else {
            for e in &failures {
                tracing::warn!(error = %e, "failed to toggle completion");
            }
            self.raise(ErrorType::UnableToUpdate);
        }

        self.dispatch(Action::PendingCleared);
    }

    pub fn set_filter(&self, filter: TodoFilter) {
        self.dispatch(Action::FilterChanged(filter));
    }

    /// Hides the error banner and cancels its auto-clear timer.
    pub fn dismiss_error(&self) {
        let mut error_timer = self.error_timer.lock();
        if let Some(timer) = error_timer.take() {
            timer.abort();
        }
        apply(&self.state, Action::ErrorDismissed);
    }

    fn dispatch(&self, action: Action) {
        apply(&self.state, action);
    }

    /// Shows `kind` and arms the auto-clear timer, replacing any running one.
    fn raise(&self, kind: ErrorType) {
        // Held across dispatch and swap: the stored timer must carry the latest generation.
        let mut error_timer = self.error_timer.lock();
        let generation = apply(&self.state, Action::ErrorRaised(kind));

        let Ok(runtime) = Handle::try_current() else {
            return;
        };
        let state = Arc::clone(&self.state);
        let timer = runtime.spawn(async move {
            tokio::time::sleep(ERROR_CLEAR_DELAY).await;
            apply(&state, Action::ErrorExpired(generation));
        });

        if let Some(previous) = error_timer.replace(timer) {
            previous.abort();
        }
    }

    /// Shows `kind` with no auto-clear.
    fn raise_sticky(&self, kind: ErrorType) {
        let mut error_timer = self.error_timer.lock();
        if let Some(timer) = error_timer.take() {
            timer.abort();
        }
        apply(&self.state, Action::ErrorRaised(kind));
    }
}

impl<A> Drop for TodoStore<A> {
    fn drop(&mut self) {
        if let Some(timer) = self.error_timer.get_mut().take() {
            timer.abort();
        }
    }
}
