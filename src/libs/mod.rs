//! Core library modules for the todos client.
//!
//! - **Task model**: [`todo`] types and the pure list queries
//! - **Store**: [`state`] snapshot and reducer, [`store`] async orchestration
//! - **Errors**: [`error`] user-visible failure kinds
//! - **Infrastructure**: configuration, data directory, messages
//! - **User interface**: console rendering in [`view`]
//!
//! ## Usage
//!
//! ```rust
//! use todos::libs::state::{Action, TodoState};
//! use todos::libs::todo::Todo;
//!
//! let state = TodoState::new().reduce(Action::Loaded(vec![Todo::new(1, 7, "Write docs", false)]));
//! assert_eq!(state.items_left(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod state;
pub mod store;
pub mod todo;
pub mod view;
