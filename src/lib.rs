//! # todos - a command-line client for a remote to-do list
//!
//! Fetches a user's tasks from a REST API and lets the user add, edit,
//! toggle and delete them, with client-side filtering and optimistic
//! pending state for in-flight operations.
//!
//! ## Features
//!
//! - **Task Store**: immutable state snapshots with a pure reducer, driven by
//!   asynchronous API settlements in any order
//! - **Bulk Operations**: toggle all and clear completed, issued concurrently
//! - **Error Banner**: typed, most-recent-wins errors that clear themselves
//! - **REST Client**: `reqwest`-based implementation of the task API
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
