//! Remote task API.
//!
//! The store talks to the backend only through the [`TodoApi`] trait, so the
//! HTTP client can be swapped for an in-memory double in tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos::api::{ApiConfig, TodoApi, TodosClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = TodosClient::new(&ApiConfig::default(), 42)?;
//! let todos = client.list().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::todo::Todo;
use anyhow::Result;

pub mod todos;

pub use todos::{ApiConfig, TodosClient};

/// Operations offered by the remote task API.
///
/// Every method may fail; failures carry the underlying transport or status
/// error and are translated into user-visible error kinds by the store.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// Fetches every task of the configured user.
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Persists a new task. The id of `todo` is ignored; the returned task
    /// carries the id assigned by the server.
    async fn create(&self, todo: &Todo) -> Result<Todo>;

    /// Replaces the whole record identified by `todo.id`.
    async fn update(&self, todo: &Todo) -> Result<Todo>;

    async fn delete(&self, id: u32) -> Result<()>;
}

