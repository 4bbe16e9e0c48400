//! User-visible failure kinds shown in the error banner.
//!
//! Every failed API call is converted into one of these at the call site;
//! the most recent one wins. The absence of an error is `Option::None`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorType {
    #[error("Title should not be empty")]
    EmptyTitle,

    #[error("Unable to load todos")]
    UnableToLoad,

    #[error("Unable to add a todo")]
    UnableToAdd,

    #[error("Unable to delete a todo")]
    UnableToDelete,

    #[error("Unable to update a todo")]
    UnableToUpdate,
}
