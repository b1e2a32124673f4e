//! Driven port for the storage collaborator that receives validated records.
//!
//! Adapters (local storage, a remote collection endpoint) map their failures
//! into [`UserStoreError`] so the registration service can report them
//! without knowing the transport. The port is synchronous: validation and
//! the in-process adapters perform no suspension.

use thiserror::Error;

use crate::record::ValidatedRecord;

/// Errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserStoreError {
    /// The store could not be reached or read.
    #[error("user store unavailable: {message}")]
    Unavailable {
        /// Adapter-specific description.
        message: String,
    },
    /// The store refused or failed to persist a record.
    #[error("user store write failed: {message}")]
    Write {
        /// Adapter-specific description.
        message: String,
    },
}

impl UserStoreError {
    /// Convenience constructor for [`UserStoreError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`UserStoreError::Write`].
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Storage for registered users: a create/list pair plus an email lookup.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Returns `true` when a record with exactly this email is stored.
    fn contains_email(&self, email: &str) -> Result<bool, UserStoreError>;

    /// Persist a validated record.
    fn create(&self, record: &ValidatedRecord) -> Result<(), UserStoreError>;

    /// Every stored record, in insertion order.
    fn list(&self) -> Result<Vec<ValidatedRecord>, UserStoreError>;
}
