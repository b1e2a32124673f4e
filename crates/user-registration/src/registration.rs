//! Registration service gating persistence on validation.
//!
//! A record reaches the [`UserStore`] only after it passes every validator
//! of the configured shape. When validation fails the store is not called
//! at all, not even for the duplicate email lookup.

use std::sync::Arc;

use mockable::Clock;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::FieldError;
use crate::ports::{UserStore, UserStoreError};
use crate::record::ValidatedRecord;
use crate::user::ValidationConfig;

/// Why a registration attempt did not create a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A field failed validation; the store was not contacted.
    #[error("registration rejected: {0}")]
    Invalid(FieldError),
    /// A user with the same email address is already stored.
    #[error("email {email} is already registered")]
    DuplicateEmail {
        /// Address that collided.
        email: String,
    },
    /// The store failed while checking or persisting the record.
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

/// Validates submitted records and hands accepted ones to a [`UserStore`].
#[derive(Clone)]
pub struct RegistrationService<S> {
    store: Arc<S>,
    config: Arc<ValidationConfig>,
    clock: Arc<dyn Clock>,
}

impl<S> RegistrationService<S> {
    /// Create a service over `store`. `clock` supplies the reference date
    /// for age checks.
    pub fn new(store: Arc<S>, config: ValidationConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            config: Arc::new(config),
            clock,
        }
    }

    /// Configuration records are validated against.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl<S: UserStore> RegistrationService<S> {
    /// Validate `record` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Invalid`] for the first failing field,
    /// [`RegistrationError::DuplicateEmail`] when the email is taken, and
    /// [`RegistrationError::Store`] for adapter failures.
    pub fn register(&self, record: &Value) -> Result<ValidatedRecord, RegistrationError> {
        let reference_date = self.clock.utc().date_naive();
        let validated = ValidatedRecord::try_from_value(record, &self.config, reference_date)
            .map_err(|error| {
                debug!(field = %error.field, code = %error.code(), "registration rejected");
                RegistrationError::Invalid(error)
            })?;

        if self
            .store
            .contains_email(validated.email())
            .map_err(log_store_failure)?
        {
            info!(shape = %validated.shape(), "registration rejected: duplicate email");
            return Err(RegistrationError::DuplicateEmail {
                email: validated.email().to_owned(),
            });
        }

        self.store.create(&validated).map_err(log_store_failure)?;
        info!(shape = %validated.shape(), "user registered");
        Ok(validated)
    }

    /// Every registered user, as reported by the store.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Store`] when the store cannot be read.
    pub fn registered_users(&self) -> Result<Vec<ValidatedRecord>, RegistrationError> {
        Ok(self.store.list().map_err(log_store_failure)?)
    }
}

fn log_store_failure(error: UserStoreError) -> UserStoreError {
    warn!(%error, "user store operation failed");
    error
}
