//! In-process [`UserStore`] adapter standing in for device-local storage.

use std::sync::{Mutex, MutexGuard};

use crate::ports::{UserStore, UserStoreError};
use crate::record::ValidatedRecord;

/// Vector-backed user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<ValidatedRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<ValidatedRecord>>, UserStoreError> {
        self.records
            .lock()
            .map_err(|_| UserStoreError::unavailable("user store lock poisoned"))
    }
}

impl UserStore for InMemoryUserStore {
    fn contains_email(&self, email: &str) -> Result<bool, UserStoreError> {
        Ok(self
            .records()?
            .iter()
            .any(|record| record.email() == email))
    }

    fn create(&self, record: &ValidatedRecord) -> Result<(), UserStoreError> {
        self.records()?.push(record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<ValidatedRecord>, UserStoreError> {
        Ok(self.records()?.clone())
    }
}
