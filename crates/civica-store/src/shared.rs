//! Thread-safe handle over an `IssueStore`.
//!
//! Each operation holds the lock for its whole duration, so readers only
//! ever observe fully-applied mutations. Reads hand back owned snapshots,
//! never references into the locked state.

use crate::memory::{IssueStore, StoreError};
use chrono::{DateTime, Utc};
use civica_core::filter::IssueFilter;
use civica_core::issue::{Issue, NewIssueInput, Status};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable shared owner of one issue store.
#[derive(Debug, Clone, Default)]
pub struct SharedIssueStore {
    inner: Arc<Mutex<IssueStore>>,
}

impl SharedIssueStore {
    pub fn new(store: IssueStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // A poisoned mutex only means a panic mid-operation elsewhere; the
    // store itself is always left in a consistent committed state.
    fn lock(&self) -> MutexGuard<'_, IssueStore> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn create(&self, input: NewIssueInput) -> Result<Issue, StoreError> {
        self.lock().create(input)
    }

    pub fn create_at(&self, input: NewIssueInput, now: DateTime<Utc>) -> Result<Issue, StoreError> {
        self.lock().create_at(input, now)
    }

    pub fn get(&self, id: &str) -> Result<Issue, StoreError> {
        self.lock().get(id).cloned()
    }

    pub fn snapshot(&self) -> Vec<Issue> {
        self.lock().snapshot()
    }

    pub fn list(&self, filter: &IssueFilter) -> Vec<Issue> {
        self.lock().list(filter)
    }

    pub fn update_status(&self, id: &str, status: Status) -> Result<Issue, StoreError> {
        self.lock().update_status(id, status)
    }

    pub fn update_status_at(
        &self,
        id: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<Issue, StoreError> {
        self.lock().update_status_at(id, status, now)
    }

    pub fn update_assignment(&self, id: &str, assignee: Option<String>) -> Result<Issue, StoreError> {
        self.lock().update_assignment(id, assignee)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.lock().delete(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
