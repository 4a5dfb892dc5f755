//! Canonical in-memory issue state.
//!
//! This is the single owner of the collection:
//! - insertion-ordered records with linear-scan lookup (datasets are small
//!   by contract; pagination is a documented extension point, not built)
//! - an id-history set so an id is never reused, even after delete
//! - every mutation goes through the lifecycle policy before committing

use crate::jsonl::{JsonlError, read_issues_from_path, write_issues_to_path};
use chrono::{DateTime, Utc};
use civica_core::filter::{IssueFilter, filter_issues, newest_first};
use civica_core::issue::{Issue, NewIssueInput, Status, ValidationError};
use civica_core::lifecycle::{InvalidTransition, TransitionPolicy, apply_status};
use std::collections::BTreeSet;
use std::path::Path;
use uuid::Uuid;

/// Errors raised by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("issue not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Transition(#[from] InvalidTransition),

    #[error(transparent)]
    Jsonl(#[from] JsonlError),
}

/// The issue collection and its mutation contract.
#[derive(Debug, Clone)]
pub struct IssueStore {
    issues: Vec<Issue>,
    issued_ids: BTreeSet<String>,
    policy: TransitionPolicy,
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueStore {
    /// Empty store under the default forward-only transition policy.
    pub fn new() -> Self {
        Self::with_policy(TransitionPolicy::default())
    }

    pub fn with_policy(policy: TransitionPolicy) -> Self {
        Self {
            issues: Vec::new(),
            issued_ids: BTreeSet::new(),
            policy,
        }
    }

    /// Build a store from fully-materialized records.
    ///
    /// Duplicate ids resolve with deterministic last-write-wins semantics
    /// (the first occurrence keeps its position), matching append/overlay
    /// behavior in JSONL sync workflows. Hydrated ids count toward the
    /// never-reuse history.
    pub fn from_issues(records: Vec<Issue>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.issued_ids.insert(record.id.clone());
            match store
                .issues
                .iter_mut()
                .find(|existing| existing.id == record.id)
            {
                Some(existing) => *existing = record,
                None => store.issues.push(record),
            }
        }
        store
    }

    /// Load store state from a JSONL file.
    pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let issues = read_issues_from_path(path)?;
        Ok(Self::from_issues(issues))
    }

    /// Persist store state to a JSONL file.
    pub fn save_jsonl(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        write_issues_to_path(path, &self.issues)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: TransitionPolicy) {
        self.policy = policy;
    }

    /// Validate input, assign a fresh id and `reported_at = now`, and
    /// append the record with `status = Pending`.
    pub fn create(&mut self, input: NewIssueInput) -> Result<Issue, StoreError> {
        self.create_at(input, Utc::now())
    }

    /// `create` with an explicit clock, for deterministic callers.
    pub fn create_at(
        &mut self,
        input: NewIssueInput,
        now: DateTime<Utc>,
    ) -> Result<Issue, StoreError> {
        input.validate()?;
        let id = self.next_id();
        let issue = input.into_issue(id, now);
        self.issued_ids.insert(issue.id.clone());
        self.issues.push(issue.clone());
        Ok(issue)
    }

    // Every id ever issued stays in `issued_ids`, so the loop can never
    // hand out an id seen earlier in this store's lifetime.
    fn next_id(&self) -> String {
        loop {
            let candidate = format!("issue-{}", Uuid::new_v4().simple());
            if !self.issued_ids.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Point lookup by id.
    pub fn get(&self, id: &str) -> Result<&Issue, StoreError> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Iterate all records in insertion order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Insertion-order snapshot, never a live view.
    pub fn snapshot(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    /// Filtered snapshot in display order: newest first, filter applied
    /// stably so matching records keep their relative order.
    pub fn list(&self, filter: &IssueFilter) -> Vec<Issue> {
        let mut selected = filter_issues(self.issues.iter(), filter);
        newest_first(&mut selected);
        selected
    }

    /// Apply a status transition through the lifecycle policy.
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<Issue, StoreError> {
        self.update_status_at(id, status, Utc::now())
    }

    /// `update_status` with an explicit clock.
    ///
    /// `NotFound` and `InvalidTransition` leave the store untouched.
    pub fn update_status_at(
        &mut self,
        id: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<Issue, StoreError> {
        let policy = self.policy;
        let issue = self.issue_mut(id)?;
        apply_status(issue, status, now, policy)?;
        Ok(issue.clone())
    }

    /// Set or clear the free-text assignee.
    pub fn update_assignment(
        &mut self,
        id: &str,
        assignee: Option<String>,
    ) -> Result<Issue, StoreError> {
        let issue = self.issue_mut(id)?;
        issue.assigned_to = assignee.filter(|value| !value.trim().is_empty());
        Ok(issue.clone())
    }

    /// Remove a record. Idempotent: absent ids return `false`, not an
    /// error. The id stays in history and is never assigned again.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.issues.len();
        self.issues.retain(|issue| issue.id != id);
        self.issues.len() != before
    }

    fn issue_mut(&mut self, id: &str) -> Result<&mut Issue, StoreError> {
        self.issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
