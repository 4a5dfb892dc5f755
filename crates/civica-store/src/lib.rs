//! # civica-store
//!
//! Storage layer for civic-issue reports.
//!
//! This crate provides:
//! - `IssueStore`: the canonical in-memory collection with unique-id
//!   history and the full create/list/update/delete contract
//! - JSONL read/write (portable persistence, atomic file replacement)
//! - lock-scoped mutation of a store file (`mutate_store_file`)
//! - `SharedIssueStore`: a thread-safe handle for multi-threaded callers
//! - `audit_store`: deterministic invariant checking over hydrated state
//!
//! ## Data model
//!
//! ```text
//! JSONL (on disk, one line per issue)
//!     ↕  hydrate / persist
//! IssueStore (insertion-ordered in-memory state)
//! ```

pub mod audit;
pub mod jsonl;
pub mod memory;
pub mod mutate;
pub mod shared;

pub use audit::{
    AUDIT_CLASS_COORDINATE_RANGE, AUDIT_CLASS_DESCRIPTION_INVALID, AUDIT_CLASS_REPORTER_MISSING,
    AUDIT_CLASS_RESOLVED_AT_MISMATCH, AUDIT_CLASS_TITLE_INVALID, AuditFinding, AuditSummary,
    STORE_AUDIT_KIND, StoreAuditReport, audit_store,
};
pub use jsonl::{JsonlError, read_issues, read_issues_from_path, write_issues, write_issues_to_path};
pub use memory::{IssueStore, StoreError};
pub use mutate::{StoreFileError, mutate_store_file, store_lock_path};
pub use shared::SharedIssueStore;
