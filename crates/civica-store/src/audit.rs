//! Deterministic invariant audit over hydrated store state.
//!
//! A live store cannot violate these invariants through its own API; a
//! hand-edited or foreign JSONL file can. The audit walks every record and
//! reports stable finding classes so tooling can gate on them.

use crate::memory::IssueStore;
use civica_core::issue::{DESCRIPTION_MAX_CHARS, Status, TITLE_MAX_CHARS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const STORE_AUDIT_KIND: &str = "civica.store.audit.v1";

pub const AUDIT_CLASS_RESOLVED_AT_MISMATCH: &str = "store.resolved_at.mismatch";
pub const AUDIT_CLASS_COORDINATE_RANGE: &str = "store.location.out_of_range";
pub const AUDIT_CLASS_TITLE_INVALID: &str = "store.title.invalid";
pub const AUDIT_CLASS_DESCRIPTION_INVALID: &str = "store.description.invalid";
pub const AUDIT_CLASS_REPORTER_MISSING: &str = "store.reporter.missing";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub issue_id: String,
    pub class: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub issue_count: usize,
    pub error_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreAuditReport {
    pub audit_kind: String,
    pub result: String,
    pub failure_classes: Vec<String>,
    pub errors: Vec<AuditFinding>,
    pub summary: AuditSummary,
}

impl StoreAuditReport {
    pub fn accepted(&self) -> bool {
        self.result == "accepted"
    }
}

/// Check every record against the creation and lifecycle invariants.
pub fn audit_store(store: &IssueStore) -> StoreAuditReport {
    let mut errors = Vec::new();

    for issue in store.issues() {
        let resolved = issue.status == Status::Resolved;
        if issue.resolved_at.is_some() != resolved {
            errors.push(AuditFinding {
                issue_id: issue.id.clone(),
                class: AUDIT_CLASS_RESOLVED_AT_MISMATCH.to_string(),
                message: format!(
                    "status={} but resolved_at is {}",
                    issue.status,
                    if issue.resolved_at.is_some() {
                        "present"
                    } else {
                        "absent"
                    }
                ),
            });
        }

        if !issue.location.in_range() {
            errors.push(AuditFinding {
                issue_id: issue.id.clone(),
                class: AUDIT_CLASS_COORDINATE_RANGE.to_string(),
                message: format!(
                    "coordinates out of range: ({}, {})",
                    issue.location.latitude, issue.location.longitude
                ),
            });
        }

        if issue.title.trim().is_empty() || issue.title.chars().count() > TITLE_MAX_CHARS {
            errors.push(AuditFinding {
                issue_id: issue.id.clone(),
                class: AUDIT_CLASS_TITLE_INVALID.to_string(),
                message: format!(
                    "title must be non-empty and at most {TITLE_MAX_CHARS} characters"
                ),
            });
        }

        if issue.description.trim().is_empty()
            || issue.description.chars().count() > DESCRIPTION_MAX_CHARS
        {
            errors.push(AuditFinding {
                issue_id: issue.id.clone(),
                class: AUDIT_CLASS_DESCRIPTION_INVALID.to_string(),
                message: format!(
                    "description must be non-empty and at most {DESCRIPTION_MAX_CHARS} characters"
                ),
            });
        }

        if issue.reported_by.trim().is_empty() {
            errors.push(AuditFinding {
                issue_id: issue.id.clone(),
                class: AUDIT_CLASS_REPORTER_MISSING.to_string(),
                message: "reported_by must identify the submitting user".to_string(),
            });
        }
    }

    let failure_classes: Vec<String> = errors
        .iter()
        .map(|finding| finding.class.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    StoreAuditReport {
        audit_kind: STORE_AUDIT_KIND.to_string(),
        result: if errors.is_empty() {
            "accepted".to_string()
        } else {
            "rejected".to_string()
        },
        failure_classes,
        summary: AuditSummary {
            issue_count: store.len(),
            error_count: errors.len(),
        },
        errors,
    }
}
