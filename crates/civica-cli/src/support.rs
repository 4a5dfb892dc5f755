use civica_core::issue::{Issue, IssueType, Priority, Status};
use civica_store::IssueStore;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

pub fn parse_status_or_exit(raw: &str) -> Status {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn parse_type_or_exit(raw: &str) -> IssueType {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn parse_priority_or_exit(raw: &str) -> Priority {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Load a store, treating a missing file as empty.
pub fn load_store_or_exit(file: &str) -> (IssueStore, PathBuf) {
    let path = PathBuf::from(file);
    if !path.exists() {
        return (IssueStore::new(), path);
    }
    let store = IssueStore::load_jsonl(&path).unwrap_or_else(|e| {
        eprintln!("error: failed to load {}: {e}", path.display());
        std::process::exit(1);
    });
    (store, path)
}

/// Load a store that must already exist on disk.
pub fn load_store_existing_or_exit(file: &str) -> (IssueStore, PathBuf) {
    let path = PathBuf::from(file);
    if !path.exists() {
        eprintln!("error: issues file not found: {}", path.display());
        std::process::exit(1);
    }
    let store = IssueStore::load_jsonl(&path).unwrap_or_else(|e| {
        eprintln!("error: failed to load {}: {e}", path.display());
        std::process::exit(1);
    });
    (store, path)
}

pub fn save_store_or_exit(store: &IssueStore, path: &Path) {
    store.save_jsonl(path).unwrap_or_else(|e| {
        eprintln!("error: failed to save {}: {e}", path.display());
        std::process::exit(1);
    });
}

pub fn issue_json(issue: &Issue) -> Value {
    json!({
        "id": issue.id,
        "title": issue.title,
        "description": issue.description,
        "type": issue.issue_type,
        "status": issue.status,
        "priority": issue.priority,
        "location": issue.location,
        "reportedBy": issue.reported_by,
        "reportedAt": issue.reported_at,
        "resolvedAt": issue.resolved_at,
        "assignedTo": issue.assigned_to,
        "imageUrl": issue.image_url,
    })
}

pub fn print_issue_line(issue: &Issue) {
    let priority = issue
        .priority
        .map(|p| p.as_str())
        .unwrap_or("-");
    println!(
        "  - {} [{} {}/{}] {}",
        issue.id, issue.status, issue.issue_type, priority, issue.title
    );
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
