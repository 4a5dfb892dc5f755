use crate::support::{issue_json, load_store_existing_or_exit, print_json};
use serde_json::json;

pub fn run(id: String, file: String, json_output: bool) {
    let (store, path) = load_store_existing_or_exit(&file);
    let issue = store.get(&id).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "action": "show",
            "file": path.display().to_string(),
            "issue": issue_json(issue),
        });
        print_json(&payload);
    } else {
        println!(
            "civica show\n  {} [{} {}]\n  Title: {}\n  Description: {}",
            issue.id, issue.status, issue.issue_type, issue.title, issue.description
        );
        if let Some(address) = issue.location.address.as_deref() {
            println!("  Address: {address}");
        }
        println!(
            "  Location: ({}, {})",
            issue.location.latitude, issue.location.longitude
        );
        println!("  Reported by {} at {}", issue.reported_by, issue.reported_at);
        if let Some(resolved_at) = issue.resolved_at {
            println!("  Resolved at {resolved_at}");
        }
        if let Some(assignee) = issue.assigned_to.as_deref() {
            println!("  Assigned to {assignee}");
        }
    }
}
