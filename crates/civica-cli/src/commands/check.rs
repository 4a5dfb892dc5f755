use crate::support::{load_store_existing_or_exit, print_json};
use civica_store::audit_store;
use serde_json::json;

pub fn run(file: String, json_output: bool) {
    let (store, path) = load_store_existing_or_exit(&file);
    let report = audit_store(&store);

    if json_output {
        let payload = json!({
            "action": "check",
            "file": path.display().to_string(),
            "report": &report,
        });
        print_json(&payload);
    } else {
        println!(
            "civica check {} (issues={}, errors={})",
            if report.accepted() { "OK" } else { "FAIL" },
            report.summary.issue_count,
            report.summary.error_count
        );
        for finding in &report.errors {
            println!(
                "  - {} {} ({})",
                finding.issue_id, finding.class, finding.message
            );
        }
    }

    if !report.accepted() {
        std::process::exit(1);
    }
}
