use crate::support::{issue_json, parse_status_or_exit, print_json};
use civica_core::lifecycle::TransitionPolicy;
use civica_store::mutate_store_file;
use serde_json::json;

pub fn run(id: String, status: String, unrestricted: bool, file: String, json_output: bool) {
    let target = parse_status_or_exit(&status);
    let policy = if unrestricted {
        TransitionPolicy::Unrestricted
    } else {
        TransitionPolicy::Forward
    };

    let updated = mutate_store_file(&file, |store| {
        store.set_policy(policy);
        let issue = store.update_status(&id, target)?;
        Ok((issue, true))
    })
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "action": "status",
            "file": file,
            "issue": issue_json(&updated),
        });
        print_json(&payload);
    } else {
        println!(
            "civica status\n  {} -> {}\n  Path: {}",
            updated.id, updated.status, file
        );
        if let Some(resolved_at) = updated.resolved_at {
            println!("  Resolved at {resolved_at}");
        }
    }
}
