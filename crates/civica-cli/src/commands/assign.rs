use crate::support::{issue_json, print_json};
use civica_store::mutate_store_file;
use serde_json::json;

pub fn run(id: String, assignee: Option<String>, file: String, json_output: bool) {
    let updated = mutate_store_file(&file, |store| {
        let issue = store.update_assignment(&id, assignee.clone())?;
        Ok((issue, true))
    })
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "action": "assign",
            "file": file,
            "issue": issue_json(&updated),
        });
        print_json(&payload);
    } else {
        match updated.assigned_to.as_deref() {
            Some(assignee) => println!("civica assign\n  {} -> {assignee}", updated.id),
            None => println!("civica assign\n  {} -> (unassigned)", updated.id),
        }
    }
}
