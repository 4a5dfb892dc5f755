use crate::support::print_json;
use civica_store::mutate_store_file;
use serde_json::json;

pub fn run(id: String, file: String, json_output: bool) {
    let removed = mutate_store_file(&file, |store| {
        let removed = store.delete(&id);
        Ok((removed, removed))
    })
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "action": "delete",
            "file": file,
            "id": id,
            "removed": removed,
        });
        print_json(&payload);
    } else if removed {
        println!("civica delete\n  Removed: {id}");
    } else {
        println!("civica delete\n  Not present: {id}");
    }
}
