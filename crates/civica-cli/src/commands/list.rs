use crate::support::{
    issue_json, load_store_existing_or_exit, parse_status_or_exit, parse_type_or_exit,
    print_issue_line, print_json,
};
use civica_core::filter::IssueFilter;
use serde_json::json;

pub fn run(
    status: Option<String>,
    issue_type: Option<String>,
    search: Option<String>,
    file: String,
    json_output: bool,
) {
    let filter = IssueFilter {
        status: status.as_deref().map(parse_status_or_exit),
        issue_type: issue_type.as_deref().map(parse_type_or_exit),
        search,
    };

    let (store, path) = load_store_existing_or_exit(&file);
    let rows = store.list(&filter);

    if json_output {
        let items: Vec<_> = rows.iter().map(issue_json).collect();
        let payload = json!({
            "action": "list",
            "file": path.display().to_string(),
            "count": items.len(),
            "items": items,
        });
        print_json(&payload);
    } else {
        println!(
            "civica list\n  Path: {}\n  Count: {}",
            path.display(),
            rows.len()
        );
        for issue in &rows {
            print_issue_line(issue);
        }
    }
}
