use crate::support::{
    issue_json, load_store_or_exit, parse_priority_or_exit, parse_type_or_exit,
    print_json, save_store_or_exit,
};
use civica_core::issue::{Location, NewIssueInput};
use serde_json::json;

pub struct Args {
    pub title: String,
    pub description: String,
    pub issue_type: String,
    pub lat: f64,
    pub lon: f64,
    pub address: Option<String>,
    pub reporter: String,
    pub priority: Option<String>,
    pub image_url: Option<String>,
    pub file: String,
    pub json: bool,
}

pub fn run(args: Args) {
    let issue_type = parse_type_or_exit(&args.issue_type);
    let priority = args.priority.as_deref().map(parse_priority_or_exit);

    let input = NewIssueInput {
        title: args.title,
        description: args.description,
        issue_type,
        location: Location {
            latitude: args.lat,
            longitude: args.lon,
            address: args.address,
        },
        reported_by: args.reporter,
        priority,
        image_url: args.image_url,
    };

    let (mut store, path) = load_store_or_exit(&args.file);
    let issue = store.create(input).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    save_store_or_exit(&store, &path);

    if args.json {
        let payload = json!({
            "action": "report",
            "file": path.display().to_string(),
            "issue": issue_json(&issue),
        });
        print_json(&payload);
    } else {
        println!(
            "civica report\n  Created: {} [{}]\n  Path: {}",
            issue.id,
            issue.status,
            path.display()
        );
    }
}
