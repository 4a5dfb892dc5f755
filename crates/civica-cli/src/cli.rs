use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "civica",
    about = "Civica: report and triage civic issues over a JSONL store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new issue report
    Report {
        /// Short title (at most 100 characters)
        #[arg(long)]
        title: String,

        /// Problem description (at most 500 characters)
        #[arg(long)]
        description: String,

        /// Category: road, garbage, streetlight, park, or other
        #[arg(long = "type", value_name = "TYPE")]
        issue_type: String,

        /// Latitude of the problem site
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the problem site
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Human-readable address
        #[arg(long)]
        address: Option<String>,

        /// Identifier of the reporting user
        #[arg(long)]
        reporter: String,

        /// Display priority: low, medium, or high
        #[arg(long)]
        priority: Option<String>,

        /// URL of an already-uploaded photo
        #[arg(long)]
        image_url: Option<String>,

        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List issues, newest first
    List {
        /// Filter by status: pending, in_progress, or resolved
        #[arg(long)]
        status: Option<String>,

        /// Filter by category
        #[arg(long = "type", value_name = "TYPE")]
        issue_type: Option<String>,

        /// Case-insensitive search over title, description, id, and address
        #[arg(long)]
        search: Option<String>,

        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one issue by id
    Show {
        /// Issue id
        id: String,

        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change an issue's lifecycle status
    Status {
        /// Issue id
        id: String,

        /// Target status: pending, in_progress, or resolved
        status: String,

        /// Allow transitions outside the forward-only table
        #[arg(long)]
        unrestricted: bool,

        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set or clear an issue's assignee
    Assign {
        /// Issue id
        id: String,

        /// Assignee (department or person); omit to clear
        assignee: Option<String>,

        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an issue (idempotent)
    Delete {
        /// Issue id
        id: String,

        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Audit the store file against the record invariants
    Check {
        /// Path to issues JSONL
        #[arg(long, default_value = ".civica/issues.jsonl")]
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
