//! Civica CLI: the `civica` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            title,
            description,
            issue_type,
            lat,
            lon,
            address,
            reporter,
            priority,
            image_url,
            file,
            json,
        } => commands::report::run(commands::report::Args {
            title,
            description,
            issue_type,
            lat,
            lon,
            address,
            reporter,
            priority,
            image_url,
            file,
            json,
        }),

        Commands::List {
            status,
            issue_type,
            search,
            file,
            json,
        } => commands::list::run(status, issue_type, search, file, json),

        Commands::Show { id, file, json } => commands::show::run(id, file, json),

        Commands::Status {
            id,
            status,
            unrestricted,
            file,
            json,
        } => commands::status::run(id, status, unrestricted, file, json),

        Commands::Assign {
            id,
            assignee,
            file,
            json,
        } => commands::assign::run(id, assignee, file, json),

        Commands::Delete { id, file, json } => commands::delete::run(id, file, json),

        Commands::Check { file, json } => commands::check::run(file, json),
    }
}
