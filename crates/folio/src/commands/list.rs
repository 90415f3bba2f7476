use clap::ArgMatches;
use tracing::info;

use folio_core::projects::{CategoryFilter, Project};
use folio_core::{Command, Store};

use super::helpers::{load_config_with_warning, open_store};
use crate::table::TableFormatter;

pub fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    let filter = matches
        .get_one::<String>("category")
        .map(|value| CategoryFilter::parse(value))
        .unwrap_or_else(|| config.default_filter());

    info!(event = "cli.list_started", filter = %filter);
    store.dispatch(Command::SetFilter { filter })?;

    let visible = store.list_visible();
    print_projects(&visible, json_output, "No projects in this category yet.")?;

    info!(event = "cli.list_completed", count = visible.len());
    Ok(())
}

/// Render a project list as JSON or as a table with a count footer.
pub fn print_projects(
    projects: &[&Project],
    json_output: bool,
    empty_message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("{}", empty_message);
        return Ok(());
    }

    let formatter = TableFormatter::new(projects);
    formatter.print_table(projects);
    println!("{} project(s)", projects.len());
    Ok(())
}
