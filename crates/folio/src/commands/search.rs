use clap::ArgMatches;
use tracing::info;

use folio_core::{Command, Store};

use super::helpers::{load_config_with_warning, open_store};
use super::list::print_projects;

pub fn handle_search_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let query = matches
        .get_one::<String>("query")
        .ok_or("Search query is required")?;
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let mut store = open_store(&config);
    // A blank query falls back to the default listing
    store.dispatch(Command::SetFilter {
        filter: config.default_filter(),
    })?;

    info!(event = "cli.search_started", query = query);

    let found = store.search(query);
    print_projects(&found, json_output, "No projects match. Try another keyword.")?;

    info!(event = "cli.search_completed", count = found.len());
    Ok(())
}
