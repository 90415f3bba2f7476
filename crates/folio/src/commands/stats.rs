use clap::ArgMatches;
use tracing::info;

use super::helpers::{load_config_with_warning, open_store};
use super::json_types::StatsOutput;

pub fn handle_stats_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let store = open_store(&config);
    let stats = store.stats();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&StatsOutput::from(stats))?);
    } else {
        println!("Projects:     {}", stats.total);
        println!("Last updated: {}", stats.last_updated);
    }

    info!(event = "cli.stats_completed", total = stats.total);
    Ok(())
}
