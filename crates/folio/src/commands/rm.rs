use std::io::{self, Write};

use clap::ArgMatches;
use tracing::{error, info};

use folio_core::{Command, Event, FolioError, Store, events};

use super::helpers::{
    describe_error, is_confirmation_accepted, load_config_with_warning, open_store,
    report_warnings,
};

pub fn handle_rm_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Project id is required")?;
    let yes = matches.get_flag("yes");

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    // Confirmation prompt unless --yes is specified
    if !yes && let Some(project) = store.get(id) {
        print!("Delete project \"{}\"? [y/N] ", project.title());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !is_confirmation_accepted(&input) {
            println!("Aborted.");
            info!(event = "cli.rm_aborted", id = id);
            return Ok(());
        }
    }

    match store.dispatch(Command::DeleteProject { id: id.clone() }) {
        Ok(events) => {
            match events.first() {
                Some(Event::ProjectDeleted { title, .. }) => {
                    println!("✅ Project \"{}\" deleted.", title);
                    info!(event = "cli.rm_completed", id = id);
                }
                Some(Event::DeleteSkipped { .. }) => {
                    println!("No project with id '{}', nothing to delete.", id);
                    info!(event = "cli.rm_skipped", id = id);
                }
                _ => {}
            }
            report_warnings(&events);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to delete project: {}", describe_error(&e));
            error!(
                event = "cli.rm_failed",
                id = id,
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
