use std::fs;

use clap::ArgMatches;
use tracing::{error, info};

use folio_core::{Command, Event, FolioError, Store, events};

use super::helpers::{describe_error, load_config_with_warning, open_store, report_warnings};

pub fn handle_import_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let file = matches
        .get_one::<String>("file")
        .ok_or("Import file is required")?;

    let payload = match fs::read_to_string(file) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", file, e);
            error!(
                event = "cli.import_read_failed",
                file = file,
                error = %e,
                error_code = e.error_code()
            );
            return Err(e.into());
        }
    };

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    info!(event = "cli.import_started", file = file);

    match store.dispatch(Command::ImportProjects { payload }) {
        Ok(events) => {
            if let Some(Event::ProjectsImported { added }) = events.first() {
                println!("✅ Imported {} project(s).", added);
                info!(event = "cli.import_completed", added = added);
            }
            report_warnings(&events);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to import {}: {}", file, describe_error(&e));
            error!(
                event = "cli.import_failed",
                file = file,
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
