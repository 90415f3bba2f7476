use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use folio_core::projects::export_file_name;
use folio_core::{FolioError, events};

use super::helpers::{describe_error, load_config_with_warning, open_store};

pub fn handle_export_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let store = open_store(&config);

    let output = match matches.get_one::<String>("output") {
        Some(path) => PathBuf::from(path),
        None => {
            let today = store.now().with_timezone(&chrono::Local).date_naive();
            config.export_directory().join(export_file_name(today))
        }
    };

    let payload = match store.export_all() {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("❌ {}", describe_error(&e));
            error!(event = "cli.export_failed", error = %e, error_code = e.error_code());
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if let Err(e) = fs::write(&output, payload) {
        eprintln!("❌ Failed to write {}: {}", output.display(), e);
        error!(
            event = "cli.export_failed",
            path = %output.display(),
            error = %e,
            error_code = e.error_code()
        );
        events::log_app_error(&e);
        return Err(e.into());
    }

    println!(
        "✅ Exported {} project(s) to {}",
        store.len(),
        output.display()
    );
    info!(
        event = "cli.export_completed",
        path = %output.display(),
        count = store.len()
    );
    Ok(())
}
