use clap::ArgMatches;
use tracing::{error, info};

use folio_core::projects::ProjectInput;
use folio_core::{Command, Event, FolioError, Store, events};

use super::helpers::{
    describe_error, load_config_with_warning, open_store, overlay_field_args, report_warnings,
};

pub fn handle_add_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let mut store = open_store(&config);

    let input = overlay_field_args(matches, ProjectInput::default());
    info!(event = "cli.add_started", title = input.title);

    match store.dispatch(Command::CreateProject { input }) {
        Ok(events) => {
            if let Some(Event::ProjectCreated { id, title }) = events.first() {
                println!("✅ Project added!");
                println!("   Id:    {}", id);
                println!("   Title: {}", title);
                info!(event = "cli.add_completed", id = id);
            }
            report_warnings(&events);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to add project: {}", describe_error(&e));
            error!(
                event = "cli.add_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
