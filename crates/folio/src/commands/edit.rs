use clap::ArgMatches;
use tracing::{error, info};

use folio_core::projects::{ProjectError, ProjectInput};
use folio_core::{Command, Event, FolioError, Store, events};

use super::helpers::{
    describe_error, load_config_with_warning, open_store, overlay_field_args, report_warnings,
};

pub fn handle_edit_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Project id is required")?;

    let config = load_config_with_warning();
    let mut store = open_store(&config);

    // Start from the current values, like a pre-filled edit form
    let Some(current) = store.get(id) else {
        let e = ProjectError::NotFound { id: id.clone() };
        eprintln!("❌ Failed to edit project: {}", describe_error(&e));
        error!(
            event = "cli.edit_failed",
            id = id,
            error = %e,
            error_code = e.error_code()
        );
        events::log_app_error(&e);
        return Err(e.into());
    };
    let input = overlay_field_args(matches, ProjectInput::from_project(current));

    info!(event = "cli.edit_started", id = id);

    match store.dispatch(Command::UpdateProject {
        id: id.clone(),
        input,
    }) {
        Ok(events) => {
            if let Some(Event::ProjectUpdated { id, title }) = events.first() {
                println!("✅ Project updated!");
                println!("   Id:    {}", id);
                println!("   Title: {}", title);
                info!(event = "cli.edit_completed", id = id);
            }
            report_warnings(&events);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to edit project: {}", describe_error(&e));
            error!(
                event = "cli.edit_failed",
                id = id,
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
