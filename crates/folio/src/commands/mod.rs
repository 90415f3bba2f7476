use clap::ArgMatches;
use tracing::error;

use folio_core::projects::ProjectError;
use folio_core::{DispatchError, FolioError, SYSTEM_ERROR_EXIT_CODE, events};

pub mod helpers;
mod json_types;

mod add;
mod edit;
mod export;
mod import;
mod list;
mod rm;
mod search;
mod show;
mod stats;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("add", sub_matches)) => add::handle_add_command(sub_matches),
        Some(("edit", sub_matches)) => edit::handle_edit_command(sub_matches),
        Some(("rm", sub_matches)) => rm::handle_rm_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("search", sub_matches)) => search::handle_search_command(sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("export", sub_matches)) => export::handle_export_command(sub_matches),
        Some(("import", sub_matches)) => import::handle_import_command(sub_matches),
        Some(("stats", sub_matches)) => stats::handle_stats_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

/// Process exit status for an error returned by a command handler.
///
/// Classified errors map through [`FolioError::exit_code`]; anything else is
/// treated as a system error.
pub fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    if let Some(e) = error.downcast_ref::<DispatchError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<ProjectError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<std::io::Error>() {
        return e.exit_code();
    }
    SYSTEM_ERROR_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::USER_ERROR_EXIT_CODE;
    use folio_core::projects::ValidationError;

    #[test]
    fn test_exit_code_for_user_errors() {
        let boxed: Box<dyn std::error::Error> =
            DispatchError::from(ProjectError::from(ValidationError::NoTags)).into();
        assert_eq!(exit_code(boxed.as_ref()), USER_ERROR_EXIT_CODE);

        let boxed: Box<dyn std::error::Error> = ProjectError::NotFound {
            id: "x".to_string(),
        }
        .into();
        assert_eq!(exit_code(boxed.as_ref()), USER_ERROR_EXIT_CODE);
    }

    #[test]
    fn test_exit_code_for_system_errors() {
        let boxed: Box<dyn std::error::Error> = std::io::Error::other("disk full").into();
        assert_eq!(exit_code(boxed.as_ref()), SYSTEM_ERROR_EXIT_CODE);

        let boxed: Box<dyn std::error::Error> = "unexpected".into();
        assert_eq!(exit_code(boxed.as_ref()), SYSTEM_ERROR_EXIT_CODE);
    }
}
