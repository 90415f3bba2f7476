use clap::ArgMatches;
use tracing::warn;

use folio_core::config::FolioConfig;
use folio_core::events;
use folio_core::projects::{FileSlot, ProjectInput, ProjectStore, SystemClock};
use folio_core::{Event, FolioError};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> FolioConfig {
    match FolioConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.folio/config.toml and ./.folio/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            FolioConfig::default()
        }
    }
}

/// Open the catalog described by `config`, telling the user if the stored
/// data had to be discarded.
pub fn open_store(config: &FolioConfig) -> ProjectStore<FileSlot> {
    let slot = FileSlot::new(config.projects_file());
    let store = ProjectStore::initialize_with(slot, Box::new(SystemClock), config.seed_samples());

    if let Some(load_error) = store.load_error() {
        eprintln!("Warning: {}", load_error);
    }
    if let Some(e) = store.seed_save_error() {
        eprintln!("Warning: sample projects could not be saved: {}", e);
    }

    events::log_catalog_ready(
        &store.slot().path().display().to_string(),
        store.len(),
        store.is_seeded(),
    );

    store
}

/// Overlay the project field flags that were given onto `base`.
pub fn overlay_field_args(matches: &ArgMatches, base: ProjectInput) -> ProjectInput {
    let field = |name: &str, current: String| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or(current)
    };

    ProjectInput {
        title: field("title", base.title),
        description: field("description", base.description),
        category: field("category", base.category),
        tags: field("tags", base.tags),
        demo_link: field("demo", base.demo_link),
        code_link: field("code", base.code_link),
        image_url: field("image", base.image_url),
    }
}

/// Print warnings carried by dispatch events (currently only save failures).
pub fn report_warnings(events: &[Event]) {
    for event in events {
        if let Event::SaveFailed { message } = event {
            eprintln!("⚠️  {}", message);
            eprintln!("   The change is shown above but may be lost when folio runs again.");
        }
    }
}

/// Follow-up advice for user errors, keyed by error code.
fn hint_for(error_code: &str) -> Option<&'static str> {
    match error_code {
        "PROJECT_MISSING_REQUIRED_FIELD" | "PROJECT_NO_TAGS" | "PROJECT_UNKNOWN_CATEGORY" => {
            Some("Required: --title, --description, --category (web, app or game), --tags")
        }
        "PROJECT_IMPORT_INVALID_FORMAT" | "PROJECT_IMPORT_PARSE_FAILURE" => {
            Some("Expected a JSON array written by 'folio export'")
        }
        "PROJECT_NOT_FOUND" => Some("Run 'folio list' to see project ids"),
        _ => None,
    }
}

/// User-facing message for a failed operation.
///
/// User errors get a hint on how to fix the request; system errors carry
/// their error code so they can be matched against the logs.
pub fn describe_error(error: &dyn FolioError) -> String {
    if !error.is_user_error() {
        return format!("{} [{}]", error, error.error_code());
    }
    match hint_for(error.error_code()) {
        Some(hint) => format!("{}. {}", error, hint),
        None => error.to_string(),
    }
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}
