use tracing::{error, info, warn};

use crate::errors::FolioError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Record which slot the catalog came from and how it was populated.
pub fn log_catalog_ready(slot: &str, count: usize, seeded: bool) {
    info!(
        event = "core.app.catalog_ready",
        slot = slot,
        count = count,
        seeded = seeded
    );
}

/// Log a failed operation at a level matching its classification: user
/// errors as warnings, system errors as errors.
pub fn log_app_error(error: &dyn FolioError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.request_rejected",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ProjectError;

    #[test]
    fn test_app_events() {
        log_app_startup();
        log_catalog_ready("memory", 3, true);
        log_app_shutdown();
    }

    #[test]
    fn test_log_app_error_accepts_both_classes() {
        log_app_error(&ProjectError::NotFound {
            id: "missing".to_string(),
        });
        log_app_error(&std::io::Error::other("disk full"));
    }
}
