use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive for the `folio` targets (which also covers `folio_core`).
fn log_directive(quiet: bool) -> &'static str {
    if quiet { "folio=error" } else { "folio=info" }
}

/// Send JSON events to stderr, keeping stdout for command output.
///
/// Quiet mode lets only error-level events through. `RUST_LOG` directives
/// are applied first and the `folio` directive on top. A second call is a
/// no-op.
pub fn init_logging(quiet: bool) {
    let mut filter = EnvFilter::from_default_env();
    match log_directive(quiet).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Warning: ignoring log directive: {}", e),
    }

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();

    if installed.is_err() {
        tracing::debug!(event = "core.logging.already_initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn test_log_directives_parse() {
        for quiet in [true, false] {
            assert!(log_directive(quiet).parse::<Directive>().is_ok());
        }
        assert_eq!(log_directive(true), "folio=error");
        assert_eq!(log_directive(false), "folio=info");
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }
}
