use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives.
pub(crate) const LOG_ENV: &str = "PIPESH_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs a global subscriber that writes log events to standard error.
///
/// Standard output is left untouched, as it belongs to the commands that the
/// shell executes.
pub(crate) fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore failures from a subscriber that has already been installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
