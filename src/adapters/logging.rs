use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter, e.g. `facad=debug`.
pub const LOG_ENV: &str = "FACAD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber writing compact lines to stderr.
///
/// An invalid `FACAD_LOG` value falls back to the default filter. Calling this
/// more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = fmt::layer().with_writer(std::io::stderr).without_time().with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
