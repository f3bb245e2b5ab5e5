use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize tracing to stderr.
///
/// `RUST_LOG` overrides the configured filter. Calling this twice is harmless:
/// the second subscriber is rejected and a warning goes to stderr.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_level(true);

    let result = if config.timestamps {
        builder.with_timer(UtcTime::rfc_3339()).try_init()
    } else {
        builder.without_time().try_init()
    };

    if let Err(e) = result {
        eprintln!("Warning: tracing already initialized: {}", e);
    }
}
