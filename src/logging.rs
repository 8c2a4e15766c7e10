use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "MODAL_DIALOG_LOG";

/// Initialize tracing with file output.
///
/// Logging stays off unless `MODAL_DIALOG_LOG` names a file path, since the
/// host usually owns stdout/stderr. Returns `true` if a subscriber was
/// installed by this call; a second call (or a host-installed subscriber)
/// leaves the existing one in place.
pub fn init_tracing() -> bool {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return false;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}
