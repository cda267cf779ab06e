use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path. Logging is off when unset.
pub const LOG_ENV_VAR: &str = "MARQUEE_LOG";

const DEFAULT_FILTER: &str = "marquee=info";

/// Installs a file subscriber when `MARQUEE_LOG` is set.
///
/// The TUI owns the terminal, so logs never go to stdout or stderr. Each
/// process writes its own `{path}.{timestamp}.{pid}` file. `RUST_LOG`
/// overrides the default `marquee=info` filter. Returns the file in use.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_ENV_VAR).ok().filter(|p| !p.trim().is_empty())?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {err}", path.display());
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()
        .map(|()| path)
}

fn unique_log_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{timestamp}.{pid}"))
}
