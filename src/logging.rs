//! Tracing initialisation.
//!
//! The terminal is owned by the UI, so events go to a log file. The filter
//! comes from `RUST_LOG` and defaults to `launchpad=info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "launchpad=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber appending to `path`.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file(path: &Path) -> color_eyre::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "Logging initialised");
    Ok(())
}

/// Install a global subscriber that discards everything.
///
/// Used when no log file is configured so `tracing` macros stay cheap.
pub fn init_disabled() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("off"))
        .try_init();
}
