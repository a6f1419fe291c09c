use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

/// Install a `tracing` subscriber that appends to `settings.file`.
///
/// The terminal belongs to the TUI, so nothing is installed when no log
/// file is configured. `RUST_LOG` overrides `settings.level`.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = settings.file.as_ref() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
