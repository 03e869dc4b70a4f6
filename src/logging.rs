//! Tracing bootstrap for the command-line shell.
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary. Output goes to stderr so stdout stays parseable.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// Repeated calls are no-ops once a subscriber is active.
pub fn init_logging(level: &str) -> Result<(), String> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| format!("invalid log filter `{level}`: {err}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("failed to install tracing subscriber: {err}"))?;

    let _ = INITIALIZED.set(());
    tracing::debug!(filter = %level, "logging initialized");
    Ok(())
}
