mod config;

pub use config::{Config, LoggingConfig, PhasesConfig, TickerConfig};

use std::ffi::OsString;
use std::path::PathBuf;

/// Returns `~/.config/pomotick[-dev]/` based on POMOTICK_ENV, without
/// creating it.
///
/// Set POMOTICK_ENV=dev to use the development data directory.
/// POMOTICK_CONFIG_DIR overrides the location entirely.
pub fn config_dir() -> PathBuf {
    resolve_config_dir(
        std::env::var_os("POMOTICK_CONFIG_DIR"),
        std::env::var("POMOTICK_ENV").ok(),
        dirs::home_dir(),
    )
}

/// Like [`config_dir`], but creates the directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn resolve_config_dir(
    override_dir: Option<OsString>,
    env: Option<String>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    let base_dir = home.unwrap_or_else(|| PathBuf::from(".")).join(".config");
    if env.as_deref() == Some("dev") {
        base_dir.join("pomotick-dev")
    } else {
        base_dir.join("pomotick")
    }
}
