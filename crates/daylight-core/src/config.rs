//! Location of the settings file.
//!
//! The file lives one directory above the plugin's install directory so that
//! the analysis pipeline next to the plugin can pick it up.

use std::env;
use std::path::{Path, PathBuf};

use crate::settings::SETTINGS_FILENAME;

/// Overrides every other location when set to a non-empty path.
pub const SETTINGS_PATH_ENV: &str = "DAYLIGHT_SETTINGS_PATH";

const CONFIG_DIR_NAME: &str = "daylight-factor";

/// Settings file for a plugin installed in `install_dir`.
pub fn settings_path_for_install_dir(install_dir: &Path) -> PathBuf {
    install_dir
        .parent()
        .unwrap_or(install_dir)
        .join(SETTINGS_FILENAME)
}

/// Pick the settings path from an optional override and the install directory.
pub fn select_settings_path(override_path: Option<&str>, install_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path.map(str::trim).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(dir) = install_dir {
        return settings_path_for_install_dir(dir);
    }

    log::warn!("Could not determine plugin path. Using current working directory.");
    if let Ok(cwd) = env::current_dir() {
        return settings_path_for_install_dir(&cwd);
    }

    dirs::config_dir()
        .map(|d| d.join(CONFIG_DIR_NAME))
        .unwrap_or_default()
        .join(SETTINGS_FILENAME)
}

/// Resolve the settings path for the running process.
pub fn resolve_settings_path() -> PathBuf {
    let override_path = env::var(SETTINGS_PATH_ENV).ok();
    let install_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let path = select_settings_path(override_path.as_deref(), install_dir.as_deref());
    log::info!("Settings file: {}", path.display());
    path
}
