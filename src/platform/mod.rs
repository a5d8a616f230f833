// Passforge platform paths
// Resolves where settings and the history database live on each OS.
//
// Linux:   config $XDG_CONFIG_HOME/passforge, data $XDG_DATA_HOME/passforge
// macOS:   ~/Library/Application Support/Passforge for both
// Windows: %APPDATA%/Passforge for both
//
// PASSFORGE_CONFIG_DIR and PASSFORGE_DATA_DIR override the defaults.

use std::env;
use std::path::PathBuf;

pub const CONFIG_DIR_ENV: &str = "PASSFORGE_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "PASSFORGE_DATA_DIR";

/// Returns the configuration directory for Passforge.
pub fn get_config_dir() -> PathBuf {
    resolve(env::var(CONFIG_DIR_ENV).ok(), default_config_dir)
}

/// Returns the data directory for Passforge (history database).
pub fn get_data_dir() -> PathBuf {
    resolve(env::var(DATA_DIR_ENV).ok(), default_data_dir)
}

fn resolve(override_dir: Option<String>, fallback: fn() -> PathBuf) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback(),
    }
}

fn home_dir() -> PathBuf {
    let var = if cfg!(target_os = "windows") { "USERPROFILE" } else { "HOME" };
    PathBuf::from(env::var(var).unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg(target_os = "linux")]
fn default_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("passforge"),
        Err(_) => home_dir().join(".config").join("passforge"),
    }
}

#[cfg(target_os = "linux")]
fn default_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("passforge"),
        Err(_) => home_dir().join(".local").join("share").join("passforge"),
    }
}

#[cfg(target_os = "macos")]
fn default_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Passforge")
}

#[cfg(target_os = "macos")]
fn default_data_dir() -> PathBuf {
    default_config_dir()
}

#[cfg(target_os = "windows")]
fn default_config_dir() -> PathBuf {
    match env::var("APPDATA") {
        Ok(appdata) => PathBuf::from(appdata).join("Passforge"),
        Err(_) => home_dir().join("AppData").join("Roaming").join("Passforge"),
    }
}

#[cfg(target_os = "windows")]
fn default_data_dir() -> PathBuf {
    default_config_dir()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn default_config_dir() -> PathBuf {
    home_dir().join(".passforge")
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn default_data_dir() -> PathBuf {
    default_config_dir()
}
