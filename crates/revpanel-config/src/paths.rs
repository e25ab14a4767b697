//! Platform-specific paths for the catalog file.
//!
//! # Directory Structure
//!
//! - **User catalog**: `~/.config/revpanel/catalog.toml` (Linux), `~/Library/Application Support/revpanel/catalog.toml` (macOS), `%APPDATA%\revpanel\catalog.toml` (Windows)
//! - **System catalog**: `/usr/share/revpanel/catalog.toml` (Linux), `/Library/Application Support/revpanel/catalog.toml` (macOS)

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "revpanel";

/// File name of the catalog.
pub const CATALOG_FILE_NAME: &str = "catalog.toml";

/// Returns the user-specific configuration directory.
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user catalog file.
pub fn user_catalog_path() -> PathBuf {
    user_config_dir().join(CATALOG_FILE_NAME)
}

/// Returns the system-wide data directory.
pub fn system_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME)
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Library/Application Support").join(APP_NAME)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    }
}

/// Returns the path of the system catalog file.
pub fn system_catalog_path() -> PathBuf {
    system_data_dir().join(CATALOG_FILE_NAME)
}

/// Locate a catalog file.
///
/// An explicit path wins if it exists. Otherwise the user catalog is tried,
/// then the system catalog. Returns `None` when no file exists, in which case
/// callers use the factory catalog.
pub fn find_catalog(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.is_file().then(|| path.to_path_buf());
    }
    [user_catalog_path(), system_catalog_path()]
        .into_iter()
        .find(|p| p.is_file())
}

/// Ensure the user config directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn user_paths_end_with_app_name() {
        assert!(user_config_dir().ends_with("revpanel"));
        assert!(user_catalog_path().ends_with("revpanel/catalog.toml"));
    }

    #[test]
    fn system_catalog_under_app_dir() {
        assert!(system_catalog_path().ends_with("revpanel/catalog.toml"));
    }

    #[test]
    fn explicit_existing_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(find_catalog(Some(path.as_path())), Some(path));
    }

    #[test]
    fn explicit_missing_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert_eq!(find_catalog(Some(path.as_path())), None);
    }
}
