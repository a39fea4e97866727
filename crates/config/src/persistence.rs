//! Configuration file discovery and reading.
//!
//! JSON5 (`.json5`) is the preferred format since it allows comments and
//! trailing commas; plain JSON is accepted as well. Files are searched in
//! the following order:
//!
//! 1. Local: `./scaffold.json5` or `./scaffold.json`
//! 2. User: `<config dir>/scaffold/config.json5` or `<config dir>/scaffold/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["scaffold.json5", "scaffold.json"];

/// Directory under the platform config dir holding the user configuration.
const USER_CONFIG_DIR: &str = "scaffold";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file in the working directory or the user
/// configuration directory.
///
/// # Examples
///
/// ```no_run
/// use scaffold_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file under explicit search roots.
///
/// `local_dir` is searched for the local file names first, then `user_dir`
/// (if any) for the user file names.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let found = local.chain(user).find(|path| path.exists());
    match &found {
        Some(path) => tracing::debug!(target: "config", path = %path.display(), "config_file_found"),
        None => tracing::debug!(target: "config", "config_file_missing"),
    }
    found
}

/// Reads and parses a JSON5 (or JSON) configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use scaffold_config::Config;
/// use scaffold_config::persistence::read_config_file;
///
/// # fn main() -> scaffold_config::Result<()> {
/// let config: Config = read_config_file("scaffold.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}
