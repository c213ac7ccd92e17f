mod types;

pub use types::*;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name used for the per-user and system-wide config files.
pub const CONFIG_FILE_NAME: &str = "tmdb2mkvtags.toml";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let config = read_config(path)?;
    validate_config(&config, &[path.to_path_buf()])?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(
            format!("Failed to read config file {}: {e}", path.display()),
            vec![path.to_path_buf()],
        )
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| {
        Error::config(
            format!("Failed to parse config file {}: {e}", path.display()),
            vec![path.to_path_buf()],
        )
    })?;

    Ok(config)
}

/// Load config from an explicit path, or from the first default location that exists.
///
/// There is no built-in fallback: a run without an API token cannot proceed.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let candidates = default_paths();
    match find_config(None) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            let config = read_config(&path)?;
            validate_config(&config, &candidates)?;
            Ok(config)
        }
        None => Err(Error::config("API token is not set", candidates)),
    }
}

/// The file a run would read: `custom_path` if given, else the first
/// existing default path.
pub fn find_config(custom_path: Option<&Path>) -> Option<PathBuf> {
    match custom_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_paths().into_iter().find(|path| path.exists()),
    }
}

/// Candidate config locations in lookup order.
///
/// The first entry sits next to the executable, then the XDG user config
/// directory, then the system-wide file.
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        let mut adjacent = exe.into_os_string();
        adjacent.push(".toml");
        paths.push(PathBuf::from(adjacent));
    }

    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => paths.push(PathBuf::from(xdg).join(CONFIG_FILE_NAME)),
        _ => {
            let home = shellexpand::tilde("~/.config");
            if home != "~/.config" {
                paths.push(Path::new(home.as_ref()).join(CONFIG_FILE_NAME));
            }
        }
    }

    paths.push(Path::new("/etc").join(CONFIG_FILE_NAME));
    paths
}

/// Validate configuration
fn validate_config(config: &Config, tried: &[PathBuf]) -> Result<()> {
    if config.api_token.trim().is_empty() {
        return Err(Error::config("API token is not set", tried.to_vec()));
    }

    if config.api_base_url.trim().is_empty() {
        return Err(Error::config("api_base_url cannot be empty", tried.to_vec()));
    }

    Ok(())
}
