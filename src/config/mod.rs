pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".kreport.toml";

/// Get the global config file path (~/.kreport.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.kreport.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Read and parse one config file.
pub fn read_config(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let config =
        toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit file must load. Otherwise the local config in `dir` is tried
/// first, then the global one; unreadable files fall through to defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<types::Config> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return read_config(path);
    }

    let candidates = std::iter::once(local_config_path(dir)).chain(global_config_path());
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match read_config(&candidate) {
            Ok(config) => {
                log::debug!("loaded config from {}", candidate.display());
                return Ok(config);
            }
            Err(e) => log::warn!("ignoring {}: {}", candidate.display(), e),
        }
    }

    Ok(types::Config::default())
}
