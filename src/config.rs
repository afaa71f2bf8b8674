use crate::error::{WdayError, WdayResult};
use crate::locale::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Default config file location, `<home>/.wday.toml`.
pub fn default_config_path() -> WdayResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".wday.toml"))
        .ok_or_else(|| WdayError::Config("no home directory available on this platform".into()))
}

/// Use the explicitly requested config path when given, otherwise the
/// default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> WdayResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

impl Config {
    /// Load the config file, creating it with defaults when missing.
    pub fn load_or_init(path: &Path) -> WdayResult<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            log::info!("created default config at {}", path.display());
            return Ok(config);
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|err| WdayError::Config(format!("{}: {err}", path.display())))
    }

    pub fn save(&self, path: &Path) -> WdayResult<()> {
        let raw = toml::to_string(self)
            .map_err(|err| WdayError::Config(format!("serialize config: {err}")))?;
        fs::write(path, raw)?;
        Ok(())
    }
}
