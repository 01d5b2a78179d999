//! Layered settings: command-line flags > environment > config file > defaults.

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use brawldex_scraper::DEFAULT_API_URL;

use crate::error::CliError;

pub(crate) const DEFAULT_DATA_DIR: &str = "data";
pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub(crate) const DEFAULT_STATIC_DIR: &str = "static";

pub(crate) const ENV_DATA_DIR: &str = "BRAWLDEX_DATA_DIR";
pub(crate) const ENV_BIND: &str = "BRAWLDEX_BIND";
pub(crate) const ENV_STATIC_DIR: &str = "BRAWLDEX_STATIC_DIR";
pub(crate) const ENV_API_URL: &str = "BRAWLDEX_API_URL";

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    refresh: RefreshConfig,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ServerConfig {
    data_dir: Option<PathBuf>,
    bind: Option<String>,
    static_dir: Option<PathBuf>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct RefreshConfig {
    api_url: Option<String>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    /// Given on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved value plus its provenance.
#[derive(Debug, Clone)]
pub(crate) struct Setting<T> {
    pub value: T,
    pub source: SettingSource,
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub(crate) struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub bind: Option<SocketAddr>,
    pub static_dir: Option<PathBuf>,
    pub api_url: Option<String>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub data_dir: Setting<PathBuf>,
    pub bind: Setting<SocketAddr>,
    pub static_dir: Setting<PathBuf>,
    pub api_url: Setting<String>,
}

impl Settings {
    /// Resolve settings from the process environment and the config file.
    ///
    /// `config` replaces the default config file location when given.
    pub(crate) fn load(overrides: &Overrides, config: Option<&Path>) -> Result<Self, CliError> {
        let file = match config {
            Some(path) => load_config_file(path)?.ok_or_else(|| {
                CliError::config(format!("Config file not found: {}", path.display()))
            })?,
            None => match config_path() {
                Some(path) => load_config_file(&path)?.unwrap_or_default(),
                None => ConfigFile::default(),
            },
        };
        Self::resolve(overrides, |var| std::env::var(var).ok(), file)
    }

    pub(crate) fn resolve(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
        file: ConfigFile,
    ) -> Result<Self, CliError> {
        let data_dir = pick(
            overrides.data_dir.clone(),
            env(ENV_DATA_DIR).map(PathBuf::from),
            ENV_DATA_DIR,
            file.server.data_dir,
        )
        .unwrap_or_else(|| default(PathBuf::from(DEFAULT_DATA_DIR)));

        let bind_raw = pick(
            overrides.bind.map(|a| a.to_string()),
            env(ENV_BIND),
            ENV_BIND,
            file.server.bind,
        )
        .unwrap_or_else(|| default(DEFAULT_BIND.to_string()));
        let bind = Setting {
            value: bind_raw.value.parse::<SocketAddr>().map_err(|e| {
                CliError::config(format!(
                    "Invalid bind address '{}' ({}): {e}",
                    bind_raw.value, bind_raw.source
                ))
            })?,
            source: bind_raw.source,
        };

        let static_dir = pick(
            overrides.static_dir.clone(),
            env(ENV_STATIC_DIR).map(PathBuf::from),
            ENV_STATIC_DIR,
            file.server.static_dir,
        )
        .unwrap_or_else(|| default(PathBuf::from(DEFAULT_STATIC_DIR)));

        let api_url = pick(
            overrides.api_url.clone(),
            env(ENV_API_URL),
            ENV_API_URL,
            file.refresh.api_url,
        )
        .unwrap_or_else(|| default(DEFAULT_API_URL.to_string()));

        Ok(Self {
            data_dir,
            bind,
            static_dir,
            api_url,
        })
    }
}

fn pick<T>(
    flag: Option<T>,
    env: Option<T>,
    env_var: &'static str,
    file: Option<T>,
) -> Option<Setting<T>> {
    flag.map(|value| Setting {
        value,
        source: SettingSource::Flag,
    })
    .or_else(|| {
        env.map(|value| Setting {
            value,
            source: SettingSource::EnvVar(env_var),
        })
    })
    .or_else(|| {
        file.map(|value| Setting {
            value,
            source: SettingSource::ConfigFile,
        })
    })
}

fn default<T>(value: T) -> Setting<T> {
    Setting {
        value,
        source: SettingSource::Default,
    }
}

/// Return the path to the default config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("brawldex").join("config.toml"))
}

/// Read a config file. A missing file is `Ok(None)`; a malformed one is an error.
fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, CliError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let config: ConfigFile = toml::from_str(&content)
        .map_err(|e| CliError::config(format!("Invalid config file {}: {e}", path.display())))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
