//! CLI-owned configuration: a TOML file merged with `FRIDAY_*` env vars
//! through figment, translated to `fridayctl_core::AssistantConfig`.
//!
//! Core never sees these types -- it receives a pre-built
//! `AssistantConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use fridayctl_core::AssistantConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Device base URL, e.g. "http://friday.local:8000".
    pub device: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Loading & saving ────────────────────────────────────────────────

/// Path of the config file: `<platform config dir>/fridayctl/config.toml`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "fridayctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("fridayctl.toml"))
}

/// Load the config, falling back to defaults when no file exists or it
/// fails to parse (a parse failure is logged, not fatal).
pub fn load_config_or_default() -> Config {
    let figment = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("FRIDAY_").split("__"));

    figment.extract().unwrap_or_else(|err| {
        tracing::warn!("ignoring invalid config: {err}");
        Config::default()
    })
}

/// Write the config as TOML, creating parent directories as needed.
pub fn save_config(config: &Config) -> Result<PathBuf, CliError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let body = toml::to_string_pretty(config).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: e.to_string(),
    })?;
    std::fs::write(&path, body)?;
    Ok(path)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve flags + env + file into the core connection config.
///
/// Precedence: `--device` flag (clap also fills it from `FRIDAY_DEVICE`)
/// over the config file; same for the timeout.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<AssistantConfig, CliError> {
    let url_str = global
        .device
        .as_deref()
        .or(config.device.as_deref())
        .ok_or_else(|| CliError::NoDevice {
            path: config_path().display().to_string(),
        })?;

    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "device".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let timeout = global.timeout.unwrap_or(config.defaults.timeout);

    Ok(AssistantConfig::new(url).with_timeout(Duration::from_secs(timeout)))
}
