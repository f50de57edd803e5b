//! Configuration management for sar-importer.
//!
//! This module handles loading and validating the importer configuration.
//! It supports YAML, JSON, and TOML formats; CLI overrides are applied by
//! the binary on top of what is loaded here.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::Catalog;
use crate::encoder::DEFAULT_TABLE_PREFIX;
use crate::error::ImportError;

// Default configuration constants
pub const DEFAULT_MODE: &str = "console";
pub const DEFAULT_PG_PORT: u16 = 5432;

/// Configuration format options for output
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Output sink selected by `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    Console,
    Relational,
}

impl SinkMode {
    /// Parses the configured mode. A missing mode means console output.
    pub fn parse(mode: Option<&str>) -> Result<Self, ImportError> {
        match mode.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
            None | Some("console") | Some("stdout") => Ok(SinkMode::Console),
            Some("relational") | Some("postgresql") | Some("postgres") => Ok(SinkMode::Relational),
            Some(other) => Err(ImportError::Configuration(format!(
                "Invalid mode '{}', expected 'console' or 'relational'",
                other
            ))),
        }
    }
}

/// PostgreSQL connection parameters.
///
/// Either `url` or the individual fields may be given; `url` wins when both are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasourceConfig {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    #[serde(alias = "database")]
    pub dbname: Option<String>,
    #[serde(alias = "username")]
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DatasourceConfig {
    /// Builds sqlx connection options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ImportError> {
        if let Some(url) = &self.url {
            return url.parse::<PgConnectOptions>().map_err(|e| {
                ImportError::Configuration(format!("Invalid datasource url: {}", e))
            });
        }

        let mut options = PgConnectOptions::new()
            .host(self.host.as_deref().unwrap_or("localhost"))
            .port(self.port.unwrap_or(DEFAULT_PG_PORT));
        if let Some(dbname) = &self.dbname {
            options = options.database(dbname);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

/// Importer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// "console" | "relational" (aliases "stdout" / "postgresql")
    pub mode: Option<String>,

    #[serde(alias = "table-prefix")]
    pub table_prefix: Option<String>,

    /// Include the pwr_* (sar -m) families
    #[serde(alias = "power-telemetry")]
    pub power_telemetry: Option<bool>,

    /// Threads used to render statements (0 = auto, 1 = serial)
    pub parallelism: Option<usize>,

    /// Print the SQL script instead of executing it
    #[serde(alias = "dry-run")]
    pub dry_run: Option<bool>,

    // Logging
    pub log_level: Option<String>,

    // Tables last so TOML output stays valid
    /// Hostname -> address used for the ip_addr column
    #[serde(default)]
    pub hosts: BTreeMap<String, String>,

    pub datasource: Option<DatasourceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Some(DEFAULT_MODE.into()),
            table_prefix: Some(DEFAULT_TABLE_PREFIX.into()),
            power_telemetry: Some(true),
            parallelism: Some(1),
            dry_run: Some(false),
            log_level: Some("info".into()),
            hosts: BTreeMap::new(),
            datasource: None,
        }
    }
}

impl Config {
    pub fn sink_mode(&self) -> Result<SinkMode, ImportError> {
        SinkMode::parse(self.mode.as_deref())
    }

    pub fn table_prefix(&self) -> &str {
        self.table_prefix.as_deref().unwrap_or(DEFAULT_TABLE_PREFIX)
    }

    /// Catalog variant selected by `power_telemetry`.
    pub fn catalog(&self) -> Catalog {
        if self.power_telemetry.unwrap_or(true) {
            Catalog::builtin()
        } else {
            Catalog::without_power_telemetry()
        }
    }
}

/// Validate effective config (used by --check-config and before an import)
pub fn validate_effective_config(cfg: &Config) -> Result<(), ImportError> {
    let mode = cfg.sink_mode()?;

    if mode == SinkMode::Relational && !cfg.dry_run.unwrap_or(false) {
        match &cfg.datasource {
            None => {
                return Err(ImportError::Configuration(
                    "mode is relational but no datasource is configured".into(),
                ));
            }
            Some(ds) => {
                ds.connect_options()?;
            }
        }
    }

    let prefix = cfg.table_prefix();
    if prefix.is_empty()
        || !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ImportError::Configuration(format!(
            "Invalid table_prefix '{}', only [A-Za-z0-9_] allowed",
            prefix
        )));
    }

    for (host, addr) in &cfg.hosts {
        if addr.trim().is_empty() {
            return Err(ImportError::Configuration(format!(
                "Host '{}' maps to an empty address",
                host
            )));
        }
    }

    Ok(())
}

/// Configuration loading with multiple format support
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = if let Some(p) = path {
        PathBuf::from(p)
    } else {
        // Try default locations
        let defaults = [
            "/etc/sar-importer/config.yaml",
            "/etc/sar-importer/config.yml",
            "/etc/sar-importer/config.json",
            "./sar-importer.yaml",
            "./sar-importer.yml",
            "./sar-importer.json",
        ];

        defaults
            .iter()
            .find(|p| Path::new(p).exists())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(""))
    };

    if path.to_string_lossy().is_empty() {
        return Ok(Config::default());
    }
    if !path.exists() {
        return Err(format!("Config file not found: {}", path.display()).into());
    }

    let content = fs::read_to_string(&path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config = serde_json::from_str(&content)?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(&content)?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML
            let config: Config = serde_yaml::from_str(&content)?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Renders configuration in the requested format
pub fn render_config(
    config: &Config,
    format: ConfigFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_config(config, format)?);
    Ok(())
}
