//! CLI arguments and subcommands for sar-importer.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, subcommands, and how CLI values are layered
//! over the loaded configuration.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sar_importer::config::{load_config, Config, ConfigFormat};
use sar_importer::schema::SchemaAction;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parses a `log_level` value from a config file.
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "sar-importer",
    about = "Imports sysstat sar data into per-family PostgreSQL tables",
    long_about = "Imports sysstat sar data into per-family PostgreSQL tables.\n\n\
                  Reads tab-separated `sadf -p` output, pivots the one-sample-per-row \
                  input into one wide record per host, timestamp and device, and \
                  writes the records either as text lines or as INSERT statements \
                  inside a single transaction.",
    version = "0.1.0",
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (overrides log_level from the config file)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,

    /// Table name prefix
    #[arg(long)]
    pub table_prefix: Option<String>,

    /// Exclude the power management (pwr_*) families
    #[arg(long)]
    pub no_power_telemetry: bool,

    /// Parallel rendering threads (0 = auto, 1 = serial)
    #[arg(long)]
    pub parallelism: Option<usize>,
}

/// Subcommands for additional functionality
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a sadf data file ("-" reads stdin)
    Import {
        /// Tab-separated sadf -p output
        data_file: PathBuf,

        /// Output mode: console or relational (overrides config)
        #[arg(short = 'm', long)]
        mode: Option<String>,

        /// Print the SQL script instead of executing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print DDL for every family table
    Schema {
        /// Statement kind
        #[arg(value_enum, default_value = "create")]
        action: SchemaAction,

        /// Output file path ("-" or omitted prints to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// List the metric families of the catalog
    Families {
        /// Show every field with its column and type
        #[arg(long)]
        verbose: bool,

        /// Filter by family name
        #[arg(short = 'f', long)]
        family: Option<String>,
    },

    /// Validate configuration and the family catalog
    Check,

    /// Generate configuration files
    Config {
        /// Output file path
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,

        /// Include comments and examples
        #[arg(long)]
        commented: bool,
    },

    /// Generate a synthetic sadf -p data file
    GenerateTestdata {
        /// Output file path ("-" prints to stdout)
        #[arg(short = 'o', long, default_value = "testdata.tsv")]
        output: PathBuf,

        /// Number of hosts
        #[arg(long, default_value_t = 2)]
        hosts: usize,

        /// Samples per host
        #[arg(long, default_value_t = 3)]
        samples: usize,

        /// Seconds between samples
        #[arg(long, default_value_t = 600)]
        interval: u64,
    },

    /// Write a weekly HTML table of per-day graph images
    WeeklyTable {
        /// YAML list of rows (name, prefix, optional detail)
        rows: PathBuf,

        /// ISO year
        #[arg(long)]
        year: i32,

        /// ISO week number
        #[arg(long)]
        week: u32,

        /// Output file path (default: YYYY-Www.html)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

/// Resolve the effective configuration (CLI > config file > defaults).
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    if let Some(level) = args.log_level {
        config.log_level = Some(format!("{:?}", level).to_lowercase());
    }
    if let Some(prefix) = &args.table_prefix {
        config.table_prefix = Some(prefix.clone());
    }
    if args.no_power_telemetry {
        config.power_telemetry = Some(false);
    }
    if let Some(threads) = args.parallelism {
        config.parallelism = Some(threads);
    }

    // Import-specific overrides
    if let Some(Commands::Import { mode, dry_run, .. }) = &args.command {
        if let Some(mode) = mode {
            config.mode = Some(mode.clone());
        }
        if *dry_run {
            config.dry_run = Some(true);
        }
    }

    Ok(config)
}

/// Effective log level: CLI flag, then config file, then info.
pub fn effective_log_level(args: &Args, config: &Config) -> LogLevel {
    args.log_level
        .or_else(|| config.log_level.as_deref().and_then(LogLevel::from_config))
        .unwrap_or(LogLevel::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_overrides() {
        let args = Args::parse_from([
            "sar-importer",
            "--no-config",
            "--table-prefix",
            "perf_",
            "import",
            "data.tsv",
            "--mode",
            "relational",
            "--dry-run",
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.mode.as_deref(), Some("relational"));
        assert_eq!(config.dry_run, Some(true));
        assert_eq!(config.table_prefix(), "perf_");
    }

    #[test]
    fn test_defaults_without_overrides() {
        let args = Args::parse_from(["sar-importer", "--no-config", "families"]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.mode.as_deref(), Some("console"));
        assert_eq!(config.power_telemetry, Some(true));
        assert_eq!(effective_log_level(&args, &config), LogLevel::Info);
    }

    #[test]
    fn test_log_level_precedence() {
        let args = Args::parse_from(["sar-importer", "--no-config", "--log-level", "debug"]);
        let mut config = resolve_config(&args).unwrap();
        assert_eq!(effective_log_level(&args, &config), LogLevel::Debug);

        let args = Args::parse_from(["sar-importer", "--no-config"]);
        config.log_level = Some("WARN".into());
        assert_eq!(effective_log_level(&args, &config), LogLevel::Warn);
    }

    #[test]
    fn test_schema_action_parse() {
        let args = Args::parse_from(["sar-importer", "schema", "truncate"]);
        assert!(matches!(
            args.command,
            Some(Commands::Schema {
                action: SchemaAction::Truncate,
                ..
            })
        ));
    }
}
