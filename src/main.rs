//! sar-importer - version 0.1.0
//!
//! Imports sysstat activity data with tracing logging.
//! This is the main entry point that resolves configuration and dispatches subcommands.

mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};

use cli::{effective_log_level, resolve_config, Args, Commands, LogLevel};
use commands::{
    command_check, command_config, command_families, command_generate_testdata, command_import,
    command_schema, command_weekly_table,
};
use sar_importer::config::{show_config, validate_effective_config, Config};

/// Initializes tracing logging subsystem with the effective log level.
///
/// Logs go to stderr; stdout carries console records and generated SQL.
fn setup_logging(config: &Config, args: &Args) {
    let level = effective_log_level(args, config);
    let max_level = match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return;
    }

    debug!("Logging initialized with level: {:?}", level);
}

/// Configures the global rayon pool (0 = rayon's default).
fn setup_thread_pool(config: &Config) {
    if let Some(threads) = config.parallelism {
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .unwrap_or_else(|e| error!("Failed to set rayon thread pool: {}", e));
            debug!("Rayon thread pool configured with {} threads", threads);
        }
    }
}

async fn run_command(
    command: &Commands,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Import { data_file, .. } => command_import(data_file, config).await,

        Commands::Schema { action, output } => command_schema(*action, output.clone(), config),

        Commands::Families { verbose, family } => {
            command_families(*verbose, family.clone(), config)
        }

        Commands::Check => command_check(config),

        Commands::Config {
            output,
            format,
            commented,
        } => command_config(output.clone(), format.clone(), *commented),

        Commands::GenerateTestdata {
            output,
            hosts,
            samples,
            interval,
        } => command_generate_testdata(output.clone(), *hosts, *samples, *interval),

        Commands::WeeklyTable {
            rows,
            year,
            week,
            output,
        } => command_weekly_table(rows, *year, *week, output.clone()),
    }
}

/// Main application entry point.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    setup_logging(&config, &args);

    if args.check_config {
        if let Err(e) = validate_effective_config(&config) {
            eprintln!("❌ Configuration invalid: {}", e);
            std::process::exit(1);
        }
        println!("✅ Configuration is valid");
        return Ok(());
    }

    if args.show_config {
        return show_config(&config, args.config_format.clone());
    }

    let Some(command) = &args.command else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    setup_thread_pool(&config);
    info!("Starting sar-importer");

    if let Err(e) = run_command(command, &config).await {
        error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
