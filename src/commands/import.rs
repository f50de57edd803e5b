//! Import command implementation.
//!
//! Reads a sadf data file and hands the rows to the configured writer.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use sar_importer::config::Config;
use sar_importer::importer::Importer;
use sar_importer::input::read_rows_from_path;

/// Imports `data_file` ("-" for stdin) using `config`.
pub async fn command_import(
    data_file: &Path,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // Writer and catalog are validated before any input is read
    let importer = Importer::from_config(config)?;
    debug!(
        "Importer ready ({} families)",
        importer.classifier().catalog().len()
    );

    let rows = read_rows_from_path(data_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = importer.run(rows, &mut out).await?;
    out.flush()?;

    info!(
        "Imported {} records into {} families ({} of {} rows dropped)",
        summary.written.records,
        summary.written.families,
        summary.ingest.rows_dropped,
        summary.ingest.rows_read
    );

    Ok(())
}
