//! Schema command implementation.
//!
//! Prints CREATE/DROP/TRUNCATE statements for every family table.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use sar_importer::config::Config;
use sar_importer::schema::{render_schema, SchemaAction};

pub fn command_schema(
    action: SchemaAction,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.catalog();
    let script = render_schema(&catalog, action, config.table_prefix());
    debug!("Rendered {:?} DDL for {} families", action, catalog.len());

    match output {
        Some(path) if path.to_string_lossy() != "-" => {
            fs::write(&path, script)?;
            println!("✅ Schema written to: {}", path.display());
        }
        _ => print!("{}", script),
    }

    Ok(())
}
