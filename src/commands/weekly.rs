//! Weekly table command implementation.

use std::path::{Path, PathBuf};

use anyhow::Context;

use sar_importer::report::{default_file_name, write_weekly_table};

pub fn command_weekly_table(
    rows: &Path,
    year: i32,
    week: u32,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| PathBuf::from(default_file_name(year, week)));

    write_weekly_table(rows, year, week, &output).with_context(|| {
        format!(
            "Failed to build weekly table from {} into {}",
            rows.display(),
            output.display()
        )
    })?;

    println!("✅ Weekly table written to: {}", output.display());
    Ok(())
}
