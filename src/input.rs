//! Tab-delimited sadf input.
//!
//! Each line carries exactly six columns, as produced by `sadf -p`:
//! `hostname  interval  timestamp  device  field  value`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::ImportError;

/// Number of columns in a sadf record.
pub const ROW_ARITY: usize = 6;

/// One narrow sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub hostname: String,
    pub interval: u64,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Device or instance name, `-` for system-wide samples.
    pub device: String,
    pub field: String,
    pub value: String,
    /// 1-based source line, 0 for rows built in code.
    pub line: usize,
}

impl RawRow {
    pub fn new(
        hostname: impl Into<String>,
        interval: u64,
        timestamp: i64,
        device: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            interval,
            timestamp,
            device: device.into(),
            field: field.into(),
            value: value.into(),
            line: 0,
        }
    }

    /// Builds a row from already split columns.
    pub fn from_columns<S: AsRef<str>>(columns: &[S], line: usize) -> Result<Self, ImportError> {
        if columns.len() != ROW_ARITY {
            return Err(ImportError::malformed(
                line,
                format!("expected {} columns, found {}", ROW_ARITY, columns.len()),
            ));
        }

        let col = |i: usize| columns[i].as_ref().trim();

        let hostname = col(0);
        if hostname.is_empty() {
            return Err(ImportError::malformed(line, "empty hostname"));
        }
        let interval = col(1)
            .parse::<u64>()
            .map_err(|e| ImportError::malformed(line, format!("invalid interval '{}': {}", col(1), e)))?;
        let timestamp = col(2)
            .parse::<i64>()
            .map_err(|e| ImportError::malformed(line, format!("invalid timestamp '{}': {}", col(2), e)))?;
        let field = col(4);
        if field.is_empty() {
            return Err(ImportError::malformed(line, "empty field name"));
        }

        Ok(Self {
            hostname: hostname.to_string(),
            interval,
            timestamp,
            device: col(3).to_string(),
            field: field.to_string(),
            value: col(5).to_string(),
            line,
        })
    }
}

/// Reads rows from a file, or from stdin when `path` is `-`.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    if path.as_os_str() == "-" {
        debug!("Reading sadf rows from stdin");
        return read_rows(io::stdin().lock());
    }

    let file = File::open(path).map_err(|e| {
        ImportError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open data file {}: {}", path.display(), e),
        ))
    })?;
    let rows = read_rows(file)?;
    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Reads every row from a tab-delimited source.
///
/// Blank lines and `#` comment lines are skipped. Any other line must have
/// exactly six columns with an integer interval and timestamp.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(rows.len() + 1);

        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = record.iter().collect();
        rows.push(RawRow::from_columns(&columns, line)?);
    }

    Ok(rows)
}
