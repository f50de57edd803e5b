//! sar-importer library
//!
//! Imports sysstat activity samples (as produced by `sadf -p`) into one
//! table per metric family. Each input row carries a single
//! `(hostname, interval, timestamp, device, field, value)` sample; rows are
//! classified into a family, pivoted into wide records keyed by
//! `(hostname, timestamp, device)` and written either as text lines or as
//! PostgreSQL `INSERT` statements inside one transaction.
//!
//! # Usage
//!
//! ```rust
//! use sar_importer::{Config, Importer, RawRow};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), sar_importer::ImportError> {
//! let rows = vec![
//!     RawRow::new("host1", 600, 1_700_000_000, "-", "tps", "5.00"),
//!     RawRow::new("host1", 600, 1_700_000_000, "dev8-0", "tps", "3.50"),
//! ];
//!
//! let importer = Importer::from_config(&Config::default())?;
//! let mut out = Vec::new();
//! let summary = importer.run(rows, &mut out).await?;
//! assert_eq!(summary.written.records, 2);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod error;
pub mod importer;
pub mod input;
pub mod report;
pub mod schema;
pub mod sink;

// Re-export main types for convenience
pub use aggregator::{Aggregator, FamilyAccumulator, FlatRecord, RecordKey};
pub use catalog::{Catalog, DeviceGuard, FamilyDef, FieldDef, ValueKind, NO_DEVICE};
pub use classifier::Classifier;
pub use config::{Config, ConfigFormat, DatasourceConfig, SinkMode};
pub use encoder::{HostDirectory, InsertStatement, RecordEncoder, SqlValue};
pub use error::ImportError;
pub use importer::{run, ImportSummary, Importer, IngestStats};
pub use input::RawRow;
pub use schema::SchemaAction;
pub use sink::{ConsoleSink, RelationalSink, WriteSummary, Writer};
