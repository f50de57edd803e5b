//! Output sinks.
//!
//! [`Writer`] is built once from the configuration, before any row is read,
//! and consumes the finished [`Aggregator`]. The relational sink writes the
//! whole run inside one transaction: either every INSERT commits or none do.

use std::io::Write;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Postgres, Transaction};
use tracing::{debug, error, info, warn};

use crate::aggregator::Aggregator;
use crate::config::{Config, SinkMode};
use crate::encoder::{HostDirectory, InsertStatement, RecordEncoder, SqlValue};
use crate::error::ImportError;

/// Counts reported by a sink after a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Families with at least one record.
    pub families: usize,
    pub records: usize,
}

/// Prints records as text lines.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    encoder: RecordEncoder,
}

impl ConsoleSink {
    pub fn new(encoder: RecordEncoder) -> Self {
        Self { encoder }
    }

    pub fn write(
        &self,
        aggregator: &Aggregator,
        out: &mut dyn Write,
    ) -> Result<WriteSummary, ImportError> {
        let mut summary = WriteSummary::default();
        for acc in aggregator.accumulators() {
            if acc.is_empty() {
                continue;
            }
            summary.families += 1;
            for record in acc.flatten() {
                writeln!(out, "{}", self.encoder.encode_line(acc.family(), &record))?;
                summary.records += 1;
            }
        }
        out.flush()?;
        Ok(summary)
    }
}

/// Inserts records into PostgreSQL, one table per family.
#[derive(Debug, Clone)]
pub struct RelationalSink {
    encoder: RecordEncoder,
    connect_options: Option<PgConnectOptions>,
    parallel: bool,
}

impl RelationalSink {
    /// Sink that executes against the given database.
    pub fn new(encoder: RecordEncoder, connect_options: PgConnectOptions, parallel: bool) -> Self {
        Self {
            encoder,
            connect_options: Some(connect_options),
            parallel,
        }
    }

    /// Sink that only prints the SQL script.
    pub fn dry_run(encoder: RecordEncoder, parallel: bool) -> Self {
        Self {
            encoder,
            connect_options: None,
            parallel,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.connect_options.is_none()
    }

    /// Renders the run as a `BEGIN; ... COMMIT;` script.
    pub fn write_script(
        &self,
        aggregator: &Aggregator,
        out: &mut dyn Write,
    ) -> Result<WriteSummary, ImportError> {
        let statements = self.encoder.encode_all(aggregator, self.parallel)?;
        let summary = summarize(&statements);

        writeln!(out, "BEGIN;")?;
        for stmt in statements.iter().flatten() {
            writeln!(out, "{}", stmt.to_sql())?;
        }
        writeln!(out, "COMMIT;")?;
        out.flush()?;
        Ok(summary)
    }

    /// Executes every INSERT in a single transaction.
    pub async fn write(&self, aggregator: &Aggregator) -> Result<WriteSummary, ImportError> {
        let Some(options) = &self.connect_options else {
            return Err(ImportError::Configuration(
                "relational sink has no datasource".into(),
            ));
        };

        let statements = self.encoder.encode_all(aggregator, self.parallel)?;
        let summary = summarize(&statements);
        if summary.records == 0 {
            info!("Nothing to insert");
            return Ok(summary);
        }

        let mut conn = PgConnection::connect_with(options).await?;
        debug!("Connected to PostgreSQL");

        let mut tx = conn.begin().await?;
        match execute_all(&mut tx, &statements).await {
            Ok(()) => {
                tx.commit().await?;
                info!(
                    "Committed {} records into {} tables",
                    summary.records, summary.families
                );
                Ok(summary)
            }
            Err(e) => {
                error!("Insert failed, rolling back: {}", e);
                if let Err(rb) = tx.rollback().await {
                    warn!("Rollback failed: {}", rb);
                }
                Err(e)
            }
        }
    }
}

async fn execute_all(
    tx: &mut Transaction<'_, Postgres>,
    statements: &[Vec<InsertStatement>],
) -> Result<(), ImportError> {
    for family in statements.iter().filter(|f| !f.is_empty()) {
        debug!("Inserting {} rows into {}", family.len(), family[0].table);

        for stmt in family {
            let sql = stmt.to_parameterized();
            let mut query = sqlx::query(&sql);
            for value in &stmt.values {
                query = match value {
                    SqlValue::Text(s) | SqlValue::Numeric(s) => query.bind(s.clone()),
                    SqlValue::Integer(i) => query.bind(*i),
                    SqlValue::EpochTimestamp(ts) => query.bind(*ts as f64),
                };
            }
            query.execute(&mut **tx).await.map_err(|e| {
                ImportError::Persistence(format!("{}: {}", stmt.table, e))
            })?;
        }
    }
    Ok(())
}

fn summarize(statements: &[Vec<InsertStatement>]) -> WriteSummary {
    WriteSummary {
        families: statements.iter().filter(|f| !f.is_empty()).count(),
        records: statements.iter().map(Vec::len).sum(),
    }
}

/// The configured output.
#[derive(Debug, Clone)]
pub enum Writer {
    Console(ConsoleSink),
    Relational(RelationalSink),
}

impl Writer {
    /// Builds the writer selected by `config.mode`. Fails on an unknown mode
    /// or an unusable datasource.
    pub fn from_config(config: &Config) -> Result<Self, ImportError> {
        let encoder = RecordEncoder::new(
            HostDirectory::new(config.hosts.clone()),
            config.table_prefix(),
        );
        let parallel = config.parallelism.unwrap_or(1) != 1;

        match config.sink_mode()? {
            SinkMode::Console => Ok(Writer::Console(ConsoleSink::new(encoder))),
            SinkMode::Relational if config.dry_run.unwrap_or(false) => {
                Ok(Writer::Relational(RelationalSink::dry_run(encoder, parallel)))
            }
            SinkMode::Relational => {
                let datasource = config.datasource.as_ref().ok_or_else(|| {
                    ImportError::Configuration(
                        "mode is relational but no datasource is configured".into(),
                    )
                })?;
                Ok(Writer::Relational(RelationalSink::new(
                    encoder,
                    datasource.connect_options()?,
                    parallel,
                )))
            }
        }
    }

    /// Writes the aggregated run. Text output (console lines or a dry-run
    /// script) goes to `out`.
    pub async fn write(
        &self,
        aggregator: &Aggregator,
        out: &mut dyn Write,
    ) -> Result<WriteSummary, ImportError> {
        match self {
            Writer::Console(sink) => sink.write(aggregator, out),
            Writer::Relational(sink) if sink.is_dry_run() => sink.write_script(aggregator, out),
            Writer::Relational(sink) => sink.write(aggregator).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::input::RawRow;

    fn sample_aggregator() -> Aggregator {
        let mut agg = Aggregator::new(&Catalog::builtin());
        agg.add("io", &RawRow::new("host1", 10, 1_700_000_000, "-", "tps", "5.00"))
            .unwrap();
        agg.add("disk", &RawRow::new("host1", 10, 1_700_000_000, "dev8-0", "tps", "3.50"))
            .unwrap();
        agg
    }

    #[test]
    fn test_console_sink_writes_one_line_per_record() {
        let mut out = Vec::new();
        let summary = ConsoleSink::default()
            .write(&sample_aggregator(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary, WriteSummary { families: 2, records: 2 });
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("io hostname=host1 timestamp=1700000000 tps=5.00"));
        assert!(text.contains("disk hostname=host1 timestamp=1700000000 dev_name=dev8-0 tps=3.50"));
    }

    #[test]
    fn test_dry_run_script_is_wrapped_in_transaction() {
        let sink = RelationalSink::dry_run(RecordEncoder::default(), false);
        let mut out = Vec::new();
        let summary = sink.write_script(&sample_aggregator(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(summary.records, 2);
        assert_eq!(lines.first(), Some(&"BEGIN;"));
        assert_eq!(lines.last(), Some(&"COMMIT;"));
        assert!(lines[1].starts_with("INSERT INTO sar_io "));
        assert!(lines[2].starts_with("INSERT INTO sar_disk "));
    }

    #[test]
    fn test_writer_rejects_unknown_mode() {
        let cfg = Config {
            mode: Some("carrier-pigeon".into()),
            ..Config::default()
        };
        assert!(matches!(
            Writer::from_config(&cfg),
            Err(ImportError::Configuration(_))
        ));
    }

    #[test]
    fn test_writer_relational_without_datasource() {
        let cfg = Config {
            mode: Some("postgresql".into()),
            ..Config::default()
        };
        assert!(Writer::from_config(&cfg).is_err());
    }

    fn unreachable_database() -> PgConnectOptions {
        // Nothing listens on port 1
        PgConnectOptions::new().host("127.0.0.1").port(1)
    }

    #[tokio::test]
    async fn test_connection_failure_is_persistence_error() {
        let sink = RelationalSink::new(RecordEncoder::default(), unreachable_database(), false);
        assert!(matches!(
            sink.write(&sample_aggregator()).await,
            Err(ImportError::Persistence(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_run_does_not_connect() {
        let sink = RelationalSink::new(RecordEncoder::default(), unreachable_database(), false);
        let summary = sink
            .write(&Aggregator::new(&Catalog::builtin()))
            .await
            .unwrap();
        assert_eq!(summary, WriteSummary::default());
    }

    #[tokio::test]
    async fn test_writer_console_mode() {
        let writer = Writer::from_config(&Config::default()).unwrap();
        let mut out = Vec::new();
        let summary = writer.write(&sample_aggregator(), &mut out).await.unwrap();
        assert_eq!(summary.records, 2);
    }
}
