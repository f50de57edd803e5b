//! End-to-end import run: classify, aggregate, write.

use std::io::Write;
use std::time::Instant;

use ahash::AHashMap as HashMap;
use tracing::{debug, info};

use crate::aggregator::Aggregator;
use crate::classifier::Classifier;
use crate::config::{validate_effective_config, Config};
use crate::error::ImportError;
use crate::input::RawRow;
use crate::sink::{WriteSummary, Writer};

/// Row counts gathered while aggregating.
#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    pub rows_read: usize,
    pub rows_accepted: usize,
    pub rows_dropped: usize,
    /// Dropped rows per field name.
    pub dropped_fields: HashMap<String, usize>,
}

/// Result of a complete run.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub ingest: IngestStats,
    pub written: WriteSummary,
}

/// Classifier plus writer for one run.
#[derive(Debug, Clone)]
pub struct Importer {
    classifier: Classifier,
    writer: Writer,
}

impl Importer {
    pub fn new(classifier: Classifier, writer: Writer) -> Self {
        Self { classifier, writer }
    }

    /// Validates the configuration and prepares the catalog and writer.
    /// Nothing is read or written yet.
    pub fn from_config(config: &Config) -> Result<Self, ImportError> {
        validate_effective_config(config)?;

        let writer = Writer::from_config(config)?;
        let catalog = config.catalog();
        debug!("Using catalog with {} families", catalog.len());

        Ok(Self::new(Classifier::new(catalog)?, writer))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classifies and accumulates every row. Stops at the first malformed row.
    pub fn aggregate<I>(&self, rows: I) -> Result<(Aggregator, IngestStats), ImportError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut aggregator = Aggregator::new(self.classifier.catalog());
        let mut stats = IngestStats::default();

        for row in rows {
            stats.rows_read += 1;
            match aggregator.ingest(&self.classifier, &row)? {
                Some(_) => stats.rows_accepted += 1,
                None => {
                    stats.rows_dropped += 1;
                    *stats.dropped_fields.entry(row.field).or_default() += 1;
                }
            }
        }

        Ok((aggregator, stats))
    }

    /// Runs the whole import. Text output goes to `out`.
    pub async fn run<I>(&self, rows: I, out: &mut dyn Write) -> Result<ImportSummary, ImportError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let start = Instant::now();
        let (aggregator, ingest) = self.aggregate(rows)?;
        info!(
            "Aggregated {} rows ({} accepted, {} dropped) into {} records",
            ingest.rows_read,
            ingest.rows_accepted,
            ingest.rows_dropped,
            aggregator.record_count()
        );
        if !ingest.dropped_fields.is_empty() {
            debug!("Dropped fields: {:?}", ingest.dropped_fields);
        }
        aggregator.log_summary();

        let written = self.writer.write(&aggregator, out).await?;
        info!(
            "Import finished in {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(ImportSummary { ingest, written })
    }
}

/// Convenience entry point: build an [`Importer`] from `config` and run it.
pub async fn run(
    rows: Vec<RawRow>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<ImportSummary, ImportError> {
    Importer::from_config(config)?.run(rows, out).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawRow> {
        vec![
            RawRow::new("host1", 10, 1_700_000_000, "-", "tps", "5.00"),
            RawRow::new("host1", 10, 1_700_000_000, "dev8-0", "tps", "3.50"),
            RawRow::new("host1", 10, 1_700_000_000, "-", "unknown-metric", "1"),
        ]
    }

    #[test]
    fn test_aggregate_counts_rows() {
        let importer = Importer::from_config(&Config::default()).unwrap();
        let (agg, stats) = importer.aggregate(rows()).unwrap();

        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.rows_accepted, 2);
        assert_eq!(stats.rows_dropped, 1);
        assert_eq!(stats.dropped_fields.get("unknown-metric"), Some(&1));
        assert_eq!(agg.record_count(), 2);
    }

    #[test]
    fn test_malformed_value_aborts() {
        let importer = Importer::from_config(&Config::default()).unwrap();
        let mut bad = rows();
        bad.push(RawRow::new("host1", 10, 1_700_000_000, "-", "kbmemfree", "n/a"));
        assert!(matches!(
            importer.aggregate(bad),
            Err(ImportError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_unknown_mode_fails_before_rows() {
        let cfg = Config {
            mode: Some("kafka".into()),
            ..Config::default()
        };
        assert!(matches!(
            Importer::from_config(&cfg),
            Err(ImportError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_run_console() {
        let mut out = Vec::new();
        let summary = run(rows(), &Config::default(), &mut out).await.unwrap();
        assert_eq!(summary.written.records, 2);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
