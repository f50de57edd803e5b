//! Pivoting narrow samples into wide records.
//!
//! Each family owns a [`FamilyAccumulator`] keyed by (hostname, timestamp,
//! device). Samples land in the field map of their key, and
//! [`FamilyAccumulator::flatten`] later emits one [`FlatRecord`] per key.

use std::collections::BTreeMap;

use ahash::AHashMap as HashMap;
use tracing::{debug, trace};

use crate::catalog::{Catalog, FamilyDef};
use crate::classifier::Classifier;
use crate::error::ImportError;
use crate::input::RawRow;

/// Reserved record field holding the source hostname.
pub const FIELD_HOSTNAME: &str = "hostname";
/// Reserved record field holding the sample timestamp.
pub const FIELD_TIMESTAMP: &str = "timestamp";
/// Reserved record field holding the device name.
pub const FIELD_DEV_NAME: &str = "dev_name";

/// Grouping key of one wide record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub hostname: String,
    pub timestamp: i64,
    pub device: String,
}

impl RecordKey {
    fn of(row: &RawRow) -> Self {
        Self {
            hostname: row.hostname.clone(),
            timestamp: row.timestamp,
            device: row.device.clone(),
        }
    }
}

/// One (host, timestamp, device) observation of a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    pub hostname: String,
    pub timestamp: i64,
    /// Set only when the family has a device dimension.
    pub dev_name: Option<String>,
    /// Raw sample values keyed by sadf field name.
    pub values: HashMap<String, String>,
}

impl FlatRecord {
    /// Looks up a value by field name, including the reserved fields.
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            FIELD_HOSTNAME => Some(self.hostname.clone()),
            FIELD_TIMESTAMP => Some(self.timestamp.to_string()),
            FIELD_DEV_NAME => self.dev_name.clone(),
            _ => self.values.get(name).cloned(),
        }
    }

    /// Number of fields, reserved ones included.
    pub fn field_count(&self) -> usize {
        self.values.len() + 2 + usize::from(self.dev_name.is_some())
    }
}

/// Samples of one family for the whole run.
#[derive(Debug, Clone)]
pub struct FamilyAccumulator {
    family: FamilyDef,
    dataset: BTreeMap<RecordKey, HashMap<String, String>>,
}

impl FamilyAccumulator {
    pub fn new(family: FamilyDef) -> Self {
        Self {
            family,
            dataset: BTreeMap::new(),
        }
    }

    pub fn family(&self) -> &FamilyDef {
        &self.family
    }

    /// Stores a sample. A repeated (host, timestamp, device, field) overwrites
    /// the earlier value.
    pub fn add(&mut self, row: &RawRow) -> Result<(), ImportError> {
        let field = self.family.field(&row.field).ok_or_else(|| {
            ImportError::malformed(
                row.line,
                format!(
                    "field '{}' is not part of family '{}'",
                    row.field, self.family.name
                ),
            )
        })?;

        if !field.kind.admits(&row.value) {
            return Err(ImportError::malformed(
                row.line,
                format!(
                    "value '{}' of field '{}' is not a valid {}",
                    row.value, row.field, field.kind
                ),
            ));
        }

        let previous = self
            .dataset
            .entry(RecordKey::of(row))
            .or_default()
            .insert(row.field.clone(), row.value.clone());

        if let Some(previous) = previous {
            trace!(
                "Overwriting {}.{} for {}@{} ({} -> {})",
                self.family.name,
                row.field,
                row.hostname,
                row.timestamp,
                previous,
                row.value
            );
        }
        Ok(())
    }

    /// Number of distinct (host, timestamp, device) keys.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Emits one record per key, ordered by host, timestamp and device.
    /// Does not consume or modify the accumulator.
    pub fn flatten(&self) -> impl Iterator<Item = FlatRecord> + '_ {
        let with_device = self.family.has_device_dimension();
        self.dataset.iter().map(move |(key, values)| FlatRecord {
            hostname: key.hostname.clone(),
            timestamp: key.timestamp,
            dev_name: with_device.then(|| key.device.clone()),
            values: values.clone(),
        })
    }
}

/// Owns one accumulator per catalog family, in catalog order.
#[derive(Debug, Clone)]
pub struct Aggregator {
    accumulators: Vec<FamilyAccumulator>,
}

impl Aggregator {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            accumulators: catalog
                .families()
                .iter()
                .copied()
                .map(FamilyAccumulator::new)
                .collect(),
        }
    }

    /// Adds a row to the named family.
    pub fn add(&mut self, family: &str, row: &RawRow) -> Result<(), ImportError> {
        self.accumulator_mut(family)
            .ok_or_else(|| ImportError::UnknownFamily(family.to_string()))?
            .add(row)
    }

    /// Classifies and adds a row. Returns the accepting family, or `None`
    /// when the row was dropped.
    pub fn ingest(
        &mut self,
        classifier: &Classifier,
        row: &RawRow,
    ) -> Result<Option<&'static str>, ImportError> {
        match classifier.classify(row) {
            Some(family) => {
                let name = family.name;
                self.add(name, row)?;
                Ok(Some(name))
            }
            None => Ok(None),
        }
    }

    pub fn accumulator(&self, family: &str) -> Option<&FamilyAccumulator> {
        self.accumulators.iter().find(|a| a.family.name == family)
    }

    fn accumulator_mut(&mut self, family: &str) -> Option<&mut FamilyAccumulator> {
        self.accumulators
            .iter_mut()
            .find(|a| a.family.name == family)
    }

    pub fn accumulators(&self) -> &[FamilyAccumulator] {
        &self.accumulators
    }

    /// Flattens one family. Unknown families yield an error.
    pub fn flatten(&self, family: &str) -> Result<Vec<FlatRecord>, ImportError> {
        self.accumulator(family)
            .map(|a| a.flatten().collect())
            .ok_or_else(|| ImportError::UnknownFamily(family.to_string()))
    }

    /// Total number of wide records across all families.
    pub fn record_count(&self) -> usize {
        self.accumulators.iter().map(FamilyAccumulator::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulators.iter().all(FamilyAccumulator::is_empty)
    }

    /// Logs the per-family record counts at debug level.
    pub fn log_summary(&self) {
        for acc in self.accumulators.iter().filter(|a| !a.is_empty()) {
            debug!("Family {}: {} records", acc.family.name, acc.len());
        }
    }
}
