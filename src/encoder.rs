//! Rendering of flattened records for the output sinks.
//!
//! The console sink prints records untouched. The relational sink turns each
//! record into an `INSERT` against `sar_<family>`, resolving the hostname to
//! an address, converting the epoch timestamp, and normalizing device names.

use std::fmt;

use ahash::AHashMap as HashMap;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::aggregator::{Aggregator, FamilyAccumulator, FlatRecord};
use crate::catalog::{FamilyDef, ValueKind};
use crate::error::ImportError;

/// Column receiving the resolved host address.
pub const COLUMN_IP_ADDR: &str = "ip_addr";
/// Column receiving the sample timestamp.
pub const COLUMN_COLLECT_TS: &str = "collect_ts";
/// Table name prefix used when none is configured.
pub const DEFAULT_TABLE_PREFIX: &str = "sar_";

type NormalizeFn = fn(&str) -> String;

fn strip_cpu(value: &str) -> String {
    value.strip_prefix("cpu").unwrap_or(value).to_string()
}

fn strip_irq(value: &str) -> String {
    ["i00", "i0", "i"]
        .iter()
        .fold(value, |v, prefix| v.strip_prefix(prefix).unwrap_or(v))
        .to_string()
}

fn strip_fan(value: &str) -> String {
    value.strip_prefix("fan").unwrap_or(value).to_string()
}

fn strip_temp(value: &str) -> String {
    value.strip_prefix("temp").unwrap_or(value).to_string()
}

fn strip_in(value: &str) -> String {
    value.strip_prefix("in").unwrap_or(value).to_string()
}

/// Device dimension name -> normalization of the raw device value.
static NORMALIZERS: Lazy<HashMap<&'static str, NormalizeFn>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, NormalizeFn> = HashMap::new();
    map.insert("cpu_no", strip_cpu);
    map.insert("irq_no", strip_irq);
    map.insert("fan_no", strip_fan);
    map.insert("temp_no", strip_temp);
    map.insert("in_no", strip_in);
    map
});

/// Normalizes a device value for the given dimension. Dimensions without a
/// rule pass the value through.
pub fn normalize_device(dimension: &str, value: &str) -> String {
    NORMALIZERS
        .get(dimension)
        .map(|normalize| normalize(value))
        .unwrap_or_else(|| value.to_string())
}

/// Hostname to address lookup, falling back to the hostname itself.
#[derive(Debug, Clone, Default)]
pub struct HostDirectory {
    hosts: HashMap<String, String>,
}

impl HostDirectory {
    pub fn new<I, K, V>(hosts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn resolve<'a>(&'a self, hostname: &'a str) -> &'a str {
        self.hosts
            .get(hostname)
            .map(String::as_str)
            .unwrap_or(hostname)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// A single column value of an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    /// Decimal literal, kept as text to preserve its exact digits.
    Numeric(String),
    Integer(i64),
    /// Seconds since the epoch, converted with `TO_TIMESTAMP`.
    EpochTimestamp(i64),
}

impl SqlValue {
    /// Literal SQL rendering.
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
            SqlValue::Numeric(s) => s.clone(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::EpochTimestamp(ts) => format!("TO_TIMESTAMP({})", ts),
        }
    }

    /// Placeholder expression for bind parameter `$index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            SqlValue::Text(_) | SqlValue::Integer(_) => format!("${}", index),
            SqlValue::Numeric(_) => format!("CAST(${} AS NUMERIC)", index),
            SqlValue::EpochTimestamp(_) => format!("TO_TIMESTAMP(${})", index),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// An INSERT of one wide record.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<SqlValue>,
}

impl InsertStatement {
    /// Fully rendered statement with literal values.
    pub fn to_sql(&self) -> String {
        let values: Vec<String> = self.values.iter().map(SqlValue::to_sql).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table,
            self.columns.join(", "),
            values.join(", ")
        )
    }

    /// Statement text with `$n` placeholders; bind `self.values` in order.
    pub fn to_parameterized(&self) -> String {
        let placeholders: Vec<String> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| v.placeholder(i + 1))
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// Value stored in `column`, if present.
    pub fn value_of(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }
}

/// Turns flattened records into console lines or INSERT statements.
#[derive(Debug, Clone)]
pub struct RecordEncoder {
    hosts: HostDirectory,
    table_prefix: String,
}

impl RecordEncoder {
    pub fn new(hosts: HostDirectory, table_prefix: impl Into<String>) -> Self {
        Self {
            hosts,
            table_prefix: table_prefix.into(),
        }
    }

    pub fn hosts(&self) -> &HostDirectory {
        &self.hosts
    }

    pub fn table_name(&self, family: &FamilyDef) -> String {
        format!("{}{}", self.table_prefix, family.name)
    }

    /// Human readable line, values as collected.
    pub fn encode_line(&self, family: &FamilyDef, record: &FlatRecord) -> String {
        let mut line = format!(
            "{} hostname={} timestamp={}",
            family.name, record.hostname, record.timestamp
        );
        if let Some(dev) = &record.dev_name {
            line.push_str(&format!(" dev_name={}", dev));
        }
        for field in family.fields {
            if let Some(value) = record.values.get(field.raw) {
                line.push_str(&format!(" {}={}", field.raw, value));
            }
        }
        line
    }

    /// INSERT for one record. Fields the family does not declare are skipped.
    /// Numeric values that do not fit their column give `InvalidValue`.
    pub fn encode_insert(
        &self,
        family: &FamilyDef,
        record: &FlatRecord,
    ) -> Result<InsertStatement, ImportError> {
        let mut columns = Vec::with_capacity(record.field_count());
        let mut values = Vec::with_capacity(record.field_count());

        columns.push(COLUMN_IP_ADDR.to_string());
        values.push(SqlValue::Text(
            self.hosts.resolve(&record.hostname).to_string(),
        ));

        columns.push(COLUMN_COLLECT_TS.to_string());
        values.push(SqlValue::EpochTimestamp(record.timestamp));

        if let (Some(dimension), Some(dev)) = (family.device_dimension, &record.dev_name) {
            columns.push(dimension.to_string());
            values.push(SqlValue::Text(normalize_device(dimension, dev)));
        }

        for field in family.fields {
            let Some(raw) = record.values.get(field.raw) else {
                continue;
            };
            let raw = raw.trim();
            let invalid = || ImportError::InvalidValue {
                table: self.table_name(family),
                column: field.column.to_string(),
                value: raw.to_string(),
            };
            let value = match field.kind {
                ValueKind::Decimal { .. } if field.kind.admits(raw) => {
                    SqlValue::Numeric(raw.to_string())
                }
                ValueKind::Decimal { .. } => return Err(invalid()),
                ValueKind::Integer => SqlValue::Integer(raw.parse().map_err(|_| invalid())?),
                ValueKind::Text => SqlValue::Text(raw.to_string()),
            };
            columns.push(field.column.to_string());
            values.push(value);
        }

        Ok(InsertStatement {
            table: self.table_name(family),
            columns,
            values,
        })
    }

    /// INSERTs for every record of one accumulator.
    pub fn encode_family(
        &self,
        accumulator: &FamilyAccumulator,
    ) -> Result<Vec<InsertStatement>, ImportError> {
        let family = accumulator.family();
        accumulator
            .flatten()
            .map(|record| self.encode_insert(family, &record))
            .collect()
    }

    /// INSERTs for the whole run, grouped per family in catalog order.
    ///
    /// With `parallel` set, families are encoded on the rayon pool; each
    /// worker only reads its own accumulator.
    pub fn encode_all(
        &self,
        aggregator: &Aggregator,
        parallel: bool,
    ) -> Result<Vec<Vec<InsertStatement>>, ImportError> {
        if parallel {
            aggregator
                .accumulators()
                .par_iter()
                .map(|acc| self.encode_family(acc))
                .collect()
        } else {
            aggregator
                .accumulators()
                .iter()
                .map(|acc| self.encode_family(acc))
                .collect()
        }
    }
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new(HostDirectory::default(), DEFAULT_TABLE_PREFIX)
    }
}
