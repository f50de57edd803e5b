//! Metric family catalog.
//!
//! Every table the importer writes to is described here once: the family
//! name (which also names the table), the optional device dimension, and the
//! mapping from sadf field names to output columns with their SQL types.
//!
//! The order of [`BUILTIN_FAMILIES`] is significant. Classification walks the
//! catalog front to back and the first family that accepts a row wins, so
//! families sharing an ambiguous field name (`tps`, `DEVICE`) rely on their
//! per-field [`DeviceGuard`] and on this order.

mod families;

use ahash::AHashSet as HashSet;
use std::fmt;

pub use families::BUILTIN_FAMILIES;

/// Device column value used by sadf for system-wide samples.
pub const NO_DEVICE: &str = "-";

/// SQL type of an output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `NUMERIC(precision, scale)`
    Decimal { precision: u8, scale: u8 },
    /// `BIGINT`
    Integer,
    /// `TEXT`
    Text,
}

impl ValueKind {
    /// Column type used in generated DDL.
    pub fn sql_type(&self) -> String {
        match self {
            ValueKind::Decimal { precision, scale } => format!("NUMERIC({}, {})", precision, scale),
            ValueKind::Integer => "BIGINT".to_string(),
            ValueKind::Text => "TEXT".to_string(),
        }
    }

    /// Checks that a raw sample value can be stored in a column of this kind.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            // f64 parsing also takes NaN and infinities, which NUMERIC literals cannot hold
            ValueKind::Decimal { .. } => value
                .trim()
                .parse::<f64>()
                .map_or(false, |v| v.is_finite()),
            ValueKind::Integer => value.trim().parse::<i64>().is_ok(),
            ValueKind::Text => true,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql_type())
    }
}

/// Restricts which device names a field accepts.
///
/// Most fields are unambiguous and use [`DeviceGuard::Always`]. Field names
/// that sadf reuses across activities are disambiguated by the device column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceGuard {
    Always,
    /// Only system-wide samples (device is `-`).
    NoDevice,
    /// Only per-device samples (device is not `-`).
    AnyDevice,
    /// Device name must match this regular expression (unanchored).
    Pattern(&'static str),
}

/// One sadf field and the column it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub raw: &'static str,
    pub column: &'static str,
    pub kind: ValueKind,
    pub guard: DeviceGuard,
}

impl FieldDef {
    pub const fn decimal(raw: &'static str, column: &'static str, precision: u8, scale: u8) -> Self {
        Self {
            raw,
            column,
            kind: ValueKind::Decimal { precision, scale },
            guard: DeviceGuard::Always,
        }
    }

    pub const fn integer(raw: &'static str, column: &'static str) -> Self {
        Self {
            raw,
            column,
            kind: ValueKind::Integer,
            guard: DeviceGuard::Always,
        }
    }

    pub const fn text(raw: &'static str, column: &'static str) -> Self {
        Self {
            raw,
            column,
            kind: ValueKind::Text,
            guard: DeviceGuard::Always,
        }
    }

    /// Same field, restricted by a device guard.
    pub const fn guarded(self, guard: DeviceGuard) -> Self {
        Self { guard, ..self }
    }
}

/// Definition of one metric family (one output table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyDef {
    pub name: &'static str,
    /// Column holding the device/instance name, absent for system-wide families.
    pub device_dimension: Option<&'static str>,
    pub fields: &'static [FieldDef],
}

impl FamilyDef {
    pub fn field(&self, raw: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.raw == raw)
    }

    pub fn has_device_dimension(&self) -> bool {
        self.device_dimension.is_some()
    }

    /// Power management families come from `sar -m` and are optional.
    pub fn is_power_telemetry(&self) -> bool {
        self.name.starts_with("pwr_")
    }
}

/// Ordered list of family definitions used for one import run.
#[derive(Debug, Clone)]
pub struct Catalog {
    families: Vec<FamilyDef>,
}

impl Catalog {
    pub fn new(families: Vec<FamilyDef>) -> Self {
        Self { families }
    }

    /// Every built-in family, power telemetry included.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FAMILIES.to_vec())
    }

    /// Built-in families without the `pwr_*` power management activities.
    pub fn without_power_telemetry() -> Self {
        Self::new(
            BUILTIN_FAMILIES
                .iter()
                .filter(|f| !f.is_power_telemetry())
                .copied()
                .collect(),
        )
    }

    pub fn families(&self) -> &[FamilyDef] {
        &self.families
    }

    pub fn family(&self, name: &str) -> Option<&FamilyDef> {
        self.families.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Checks structural invariants and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        let mut names = HashSet::new();

        for family in &self.families {
            if !names.insert(family.name) {
                problems.push(format!("duplicate family '{}'", family.name));
            }
            if family.fields.is_empty() {
                problems.push(format!("family '{}' declares no fields", family.name));
            }

            let mut raws = HashSet::new();
            let mut columns = HashSet::new();
            for field in family.fields {
                if !raws.insert(field.raw) {
                    problems.push(format!(
                        "family '{}' declares field '{}' twice",
                        family.name, field.raw
                    ));
                }
                if !columns.insert(field.column) {
                    problems.push(format!(
                        "family '{}' maps two fields to column '{}'",
                        family.name, field.column
                    ));
                }
                if let DeviceGuard::Pattern(pattern) = field.guard {
                    if let Err(e) = regex::Regex::new(pattern) {
                        problems.push(format!(
                            "family '{}' field '{}' has invalid device pattern: {}",
                            family.name, field.raw, e
                        ));
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(Catalog::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_builtin_order_starts_with_cpu_and_keeps_io_before_disk() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.families().iter().map(|f| f.name).collect();
        assert_eq!(names[0], "cpu");

        let io = names.iter().position(|n| *n == "io").unwrap();
        let disk = names.iter().position(|n| *n == "disk").unwrap();
        assert!(io < disk);
        assert_eq!(names.last(), Some(&"net_fc"));
    }

    #[test]
    fn test_tps_is_shared_between_io_and_disk() {
        let catalog = Catalog::builtin();
        let owners: Vec<_> = catalog
            .families()
            .iter()
            .filter(|f| f.field("tps").is_some())
            .map(|f| f.name)
            .collect();
        assert_eq!(owners, vec!["io", "disk"]);
    }

    #[test]
    fn test_without_power_telemetry_drops_pwr_families() {
        let narrow = Catalog::without_power_telemetry();
        assert!(narrow.families().iter().all(|f| !f.name.starts_with("pwr_")));
        assert!(narrow.family("huge").is_some());
        assert!(narrow.family("pwr_fan").is_none());
        assert_eq!(Catalog::builtin().len() - narrow.len(), 6);
    }

    #[test]
    fn test_validate_reports_duplicates() {
        static DUP_FIELDS: &[FieldDef] = &[
            FieldDef::integer("a", "col_a"),
            FieldDef::integer("a", "col_b"),
        ];
        let family = FamilyDef {
            name: "dup",
            device_dimension: None,
            fields: DUP_FIELDS,
        };
        let problems = Catalog::new(vec![family, family]).validate().unwrap_err();
        assert!(problems.iter().any(|p| p.contains("duplicate family 'dup'")));
        assert!(problems.iter().any(|p| p.contains("field 'a' twice")));
    }

    #[test]
    fn test_value_kind_admits() {
        let decimal = ValueKind::Decimal { precision: 8, scale: 2 };
        assert!(decimal.admits("5.00"));
        assert!(decimal.admits("-1"));
        assert!(!decimal.admits("five"));
        assert!(decimal.admits("1.5e3"));
        for non_finite in ["NaN", "nan", "inf", "-infinity", "+Infinity"] {
            assert!(!decimal.admits(non_finite), "{} admitted", non_finite);
        }
        assert!(ValueKind::Integer.admits("123456"));
        assert!(!ValueKind::Integer.admits("12.5"));
        assert!(ValueKind::Text.admits("anything at all"));
    }

    #[test]
    fn test_sql_types() {
        assert_eq!(
            ValueKind::Decimal { precision: 5, scale: 2 }.sql_type(),
            "NUMERIC(5, 2)"
        );
        assert_eq!(ValueKind::Integer.sql_type(), "BIGINT");
        assert_eq!(ValueKind::Text.sql_type(), "TEXT");
    }
}
