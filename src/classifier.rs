//! Row classification.
//!
//! Routes each [`RawRow`] to at most one metric family. The catalog is an
//! ordered priority list: the first family that accepts a row takes it and
//! later families are never consulted.

use ahash::AHashMap as HashMap;
use regex::Regex;
use tracing::trace;

use crate::catalog::{Catalog, DeviceGuard, FamilyDef, NO_DEVICE};
use crate::error::ImportError;
use crate::input::RawRow;

/// Catalog plus the compiled device patterns its guards refer to.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Catalog,
    patterns: HashMap<&'static str, Regex>,
}

impl Classifier {
    /// Compiles every device pattern used by the catalog.
    pub fn new(catalog: Catalog) -> Result<Self, ImportError> {
        let mut patterns = HashMap::new();
        for family in catalog.families() {
            for field in family.fields {
                if let DeviceGuard::Pattern(pattern) = field.guard {
                    if patterns.contains_key(pattern) {
                        continue;
                    }
                    let regex = Regex::new(pattern).map_err(|e| {
                        ImportError::Configuration(format!(
                            "invalid device pattern '{}' in family '{}': {}",
                            pattern, family.name, e
                        ))
                    })?;
                    patterns.insert(pattern, regex);
                }
            }
        }

        Ok(Self { catalog, patterns })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the first family in catalog order that accepts the row.
    pub fn classify(&self, row: &RawRow) -> Option<&FamilyDef> {
        let family = self
            .catalog
            .families()
            .iter()
            .find(|family| self.accepts(family, row));

        if family.is_none() {
            trace!(
                "No family accepts field '{}' (device '{}')",
                row.field,
                row.device
            );
        }
        family
    }

    /// Whether `family` takes this row: it must declare the field, and the
    /// field's device guard must admit the row's device.
    pub fn accepts(&self, family: &FamilyDef, row: &RawRow) -> bool {
        let Some(field) = family.field(&row.field) else {
            return false;
        };

        match field.guard {
            DeviceGuard::Always => true,
            DeviceGuard::NoDevice => row.device == NO_DEVICE,
            DeviceGuard::AnyDevice => row.device != NO_DEVICE,
            DeviceGuard::Pattern(pattern) => self
                .patterns
                .get(pattern)
                .is_some_and(|re| re.is_match(&row.device)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(Catalog::builtin()).unwrap()
    }

    fn family_of(device: &str, field: &str) -> Option<&'static str> {
        let row = RawRow::new("host1", 10, 1_700_000_000, device, field, "1.00");
        classifier().classify(&row).map(|f| f.name)
    }

    #[test]
    fn test_tps_without_device_goes_to_io() {
        assert_eq!(family_of("-", "tps"), Some("io"));
    }

    #[test]
    fn test_tps_with_device_goes_to_disk() {
        assert_eq!(family_of("dev8-0", "tps"), Some("disk"));
        assert_eq!(family_of("sda", "tps"), Some("disk"));
    }

    #[test]
    fn test_device_field_is_split_by_device_name() {
        assert_eq!(family_of("fan1", "DEVICE"), Some("pwr_fan"));
        assert_eq!(family_of("temp2", "DEVICE"), Some("pwr_temp"));
        assert_eq!(family_of("in0", "DEVICE"), Some("pwr_in"));
        assert_eq!(family_of("cpu0", "DEVICE"), None);
    }

    #[test]
    fn test_unambiguous_fields() {
        assert_eq!(family_of("cpu0", "%user"), Some("cpu"));
        assert_eq!(family_of("-", "kbmemfree"), Some("memory"));
        assert_eq!(family_of("eth0", "rxpck/s"), Some("net_dev"));
        assert_eq!(family_of("/", "MBfsfree"), Some("filesystem"));
    }

    #[test]
    fn test_first_match_wins_for_shared_fields() {
        // retrans/s is declared by both net_nfs and net_etcp.
        assert_eq!(family_of("-", "retrans/s"), Some("net_nfs"));
        // MHz (pwr_freq) and wghMHz (pwr_wghfreq) share the cpu_no dimension only.
        assert_eq!(family_of("cpu1", "MHz"), Some("pwr_freq"));
    }

    #[test]
    fn test_unknown_field_is_dropped() {
        assert_eq!(family_of("-", "no-such-metric"), None);
    }

    #[test]
    fn test_classification_is_stable() {
        let classifier = classifier();
        let row = RawRow::new("host1", 10, 1_700_000_000, "-", "proc/s", "3.00");
        let first = classifier.classify(&row).map(|f| f.name);
        for _ in 0..10 {
            assert_eq!(classifier.classify(&row).map(|f| f.name), first);
        }
    }

    #[test]
    fn test_narrow_catalog_drops_power_rows() {
        let classifier = Classifier::new(Catalog::without_power_telemetry()).unwrap();
        let row = RawRow::new("host1", 10, 1_700_000_000, "fan1", "DEVICE", "it87");
        assert!(classifier.classify(&row).is_none());
    }
}
