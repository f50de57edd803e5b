//! DDL generation for the per-family tables.
//!
//! Column names and types come from the same catalog the importer uses, so
//! generated tables always match the INSERTs the relational sink emits.

use crate::catalog::{Catalog, FamilyDef};
use crate::encoder::{COLUMN_COLLECT_TS, COLUMN_IP_ADDR};

/// Kind of DDL to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaAction {
    Create,
    Drop,
    Truncate,
}

/// `CREATE TABLE` for one family.
pub fn create_table(family: &FamilyDef, table_prefix: &str) -> String {
    let mut lines = vec![
        format!("CREATE TABLE {}{} (", table_prefix, family.name),
        "  id BIGSERIAL NOT NULL PRIMARY KEY".to_string(),
        format!("  , {} TEXT NOT NULL", COLUMN_IP_ADDR),
    ];
    if let Some(dimension) = family.device_dimension {
        lines.push(format!("  , {} TEXT NOT NULL", dimension));
    }
    lines.push(format!(
        "  , {} TIMESTAMP WITH TIME ZONE NOT NULL",
        COLUMN_COLLECT_TS
    ));
    for field in family.fields {
        lines.push(format!("  , {} {}", field.column, field.kind.sql_type()));
    }
    lines.push(");".to_string());
    lines.join("\n")
}

/// DDL for one family.
pub fn family_ddl(family: &FamilyDef, action: SchemaAction, table_prefix: &str) -> String {
    match action {
        SchemaAction::Create => create_table(family, table_prefix),
        SchemaAction::Drop => format!(
            "DROP TABLE IF EXISTS {}{} RESTRICT;",
            table_prefix, family.name
        ),
        SchemaAction::Truncate => format!("TRUNCATE {}{};", table_prefix, family.name),
    }
}

/// DDL script covering every family of the catalog, in catalog order.
pub fn render_schema(catalog: &Catalog, action: SchemaAction, table_prefix: &str) -> String {
    let mut script: String = catalog
        .families()
        .iter()
        .map(|family| family_ddl(family, action, table_prefix))
        .collect::<Vec<_>>()
        .join("\n");
    script.push('\n');
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_with_device_dimension() {
        let catalog = Catalog::builtin();
        let ddl = create_table(catalog.family("irq").unwrap(), "sar_");
        assert_eq!(
            ddl,
            "CREATE TABLE sar_irq (\n\
             \x20 id BIGSERIAL NOT NULL PRIMARY KEY\n\
             \x20 , ip_addr TEXT NOT NULL\n\
             \x20 , irq_no TEXT NOT NULL\n\
             \x20 , collect_ts TIMESTAMP WITH TIME ZONE NOT NULL\n\
             \x20 , intrps NUMERIC(8, 2)\n\
             );"
        );
    }

    #[test]
    fn test_create_table_types() {
        let catalog = Catalog::builtin();
        let ddl = create_table(catalog.family("pwr_usb").unwrap(), "sar_");
        assert!(ddl.contains("  , bus_no TEXT NOT NULL"));
        assert!(ddl.contains("  , idvendor TEXT"));
        assert!(ddl.contains("  , maxpower BIGINT"));
    }

    #[test]
    fn test_system_wide_family_has_no_dimension_column() {
        let catalog = Catalog::builtin();
        let ddl = create_table(catalog.family("memory").unwrap(), "sar_");
        assert_eq!(ddl.matches("TEXT NOT NULL").count(), 1);
    }

    #[test]
    fn test_drop_and_truncate_cover_every_family() {
        let catalog = Catalog::builtin();
        let drop = render_schema(&catalog, SchemaAction::Drop, "sar_");
        assert_eq!(drop.lines().count(), catalog.len());
        assert!(drop.starts_with("DROP TABLE IF EXISTS sar_cpu RESTRICT;"));

        let truncate = render_schema(&catalog, SchemaAction::Truncate, "sar_");
        assert!(truncate.contains("TRUNCATE sar_net_fc;"));
    }
}
