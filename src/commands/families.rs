//! Families command implementation.
//!
//! Lists the metric families of the active catalog.

use sar_importer::catalog::{DeviceGuard, FamilyDef};
use sar_importer::config::Config;

fn guard_label(guard: &DeviceGuard) -> String {
    match guard {
        DeviceGuard::Always => String::new(),
        DeviceGuard::NoDevice => " [device = -]".into(),
        DeviceGuard::AnyDevice => " [device != -]".into(),
        DeviceGuard::Pattern(p) => format!(" [device ~ /{}/]", p),
    }
}

fn print_family(family: &FamilyDef, table_prefix: &str, verbose: bool) {
    println!(
        "\n🏷️  Family: {} → {}{}",
        family.name, table_prefix, family.name
    );
    println!("{}", "─".repeat(50));
    match family.device_dimension {
        Some(dimension) => println!("   ├─ 📂 Device column: {}", dimension),
        None => println!("   ├─ 📂 System-wide (no device column)"),
    }

    if verbose {
        for field in family.fields {
            println!(
                "   │  ├─ {} → {} {}{}",
                field.raw,
                field.column,
                field.kind,
                guard_label(&field.guard)
            );
        }
    } else {
        let examples: Vec<_> = family.fields.iter().take(4).map(|f| f.raw).collect();
        println!("   │  ├─ {} fields", family.fields.len());
        println!("   │  └─ Examples: {}", examples.join(", "));
    }
}

/// Lists catalog families, optionally filtered by name.
pub fn command_families(
    verbose: bool,
    family: Option<String>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 sar-importer - Metric Families");
    println!("=================================");

    let catalog = config.catalog();
    let mut shown = 0;
    for def in catalog.families() {
        if let Some(filter) = &family {
            if !def.name.contains(filter.as_str()) {
                continue;
            }
        }
        print_family(def, config.table_prefix(), verbose);
        shown += 1;
    }

    if shown == 0 {
        if let Some(filter) = family {
            return Err(format!("No family matches '{}'", filter).into());
        }
    }

    let fields: usize = catalog.families().iter().map(|f| f.fields.len()).sum();
    println!(
        "\n📋 Total: {} families, {} fields",
        catalog.len(),
        fields
    );

    Ok(())
}
