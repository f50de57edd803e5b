//! Check command implementation.
//!
//! Validates the effective configuration and the family catalog.

use sar_importer::classifier::Classifier;
use sar_importer::config::{validate_effective_config, Config, SinkMode};

/// Validates configuration and catalog.
pub fn command_check(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 sar-importer - Configuration Check");
    println!("=====================================");

    let mut all_ok = true;

    println!("\n⚙️  Checking configuration...");
    match validate_effective_config(config) {
        Ok(()) => {
            println!("   ✅ Configuration valid");
            match config.sink_mode()? {
                SinkMode::Console => println!("   ✅ Output: console"),
                SinkMode::Relational if config.dry_run.unwrap_or(false) => {
                    println!("   ✅ Output: relational (dry run)")
                }
                SinkMode::Relational => println!("   ✅ Output: relational"),
            }
            println!("   ✅ {} host mappings", config.hosts.len());
        }
        Err(e) => {
            println!("   ❌ {}", e);
            all_ok = false;
        }
    }

    println!("\n📚 Checking family catalog...");
    let catalog = config.catalog();
    match catalog.validate() {
        Ok(()) => println!("   ✅ {} families consistent", catalog.len()),
        Err(problems) => {
            for problem in problems {
                println!("   ❌ {}", problem);
            }
            all_ok = false;
        }
    }

    if let Err(e) = Classifier::new(catalog) {
        println!("   ❌ {}", e);
        all_ok = false;
    } else {
        println!("   ✅ Device patterns compile");
    }

    if all_ok {
        println!("\n✅ All checks passed");
        Ok(())
    } else {
        Err("One or more checks failed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(command_check(&Config::default()).is_ok());
    }

    #[test]
    fn test_relational_without_datasource_fails() {
        let cfg = Config {
            mode: Some("relational".into()),
            ..Config::default()
        };
        assert!(command_check(&cfg).is_err());
    }
}
