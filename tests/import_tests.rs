//! End-to-end import scenarios through the public library API.

use std::collections::BTreeMap;

use sar_importer::config::Config;
use sar_importer::importer::{run, Importer};
use sar_importer::input::{read_rows, RawRow};
use sar_importer::{Aggregator, Catalog, Classifier, ImportError, RecordEncoder, HostDirectory};

/// Parses `INSERT INTO t (a, b) VALUES (x, y);` into (table, column -> value).
/// Quoted values may contain commas and doubled quotes.
fn parse_insert(sql: &str) -> (String, BTreeMap<String, String>) {
    let rest = sql.strip_prefix("INSERT INTO ").expect("insert prefix");
    let (table, rest) = rest.split_once(" (").expect("column list");
    let (columns, rest) = rest.split_once(") VALUES (").expect("values");
    let values = rest.strip_suffix(");").expect("statement end");

    let mut parsed = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = values.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' if in_quotes && chars.peek() == Some(&'\'') => {
                current.push('\'');
                chars.next();
            }
            '\'' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parsed.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    parsed.push(current.trim().to_string());

    let columns: Vec<String> = columns.split(", ").map(str::to_string).collect();
    assert_eq!(columns.len(), parsed.len(), "column/value count in {}", sql);
    (table.to_string(), columns.into_iter().zip(parsed).collect())
}

fn dry_run_config(hosts: &[(&str, &str)]) -> Config {
    Config {
        mode: Some("relational".into()),
        dry_run: Some(true),
        hosts: hosts
            .iter()
            .map(|(h, a)| (h.to_string(), a.to_string()))
            .collect(),
        ..Config::default()
    }
}

async fn dry_run_script(rows: Vec<RawRow>, config: &Config) -> Vec<String> {
    let mut out = Vec::new();
    run(rows, config, &mut out).await.unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_tps_routes_by_device() {
    let rows = vec![
        RawRow::new("host1", 600, 1_700_000_000, "-", "tps", "5.00"),
        RawRow::new("host1", 600, 1_700_000_000, "dev8-0", "tps", "3.50"),
    ];
    let script = dry_run_script(rows, &dry_run_config(&[])).await;

    assert_eq!(script.first().map(String::as_str), Some("BEGIN;"));
    assert_eq!(script.last().map(String::as_str), Some("COMMIT;"));

    let inserts: Vec<_> = script
        .iter()
        .filter(|l| l.starts_with("INSERT"))
        .map(|l| parse_insert(l))
        .collect();
    assert_eq!(inserts.len(), 2);

    let (table, io) = &inserts[0];
    assert_eq!(table, "sar_io");
    assert_eq!(io["tps"], "5.00");
    assert!(!io.contains_key("dev"));

    let (table, disk) = &inserts[1];
    assert_eq!(table, "sar_disk");
    assert_eq!(disk["dev"], "dev8-0");
    assert_eq!(disk["tps"], "3.50");
}

#[tokio::test]
async fn test_host_mapping_and_fallback() {
    let rows = vec![
        RawRow::new("host1", 600, 1_700_000_000, "-", "runq-sz", "2"),
        RawRow::new("host2", 600, 1_700_000_000, "-", "runq-sz", "3"),
    ];
    let script = dry_run_script(rows, &dry_run_config(&[("host1", "10.0.0.5")])).await;

    let addrs: Vec<String> = script
        .iter()
        .filter(|l| l.starts_with("INSERT"))
        .map(|l| parse_insert(l).1["ip_addr"].clone())
        .collect();
    assert_eq!(addrs, vec!["10.0.0.5", "host2"]);
    assert!(script
        .iter()
        .any(|l| l.contains("TO_TIMESTAMP(1700000000)")));
}

#[tokio::test]
async fn test_device_normalization() {
    let rows = vec![
        RawRow::new("host1", 600, 1_700_000_000, "cpu3", "%user", "1.25"),
        RawRow::new("host1", 600, 1_700_000_000, "i012", "intr/s", "7.00"),
        RawRow::new("host1", 600, 1_700_000_000, "temp1", "degC", "41.00"),
    ];
    let script = dry_run_script(rows, &dry_run_config(&[])).await;
    let inserts: Vec<_> = script
        .iter()
        .filter(|l| l.starts_with("INSERT"))
        .map(|l| parse_insert(l))
        .collect();

    let cpu = inserts.iter().find(|(t, _)| t == "sar_cpu").unwrap();
    assert_eq!(cpu.1["cpu_no"], "3");
    let irq = inserts.iter().find(|(t, _)| t == "sar_irq").unwrap();
    assert_eq!(irq.1["irq_no"], "12");
    let temp = inserts.iter().find(|(t, _)| t == "sar_pwr_temp").unwrap();
    assert_eq!(temp.1["temp_no"], "1");
}

#[test]
fn test_last_write_wins_and_flatten_is_idempotent() {
    let classifier = Classifier::new(Catalog::builtin()).unwrap();
    let mut agg = Aggregator::new(classifier.catalog());

    for value in ["1.00", "2.00"] {
        let row = RawRow::new("host1", 600, 1_700_000_000, "-", "ldavg-1", value);
        assert_eq!(agg.ingest(&classifier, &row).unwrap(), Some("queue"));
    }

    let first = agg.flatten("queue").unwrap();
    let second = agg.flatten("queue").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].get("ldavg-1").as_deref(), Some("2.00"));
}

#[test]
fn test_record_count_is_distinct_keys() {
    let input = "\
host1\t600\t1700000000\t-\tkbmemfree\t100
host1\t600\t1700000000\t-\tkbmemused\t200
host1\t600\t1700000600\t-\tkbmemfree\t110
host2\t600\t1700000000\t-\tkbmemfree\t300
host1\t600\t1700000000\teth0\trxpck/s\t1.00
host1\t600\t1700000000\tlo\trxpck/s\t2.00
";
    let rows = read_rows(input.as_bytes()).unwrap();
    let importer = Importer::from_config(&Config::default()).unwrap();
    let (agg, stats) = importer.aggregate(rows).unwrap();

    assert_eq!(stats.rows_read, 6);
    assert_eq!(agg.accumulator("memory").unwrap().len(), 3);
    assert_eq!(agg.accumulator("net_dev").unwrap().len(), 2);
    assert_eq!(agg.record_count(), 5);
}

#[test]
fn test_quoted_text_round_trips() {
    let catalog = Catalog::builtin();
    let classifier = Classifier::new(catalog).unwrap();
    let mut agg = Aggregator::new(classifier.catalog());
    let row = RawRow::new("host1", 600, 1_700_000_000, "1-1", "manufact", "O'Brien, Inc");
    assert_eq!(agg.ingest(&classifier, &row).unwrap(), Some("pwr_usb"));

    let encoder = RecordEncoder::new(HostDirectory::default(), "sar_");
    let family = *classifier.catalog().family("pwr_usb").unwrap();
    let record = &agg.flatten("pwr_usb").unwrap()[0];
    let sql = encoder.encode_insert(&family, record).unwrap().to_sql();

    assert!(sql.contains("'O''Brien, Inc'"));
    let (_, values) = parse_insert(&sql);
    assert_eq!(values["manufact"], "O'Brien, Inc");
    assert_eq!(values["bus_no"], "1-1");
}

#[test]
fn test_malformed_line_reports_position() {
    let input = "host1\t600\t1700000000\t-\ttps\n";
    match read_rows(input.as_bytes()) {
        Err(ImportError::MalformedInput { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected malformed input, got {:?}", other),
    }
}

#[test]
fn test_unknown_mode_is_rejected() {
    let config = Config {
        mode: Some("kafka".into()),
        ..Config::default()
    };
    assert!(matches!(
        Importer::from_config(&config),
        Err(ImportError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_narrow_catalog_drops_power_rows() {
    let config = Config {
        power_telemetry: Some(false),
        ..Config::default()
    };
    let rows = vec![
        RawRow::new("host1", 600, 1_700_000_000, "temp1", "degC", "41.00"),
        RawRow::new("host1", 600, 1_700_000_000, "-", "tps", "5.00"),
    ];
    let mut out = Vec::new();
    let summary = run(rows, &config, &mut out).await.unwrap();
    assert_eq!(summary.ingest.rows_dropped, 1);
    assert_eq!(summary.written.records, 1);
}
