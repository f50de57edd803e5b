//! Generate testdata command implementation.
//!
//! Writes synthetic `sadf -p` rows (tab separated, epoch timestamps) covering
//! the common families, including both kinds of `tps` rows.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

const CPU_DEVICES: &[&str] = &["all", "cpu0", "cpu1"];
const DISK_DEVICES: &[&str] = &["dev8-0", "dev8-16"];
const NET_DEVICES: &[&str] = &["lo", "eth0"];
const TOTAL_MEMORY_KB: u64 = 16 * 1024 * 1024;

fn push_row(
    out: &mut String,
    host: &str,
    interval: u64,
    timestamp: i64,
    device: &str,
    field: &str,
    value: impl std::fmt::Display,
) {
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}",
        host, interval, timestamp, device, field, value
    );
}

fn sample_rows<R: Rng>(rng: &mut R, out: &mut String, host: &str, interval: u64, ts: i64) {
    for device in CPU_DEVICES {
        let user = rng.gen_range(0.0..40.0_f64);
        let system = rng.gen_range(0.0..20.0_f64);
        let iowait = rng.gen_range(0.0..5.0_f64);
        push_row(out, host, interval, ts, device, "%user", format!("{:.2}", user));
        push_row(out, host, interval, ts, device, "%system", format!("{:.2}", system));
        push_row(out, host, interval, ts, device, "%iowait", format!("{:.2}", iowait));
        push_row(
            out,
            host,
            interval,
            ts,
            device,
            "%idle",
            format!("{:.2}", 100.0 - user - system - iowait),
        );
    }

    let rtps = rng.gen_range(0.0..200.0_f64);
    let wtps = rng.gen_range(0.0..200.0_f64);
    push_row(out, host, interval, ts, "-", "tps", format!("{:.2}", rtps + wtps));
    push_row(out, host, interval, ts, "-", "rtps", format!("{:.2}", rtps));
    push_row(out, host, interval, ts, "-", "wtps", format!("{:.2}", wtps));

    let used = rng.gen_range(TOTAL_MEMORY_KB / 8..TOTAL_MEMORY_KB);
    push_row(out, host, interval, ts, "-", "kbmemfree", TOTAL_MEMORY_KB - used);
    push_row(out, host, interval, ts, "-", "kbmemused", used);
    push_row(
        out,
        host,
        interval,
        ts,
        "-",
        "%memused",
        format!("{:.2}", used as f64 * 100.0 / TOTAL_MEMORY_KB as f64),
    );

    push_row(out, host, interval, ts, "-", "runq-sz", rng.gen_range(0..8u32));
    push_row(out, host, interval, ts, "-", "plist-sz", rng.gen_range(200..900u32));
    push_row(out, host, interval, ts, "-", "ldavg-1", format!("{:.2}", rng.gen_range(0.0..4.0_f64)));

    for device in DISK_DEVICES {
        push_row(out, host, interval, ts, device, "tps", format!("{:.2}", rng.gen_range(0.0..150.0_f64)));
        push_row(out, host, interval, ts, device, "%util", format!("{:.2}", rng.gen_range(0.0..100.0_f64)));
    }

    for device in NET_DEVICES {
        push_row(out, host, interval, ts, device, "rxpck/s", format!("{:.2}", rng.gen_range(0.0..5000.0_f64)));
        push_row(out, host, interval, ts, device, "txpck/s", format!("{:.2}", rng.gen_range(0.0..5000.0_f64)));
    }
}

/// Renders `samples` samples per host, `interval` seconds apart, ending at `end_ts`.
pub fn render_testdata<R: Rng>(
    rng: &mut R,
    hosts: usize,
    samples: usize,
    interval: u64,
    end_ts: i64,
) -> String {
    let mut out = String::from("# hostname\tinterval\ttimestamp\tdevice\tfield\tvalue\n");
    let step = interval as i64;
    let start = end_ts - step * samples.saturating_sub(1) as i64;

    for h in 1..=hosts {
        let host = format!("host{}", h);
        for s in 0..samples {
            sample_rows(rng, &mut out, &host, interval, start + step * s as i64);
        }
    }
    out
}

/// Generates a synthetic sadf data file for testing purposes.
pub fn command_generate_testdata(
    output: PathBuf,
    hosts: usize,
    samples: usize,
    interval: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if hosts == 0 || samples == 0 || interval == 0 {
        return Err("hosts, samples and interval must be greater than zero".into());
    }
    debug!(
        "Generating test data: hosts={}, samples={}, interval={}, output={}",
        hosts,
        samples,
        interval,
        output.display()
    );

    let now = Utc::now().timestamp();
    let end_ts = now - now.rem_euclid(interval as i64);
    let content = render_testdata(&mut rand::thread_rng(), hosts, samples, interval, end_ts);

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(&output, &content)
            .with_context(|| format!("Failed to write test data to {}", output.display()))?;
        info!("Wrote {} rows", content.lines().count() - 1);
        println!("✅ Test data written to: {}", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sar_importer::config::Config;
    use sar_importer::importer::Importer;
    use sar_importer::input::read_rows;

    #[test]
    fn test_generated_data_imports_cleanly() {
        let mut rng = StdRng::seed_from_u64(7);
        let content = render_testdata(&mut rng, 2, 3, 600, 1_700_000_400);

        let rows = read_rows(content.as_bytes()).unwrap();
        let importer = Importer::from_config(&Config::default()).unwrap();
        let (aggregator, stats) = importer.aggregate(rows).unwrap();

        assert_eq!(stats.rows_dropped, 0);
        // 2 hosts x 3 samples
        assert_eq!(aggregator.accumulator("io").unwrap().len(), 6);
        assert_eq!(aggregator.accumulator("memory").unwrap().len(), 6);
        assert_eq!(aggregator.accumulator("cpu").unwrap().len(), 18);
        assert_eq!(aggregator.accumulator("disk").unwrap().len(), 12);
        assert_eq!(aggregator.accumulator("net_dev").unwrap().len(), 12);
    }

    #[test]
    fn test_samples_end_at_requested_timestamp() {
        let mut rng = StdRng::seed_from_u64(1);
        let content = render_testdata(&mut rng, 1, 2, 600, 1_700_000_400);
        let rows = read_rows(content.as_bytes()).unwrap();
        assert_eq!(rows.first().unwrap().timestamp, 1_699_999_800);
        assert_eq!(rows.last().unwrap().timestamp, 1_700_000_400);
    }
}
