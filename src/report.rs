//! Weekly HTML table of per-day graph images.
//!
//! Each row of the table names a graph series; each column is one day of an
//! ISO week. Cells reference images named `{prefix}[_{detail}]_{YYYY-MM-DD}.png`.

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::error::ImportError;

/// One table row, optionally split into detail rows.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub prefix: String,
    /// Present (even when empty) means the row is split into detail rows.
    pub detail: Option<Vec<ReportDetail>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportDetail {
    pub name: String,
    pub prefix: String,
}

/// Parses the row list from YAML.
pub fn parse_rows(yaml: &str) -> Result<Vec<ReportRow>, ImportError> {
    serde_yaml::from_str(yaml).map_err(|e| ImportError::Report(format!("invalid rows: {}", e)))
}

/// Reads and parses a row file.
pub fn load_rows(path: &Path) -> Result<Vec<ReportRow>, ImportError> {
    let content = fs::read_to_string(path)?;
    parse_rows(&content)
}

/// The seven dates (Monday first) of ISO week `week` of `year`.
pub fn week_dates(year: i32, week: u32) -> Result<Vec<NaiveDate>, ImportError> {
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or_else(|| ImportError::Report(format!("no ISO week {} in {}", week, year)))?;
    Ok((0..7).map(|offset| monday + Duration::days(offset)).collect())
}

/// Default output file name, e.g. `2016-W02.html`.
pub fn default_file_name(year: i32, week: u32) -> String {
    format!("{}-W{:02}.html", year, week)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn image_cells(html: &mut String, stem: &str, dates: &[NaiveDate]) {
    for date in dates {
        html.push_str(&format!(
            "    <td><img src=\"{}_{}.png\" /></td>\n",
            escape(stem),
            date.format("%Y-%m-%d")
        ));
    }
}

/// Renders the full HTML document.
pub fn render_weekly_table(rows: &[ReportRow], dates: &[NaiveDate]) -> String {
    let mut html = String::new();
    html.push_str("<html>\n <head>\n  <title>-</title>\n </head>\n <body>\n");
    html.push_str("  <table border=\"1\">\n");

    html.push_str("   <tr>\n    <th colspan=\"2\">-</th>\n");
    for date in dates {
        html.push_str(&format!("    <th>{}</th>\n", date.format("%Y-%m-%d")));
    }
    html.push_str("   </tr>\n");

    for row in rows {
        let Some(details) = &row.detail else {
            html.push_str("   <tr>\n");
            html.push_str(&format!(
                "    <th colspan=\"2\">{}</th>\n",
                escape(&row.name)
            ));
            image_cells(&mut html, &row.prefix, dates);
            html.push_str("   </tr>\n");
            continue;
        };

        for (i, detail) in details.iter().enumerate() {
            html.push_str("   <tr>\n");
            if i == 0 {
                html.push_str(&format!(
                    "    <th rowspan=\"{}\">{}</th>\n",
                    details.len(),
                    escape(&row.name)
                ));
            }
            html.push_str(&format!("    <th>{}</th>\n", escape(&detail.name)));
            image_cells(&mut html, &format!("{}_{}", row.prefix, detail.prefix), dates);
            html.push_str("   </tr>\n");
        }
    }

    html.push_str("  </table>\n </body>\n</html>\n");
    html
}

/// Loads `rows_path`, renders week `week` of `year` and writes it to `output`.
pub fn write_weekly_table(
    rows_path: &Path,
    year: i32,
    week: u32,
    output: &Path,
) -> Result<(), ImportError> {
    let rows = load_rows(rows_path)?;
    let dates = week_dates(year, week)?;
    debug!("Rendering {} rows for {}-W{:02}", rows.len(), year, week);
    fs::write(output, render_weekly_table(&rows, &dates))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = r#"
- name: CPU
  prefix: cpu
- name: Disk
  prefix: disk
  detail:
    - name: sda
      prefix: sda
    - name: sdb
      prefix: sdb
"#;

    #[test]
    fn test_week_dates() {
        let dates = week_dates(2016, 2).unwrap();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2016, 1, 11).unwrap());
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2016, 1, 17).unwrap());
    }

    #[test]
    fn test_week_one_can_start_in_previous_year() {
        let dates = week_dates(2015, 1).unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2014, 12, 29).unwrap());
    }

    #[test]
    fn test_invalid_week() {
        assert!(matches!(week_dates(2016, 54), Err(ImportError::Report(_))));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(2016, 2), "2016-W02.html");
    }

    #[test]
    fn test_render() {
        let rows = parse_rows(ROWS).unwrap();
        assert!(rows[0].detail.is_none());
        assert_eq!(rows[1].detail.as_ref().map(Vec::len), Some(2));

        let html = render_weekly_table(&rows, &week_dates(2016, 2).unwrap());
        assert!(html.contains("<th>2016-01-11</th>"));
        assert!(html.contains("<th colspan=\"2\">CPU</th>"));
        assert!(html.contains("<img src=\"cpu_2016-01-17.png\" />"));
        assert!(html.contains("<th rowspan=\"2\">Disk</th>"));
        assert!(html.contains("<img src=\"disk_sdb_2016-01-13.png\" />"));
        assert_eq!(html.matches("rowspan").count(), 1);
        assert_eq!(html.matches("<img").count(), 21);
    }

    #[test]
    fn test_empty_detail_list_renders_no_rows() {
        let rows = parse_rows("- name: Disk\n  prefix: disk\n  detail: []\n").unwrap();
        let html = render_weekly_table(&rows, &week_dates(2016, 2).unwrap());
        assert!(!html.contains("Disk"));
        assert_eq!(html.matches("<tr>").count(), 1);
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            parse_rows("- name: x"),
            Err(ImportError::Report(_))
        ));
    }
}
