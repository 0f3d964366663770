pub mod error;
pub mod filter;
pub mod props;

pub use error::OutputError;
pub use filter::{filter_records, split_list};
pub use props::DEFAULT_PROPS;

use crate::api::models::Record;
use comfy_table::{presets::ASCII_FULL, Table};
use props::{expand_props, header, value};
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    List,
    Table,
}

impl FromStr for Format {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "list" => Ok(Format::List),
            "table" => Ok(Format::Table),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projection {
    keys: Vec<String>,
    labels: Vec<&'static str>,
}

impl Projection {
    pub fn new(raw: &str) -> Result<Self, OutputError> {
        let keys = expand_props(raw);
        let labels = keys
            .iter()
            .map(|k| header(k))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { keys, labels })
    }

    fn row(&self, record: &Record) -> Result<Vec<String>, OutputError> {
        self.keys.iter().map(|k| value(k, record)).collect()
    }
}

/// Renders `records` in `format`. `raw_json` is the unmodified response
/// body and is the whole output in JSON mode.
pub fn render(
    format: Format,
    raw_json: &str,
    records: &[&Record],
    projection: &Projection,
) -> Result<String, OutputError> {
    match format {
        Format::Json => Ok(raw_json.to_string()),
        Format::List => render_list(records, projection),
        Format::Table => render_table(records, projection),
    }
}

fn render_list(records: &[&Record], projection: &Projection) -> Result<String, OutputError> {
    let width = projection
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        let row = projection.row(record)?;
        for (label, value) in projection.labels.iter().zip(row) {
            let _ = writeln!(out, "{:<width$}  {}", label, value, width = width);
        }
        out.push('\n');
    }
    Ok(out)
}

fn render_table(records: &[&Record], projection: &Projection) -> Result<String, OutputError> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(projection.labels.clone());
    for record in records {
        table.add_row(projection.row(record)?);
    }
    Ok(format!("{}\n", table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Priority;

    fn records() -> Vec<Record> {
        vec![
            Record {
                record_id: 1,
                record_type: "A".into(),
                content: "1.1.1.1".into(),
                subdomain: "@".into(),
                ttl: 600,
                ..Default::default()
            },
            Record {
                record_id: 22,
                record_type: "MX".into(),
                content: "mx.yandex.net.".into(),
                subdomain: "@".into(),
                priority: Priority::Number(10),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("LIST".parse::<Format>().unwrap(), Format::List);
        assert_eq!("table".parse::<Format>().unwrap(), Format::Table);
        assert_eq!(
            "unknown".parse::<Format>(),
            Err(OutputError::UnknownFormat("unknown".to_string()))
        );
    }

    #[test]
    fn json_is_passed_through_verbatim() {
        let body = "{\"success\": \"ok\",  \"records\": [] }\n";
        let records = records();
        let refs: Vec<&Record> = records.iter().collect();
        let projection = Projection::new("id").unwrap();
        let out = render(Format::Json, body, &refs, &projection).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn list_prints_one_line_per_property_and_a_blank_line() {
        let records = records();
        let refs: Vec<&Record> = records.iter().collect();
        let projection = Projection::new("id,content").unwrap();
        let out = render(Format::List, "", &refs, &projection).unwrap();
        assert_eq!(
            out,
            "Id       1\nContent  1.1.1.1\n\nId       22\nContent  mx.yandex.net.\n\n"
        );
    }

    #[test]
    fn table_has_header_and_one_row_per_record() {
        let records = records();
        let refs: Vec<&Record> = records.iter().collect();
        let projection = Projection::new("id,type,priority").unwrap();
        let out = render(Format::Table, "", &refs, &projection).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.first(), Some(&"+----+------+----------+"));
        assert_eq!(lines.last(), Some(&"+----+------+----------+"));
        assert!(lines.contains(&"| Id | Type | Priority |"));
        assert!(lines.contains(&"| 1  | A    |          |"));
        assert!(lines.contains(&"| 22 | MX   | 10       |"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn table_columns_fit_wide_characters() {
        let records = vec![Record {
            record_id: 5,
            record_type: "TXT".into(),
            content: "日本語".into(),
            ..Default::default()
        }];
        let refs: Vec<&Record> = records.iter().collect();
        let projection = Projection::new("id,content").unwrap();
        let out = render(Format::Table, "", &refs, &projection).unwrap();
        assert!(out.contains("| Content |"));
        assert!(out.contains("| 日本語  |"));
    }

    #[test]
    fn unknown_property_is_rejected_when_resolving_labels() {
        assert_eq!(
            Projection::new("id,bogus").unwrap_err(),
            OutputError::UnknownProperty("bogus".to_string())
        );
    }

    #[test]
    fn empty_record_set_renders_header_only() {
        let projection = Projection::new("id").unwrap();
        let out = render(Format::Table, "", &[], &projection).unwrap();
        assert!(out.contains("| Id |"));
        assert_eq!(out.lines().filter(|l| l.starts_with('|')).count(), 1);
        assert_eq!(projection.labels, vec!["Id"]);
    }
}
