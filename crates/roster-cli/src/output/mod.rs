use std::io::IsTerminal;

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|columns| columns.parse().ok()),
        color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Arrays become one row per element; objects become key/value rows in
/// field order.
fn render_table<T: Serialize + ?Sized>(
    value: &T,
    options: table::TableOptions,
) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["field", "value"];
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    // Columns in first-seen order, which is struct field order.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use roster_core::entities::{EmployeeRecord, EmployeeSummary};
    use roster_core::enums::EmployeeStatus;

    use super::table::TableOptions;
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn summary(id: &str, department: Option<&str>) -> EmployeeSummary {
        EmployeeSummary {
            id: id.into(),
            full_name: "Jo Li".into(),
            email: "jo@x.com".into(),
            department: department.map(str::to_string),
            position: "Eng".into(),
            status: EmployeeStatus::OnLeave,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&summary("emp-1", None), OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "emp-1");
        assert_eq!(parsed["status"], "On Leave");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&[summary("emp-1", None)], OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["fullName"], "Jo Li");
    }

    #[test]
    fn list_table_keeps_field_order() {
        let rows = [summary("emp-1", Some("IT")), summary("emp-2", None)];
        let out = render_table(&rows, PLAIN).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].find("fullName") < lines[0].find("status"));
        assert!(lines[2].contains("emp-1") && lines[2].contains("IT"));
        assert!(lines[3].contains("emp-2") && lines[3].contains('-'));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let rows: Vec<EmployeeSummary> = Vec::new();
        assert_eq!(render_table(&rows, PLAIN).unwrap(), "(no rows)");
    }

    #[test]
    fn record_table_is_key_value() {
        let record = EmployeeRecord {
            id: "emp-1".into(),
            first_name: "Jo".into(),
            ..EmployeeRecord::default()
        };
        let out = render_table(&record, PLAIN).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("field") && lines[0].contains("value"));
        assert!(lines[2].starts_with("id"));
        assert!(out.contains("firstName"));
    }
}
