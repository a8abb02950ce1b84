use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a notice on stderr unless `--quiet`.
pub fn notice(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects render as a key/value table followed by one table per array of
/// objects they hold (`entries`, `audit`); arrays render as one row per item.
fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_rows(items)),
        Value::Object(map) => {
            let mut rows = Vec::new();
            let mut sections = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if items.iter().all(Value::is_object) => {
                        sections.push(format!("{key}:\n{}", render_rows(items)));
                    }
                    other => rows.push(vec![key.clone(), to_cell(other)]),
                }
            }
            let mut out = table::render_table(&["key", "value"], &rows, options());
            for section in sections {
                out.push_str("\n\n");
                out.push_str(&section);
            }
            Ok(out)
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![to_cell(scalar)]],
            options(),
        )),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        let rows = items.iter().map(|item| vec![to_cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), to_cell))
                .collect()
        })
        .collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, options())
}

/// Flatten nested values into one cell. Small objects such as names and
/// stats become `key=value` pairs.
fn to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(to_cell).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{key}={}", to_cell(value)))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
