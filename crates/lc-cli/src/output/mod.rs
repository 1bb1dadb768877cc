use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// One compact JSON document per line, each terminated by `\n`.
pub fn to_ndjson<T: Serialize>(items: &[T]) -> anyhow::Result<String> {
    let mut out = String::new();
    for item in items {
        out.push_str(&serde_json::to_string(item)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    let mut rows = Vec::new();
    match &value {
        Value::Object(_) => flatten_into(&mut rows, None, &value),
        scalar => rows.push(vec![String::from("value"), value_to_cell(scalar)]),
    }
    Ok(table::render_key_value_table(&rows, options))
}

/// Nested objects become dotted keys, so `hours.sleep` sits next to `score`.
fn flatten_into(rows: &mut Vec<Vec<String>>, prefix: Option<&str>, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let key = prefix.map_or_else(|| key.clone(), |prefix| format!("{prefix}.{key}"));
                flatten_into(rows, Some(&key), nested);
            }
        }
        leaf => rows.push(vec![
            prefix.unwrap_or("value").to_string(),
            value_to_cell(leaf),
        ]),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
