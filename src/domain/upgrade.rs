//! # nbformat v3 Upgrade
//!
//! Rewrites a v3 document (cells grouped in worksheets) into the v4 layout
//! so it can be edited and saved like any other notebook.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Minor version stamped on upgraded documents, the last v4 minor that
/// does not require cell ids.
pub const UPGRADED_MINOR: u64 = 4;

/// v3 output keys and the mime types they become in v4.
const MIME_ALIASES: &[(&str, &str)] = &[
    ("text", "text/plain"),
    ("html", "text/html"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpeg", "image/jpeg"),
    ("latex", "text/latex"),
    ("json", "application/json"),
    ("javascript", "application/javascript"),
];

/// Keys that stay on a v4 rich output; everything else moves into `data`.
const OUTPUT_KEYS: &[&str] = &["output_type", "execution_count", "metadata", "data"];

/// Flattens all worksheets into `cells`, upgrades each cell and output and
/// sets `nbformat` to 4.
pub fn v3_to_v4(doc: &mut Map<String, Value>) -> Result<()> {
    let worksheets = match doc.remove("worksheets") {
        None => Vec::new(),
        Some(Value::Array(worksheets)) => worksheets,
        Some(_) => bail!("v3 notebook `worksheets` is not a list"),
    };

    let mut cells = Vec::new();
    for worksheet in worksheets {
        let ws_cells = worksheet
            .get("cells")
            .and_then(Value::as_array)
            .context("v3 worksheet has no `cells` list")?;
        cells.extend(ws_cells.iter().cloned().map(upgrade_cell));
    }

    if let Some(Value::Object(metadata)) = doc.get_mut("metadata") {
        metadata.remove("name");
        metadata.remove("signature");
    }

    doc.insert("cells".into(), Value::Array(cells));
    doc.insert("nbformat".into(), Value::from(4u64));
    doc.insert("nbformat_minor".into(), Value::from(UPGRADED_MINOR));
    Ok(())
}

fn upgrade_cell(cell: Value) -> Value {
    let Value::Object(mut cell) = cell else {
        return cell;
    };

    cell.entry("metadata")
        .or_insert_with(|| Value::Object(Map::new()));

    let cell_type = cell
        .get("cell_type")
        .and_then(Value::as_str)
        .map(str::to_owned);
    match cell_type.as_deref() {
        Some("code") => {
            cell.remove("language");
            if let Some(collapsed) = cell.remove("collapsed")
                && let Some(Value::Object(metadata)) = cell.get_mut("metadata")
            {
                metadata.insert("collapsed".into(), collapsed);
            }

            let source = cell.remove("input").unwrap_or_else(|| Value::from(""));
            cell.insert("source".into(), source);
            let count = cell.remove("prompt_number").unwrap_or(Value::Null);
            cell.insert("execution_count".into(), count);

            let outputs = match cell.remove("outputs") {
                Some(Value::Array(outputs)) => outputs.into_iter().map(upgrade_output).collect(),
                _ => Vec::new(),
            };
            cell.insert("outputs".into(), Value::Array(outputs));
        }
        Some("heading") => {
            let level = cell.remove("level").and_then(|l| l.as_u64()).unwrap_or(1);
            let single_line = source_text(cell.get("source"))
                .lines()
                .collect::<Vec<_>>()
                .join(" ");
            let hashes = "#".repeat(usize::try_from(level).unwrap_or(1));
            cell.insert("cell_type".into(), Value::from("markdown"));
            cell.insert("source".into(), Value::from(format!("{hashes} {single_line}")));
        }
        Some("html") => {
            cell.insert("cell_type".into(), Value::from("markdown"));
        }
        _ => {}
    }

    Value::Object(cell)
}

fn upgrade_output(output: Value) -> Value {
    let Value::Object(mut output) = output else {
        return output;
    };

    let output_type = output
        .get("output_type")
        .and_then(Value::as_str)
        .map(str::to_owned);
    match output_type.as_deref() {
        Some(kind @ ("pyout" | "display_data")) => {
            if kind == "pyout" {
                output.insert("output_type".into(), Value::from("execute_result"));
                let count = output.remove("prompt_number").unwrap_or(Value::Null);
                output.insert("execution_count".into(), count);
            }

            let mut data = match output.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            };
            let moved: Vec<String> = output
                .keys()
                .filter(|key| !OUTPUT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect();
            for key in moved {
                if let Some(value) = output.remove(&key) {
                    data.insert(key, value);
                }
            }
            rename_mime_keys(&mut data);

            let parsed_json = match data.get("application/json") {
                Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).ok(),
                _ => None,
            };
            if let Some(parsed) = parsed_json {
                data.insert("application/json".into(), parsed);
            }

            let mut metadata = match output.remove("metadata") {
                Some(Value::Object(metadata)) => metadata,
                _ => Map::new(),
            };
            rename_mime_keys(&mut metadata);

            output.insert("data".into(), Value::Object(data));
            output.insert("metadata".into(), Value::Object(metadata));
        }
        Some("pyerr") => {
            output.insert("output_type".into(), Value::from("error"));
        }
        Some("stream") => {
            let name = output
                .remove("stream")
                .unwrap_or_else(|| Value::from("stdout"));
            output.insert("name".into(), name);
        }
        _ => {}
    }

    Value::Object(output)
}

fn rename_mime_keys(map: &mut Map<String, Value>) {
    for (alias, mime) in MIME_ALIASES {
        if let Some(value) = map.remove(*alias) {
            map.insert((*mime).to_string(), value);
        }
    }
}

/// v3 sources may be a single string or a list of lines.
fn source_text(source: Option<&Value>) -> String {
    match source {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(lines)) => lines.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}
