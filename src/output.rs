//! Rendering of command results and errors
//!
//! Every command ends here, so success and failure look the same regardless
//! of which API call produced them.

use colored::*;
use serde_json::{Value, json};

/// Print a command outcome as text or JSON
///
/// Text errors go to stderr; in JSON mode everything goes to stdout so the
/// output stays machine-readable.
pub fn print_output(json: bool, outcome: &anyhow::Result<Value>) {
    match outcome {
        Ok(resource) => println!("{}", render_resource(json, resource)),
        Err(error) if json => println!("{}", render_error(true, error)),
        Err(error) => eprintln!("{}", render_error(false, error)),
    }
}

pub fn render_resource(json: bool, resource: &Value) -> String {
    if json {
        return serde_json::to_string_pretty(resource).unwrap_or_else(|_| resource.to_string());
    }

    match resource {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{}: {}", key.bold(), render_value(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_value(other),
    }
}

pub fn render_error(json: bool, error: &anyhow::Error) -> String {
    // `{:#}` includes the context chain on one line
    let message = format!("{:#}", error);
    if json {
        let body = json!({ "error": message });
        serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
    } else {
        format!("{} {}", "Error:".red().bold(), message)
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
