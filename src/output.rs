//! Rendering extracted parameter lists for the terminal or for tools.

use crate::config::OutputFormat;
use crate::core::ParamEntry;
use serde_json::{Map, Value};

/// Parameters extracted for one function name
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParams {
    pub name: String,
    pub params: Vec<ParamEntry>,
}

/// Render results in the requested format.
///
/// A single function renders as its bare list; several functions are grouped
/// by name (JSON object keyed by name, or a `name(...)` header per function).
pub fn render(results: &[FunctionParams], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(results)),
        OutputFormat::Json => render_json(results),
    }
}

fn render_plain(results: &[FunctionParams]) -> String {
    let mut out = String::new();
    let grouped = results.len() > 1;

    for function in results {
        if grouped {
            out.push_str(&format!("{}({})\n", function.name, function.params.len()));
        }
        for param in &function.params {
            if grouped {
                out.push_str("  ");
            }
            out.push_str(&param.to_string());
            out.push('\n');
        }
    }

    out
}

fn render_json(results: &[FunctionParams]) -> serde_json::Result<String> {
    match results {
        [single] => serde_json::to_string_pretty(&single.params),
        _ => {
            let mut object = Map::new();
            for function in results {
                object.insert(function.name.clone(), serde_json::to_value(&function.params)?);
            }
            serde_json::to_string_pretty(&Value::Object(object))
        }
    }
}
