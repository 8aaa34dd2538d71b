//! Loading JSON/YAML records.

use crate::error::{InputError, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a document, JSON first. YAML is tried for `.yaml`/`.yml` files and
/// for stdin input that is not valid JSON.
pub fn parse_document(content: &str, yaml_hint: bool) -> Result<Value> {
    if yaml_hint {
        return Ok(serde_yaml::from_str(content).map_err(InputError::from)?);
    }
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(json_err) => {
            log::debug!("input is not JSON ({}), trying YAML", json_err);
            serde_yaml::from_str(content).map_err(|_| InputError::from(json_err).into())
        }
    }
}

/// Read `path`, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) if path != Path::new("-") => {
            let content = fs::read_to_string(path)?;
            parse_document(&content, is_yaml(path))
        }
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            parse_document(&content, false)
        }
    }
}

/// Arrays are row lists; a single object is one row.
pub fn into_rows(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(vec![document]),
        other => Err(InputError::UnexpectedShape {
            expected: "an array or an object",
            found: kind(&other),
        }
        .into()),
    }
}

/// The object itself, or element `index` of an array.
pub fn select_record(document: Value, index: usize) -> Result<Value> {
    let mut rows = into_rows(document)?;
    let len = rows.len();
    if index >= len {
        return Err(InputError::IndexOutOfRange { index, len }.into());
    }
    Ok(rows.swap_remove(index))
}
