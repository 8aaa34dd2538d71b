//! Value extraction and per-leaf text rendering.

use super::error::{SchemaError, ViewError};
use super::format::{FormatterRegistry, stringify};
use super::schema::FieldNode;
use super::value::{Record, Value};

/// Follows `selector` from `record`, unwrapping indirection after every hop.
///
/// Returns `None` ("absent") as soon as a hop yields nil or a non-record value
/// with hops still remaining. An empty selector yields the record itself.
pub fn extract<'a>(record: &'a dyn Record, selector: &[String]) -> Option<Value<'a>> {
    let Some((last, hops)) = selector.split_last() else {
        return Some(Value::Record(record));
    };

    let mut current = record;
    for key in hops {
        match concrete(current.field(key))? {
            Value::Record(next) => current = next,
            _ => return None,
        }
    }
    concrete(current.field(last))
}

fn concrete(mut value: Value<'_>) -> Option<Value<'_>> {
    loop {
        match value {
            Value::Nil => return None,
            Value::Ref(inner) => value = *inner,
            other => return Some(other),
        }
    }
}

/// Extract, format (or stringify), then substitute the default text if the
/// result is empty. Absent values never reach a formatter.
pub(crate) fn render_leaf(
    node: &FieldNode,
    record: &dyn Record,
    formatters: &FormatterRegistry,
) -> Result<String, ViewError> {
    let text = match extract(record, &node.selector) {
        None => String::new(),
        Some(value) => match node.formatter.as_deref() {
            Some(id) => {
                let formatter = formatters.get(id).ok_or_else(|| SchemaError::UnknownFormatter {
                    field: node.selector_path(),
                    formatter: id.to_string(),
                })?;
                formatter
                    .apply(&value, record)
                    .map_err(|source| ViewError::Format {
                        field: node.selector_path(),
                        source,
                    })?
            }
            None => stringify(&value),
        },
    };

    if text.is_empty() {
        Ok(node.default_text.clone())
    } else {
        Ok(text)
    }
}
