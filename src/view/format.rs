//! Value formatters.
//!
//! A formatter turns one extracted value (plus the record it came from) into
//! display text. Three formatters are always available:
//!
//! | id           | input            | example                    |
//! |--------------|------------------|----------------------------|
//! | `byte-size`  | number of bytes  | `1536` → `1.5 KiB`         |
//! | `percentage` | number           | `55` → `55.0%`             |
//! | `duration`   | seconds          | `3661` → `01:01:01`        |
//!
//! Callers can register their own formatters (or shadow the defaults) through
//! [`FormatterRegistry::register`].

use super::error::{FormatError, SchemaError};
use super::value::{Record, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const BYTE_SIZE: &str = "byte-size";
pub const PERCENTAGE: &str = "percentage";
pub const DURATION: &str = "duration";

type FormatFn = dyn Fn(&Value<'_>, &dyn Record) -> Result<String, FormatError> + Send + Sync;

/// A shareable, pure formatting function.
#[derive(Clone)]
pub struct Formatter(Arc<FormatFn>);

impl Formatter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value<'_>, &dyn Record) -> Result<String, FormatError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, value: &Value<'_>, record: &dyn Record) -> Result<String, FormatError> {
        (self.0)(value, record)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

static DEFAULT_FORMATTERS: Lazy<HashMap<&'static str, Formatter>> = Lazy::new(|| {
    let mut formatters = HashMap::new();
    formatters.insert(BYTE_SIZE, Formatter::new(format_byte_size));
    formatters.insert(PERCENTAGE, Formatter::new(format_percentage));
    formatters.insert(DURATION, Formatter::new(format_duration));
    formatters
});

/// Caller overrides layered on top of the process-wide defaults.
#[derive(Debug, Clone, Default)]
pub struct FormatterRegistry {
    overrides: HashMap<String, Formatter>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or shadow) a formatter.
    pub fn register(mut self, id: impl Into<String>, formatter: Formatter) -> Self {
        self.insert(id, formatter);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, formatter: Formatter) {
        self.overrides.insert(id.into(), formatter);
    }

    /// Make `alias` resolve to whatever `target` currently resolves to.
    pub fn with_alias(mut self, alias: impl Into<String>, target: &str) -> Result<Self, SchemaError> {
        let alias = alias.into();
        let formatter = self
            .get(target)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownFormatter {
                field: alias.clone(),
                formatter: target.to_string(),
            })?;
        self.overrides.insert(alias, formatter);
        Ok(self)
    }

    /// Overrides first, then the defaults.
    pub fn get(&self, id: &str) -> Option<&Formatter> {
        self.overrides
            .get(id)
            .or_else(|| DEFAULT_FORMATTERS.get(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Identifiers of the built-in formatters, sorted.
    pub fn builtin_ids() -> Vec<&'static str> {
        let mut ids: Vec<_> = DEFAULT_FORMATTERS.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn numeric(value: &Value<'_>, formatter: &str) -> Result<f64, FormatError> {
    value.as_f64().ok_or_else(|| {
        FormatError::new(format!(
            "{} expects a number, got {}",
            formatter,
            value.deref().kind()
        ))
    })
}

/// IEC binary units: `500 B`, `1.5 KiB`, `1.0 GiB`.
pub fn format_byte_size(value: &Value<'_>, _record: &dyn Record) -> Result<String, FormatError> {
    const UNIT: f64 = 1024.0;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    let bytes = numeric(value, BYTE_SIZE)?;
    if bytes < UNIT {
        let whole = match value.deref() {
            Value::Int(i) => *i,
            Value::UInt(u) => *u as i64,
            _ => bytes as i64,
        };
        return Ok(format!("{} B", whole));
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp < PREFIXES.len() - 1 {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    Ok(format!("{:.1} {}iB", bytes / div, PREFIXES[exp]))
}

/// One decimal place followed by `%`.
pub fn format_percentage(value: &Value<'_>, _record: &dyn Record) -> Result<String, FormatError> {
    Ok(format!("{:.1}%", numeric(value, PERCENTAGE)?))
}

/// Whole seconds as `HH:MM:SS`; fractions are truncated.
pub fn format_duration(value: &Value<'_>, _record: &dyn Record) -> Result<String, FormatError> {
    let seconds = numeric(value, DURATION)?.trunc();
    if seconds < 0.0 {
        return Err(FormatError::new(format!(
            "{} expects a non-negative number of seconds, got {}",
            DURATION, seconds
        )));
    }
    let total = seconds as u64;
    Ok(format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    ))
}

/// Fallback used for leaves without a formatter.
pub fn stringify(value: &Value<'_>) -> String {
    match value {
        Value::Nil => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::UInt(u) => u.to_string(),
        Value::Float(f) => format!("{:.2}", f),
        Value::Str(s) => s.to_string(),
        Value::List(items) => {
            let parts: Vec<String> = items.iter().map(stringify).collect();
            format!("[{}]", parts.join(" "))
        }
        Value::Record(record) => record.display_text(),
        Value::Ref(inner) => stringify(inner),
    }
}
