//! Handler for the `check` command.

use super::render::view_options;
use crate::cli::VisibilityArgs;
use crate::config::types::Config;
use crate::error::Result;
use crate::layout::Layout;
use crate::view::{
    Column, Describe, Field, FormatterRegistry, Record, TabAligner, TableView, ToValue,
    TypeDescriptor, Value, ViewOptions,
};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// One resolved column, itself rendered through a [`TableView`].
#[derive(Debug, Clone)]
struct ColumnRow {
    path: String,
    source: String,
    title: String,
    format: Option<String>,
    group: Option<String>,
    default: String,
}

impl From<&Column> for ColumnRow {
    fn from(column: &Column) -> Self {
        Self {
            path: column.address(),
            source: column.selector_path(),
            title: column.title().to_string(),
            format: column.formatter().map(str::to_string),
            group: column.group().map(|g| g.name.clone()),
            default: column.default_text().to_string(),
        }
    }
}

impl Record for ColumnRow {
    fn field(&self, key: &str) -> Value<'_> {
        match key {
            "path" => self.path.to_value(),
            "source" => self.source.to_value(),
            "title" => self.title.to_value(),
            "format" => self.format.to_value(),
            "group" => self.group.to_value(),
            "default" => self.default.to_value(),
            _ => Value::Nil,
        }
    }
}

impl Describe for ColumnRow {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("ColumnRow")
            .field(Field::new("path").with_title("PATH"))
            .field(Field::new("source").with_title("SOURCE"))
            .field(Field::new("title").with_title("TITLE"))
            .field(Field::new("format").with_title("FORMAT").with_default("-"))
            .field(Field::new("group").with_title("GROUP").with_default("-"))
            .field(Field::new("default").with_title("DEFAULT").with_default("-"))
    }
}

/// Handle the `check` command.
pub fn handle_check<W: Write>(
    layout_path: &Path,
    visibility: &VisibilityArgs,
    config: &Config,
    out: W,
) -> Result<()> {
    let layout = Layout::load(layout_path)?;
    let view = TableView::new(&layout.descriptor(), view_options(config, visibility)?);
    if let Some(err) = view.error() {
        log::debug!("layout '{}' rejected: {}", layout.name, err);
    }
    let columns: Vec<ColumnRow> = view.columns().iter().map(ColumnRow::from).collect();
    view.into_result()?;

    let mut sink = TabAligner::new(out).with_padding(config.output.padding);
    let mut listing = TableView::of::<ColumnRow>(ViewOptions::new());
    listing.render(&mut sink, &columns);
    sink.flush()?;
    listing.into_result()?;

    let name = if layout.name.is_empty() {
        layout_path.display().to_string()
    } else {
        layout.name.clone()
    };
    writeln!(
        sink,
        "{} Layout '{}' is valid: {} visible column(s)",
        "✓".green().bold(),
        name,
        columns.len()
    )?;

    let mut formatters: Vec<&str> = FormatterRegistry::builtin_ids();
    formatters.extend(config.formatters.keys().map(String::as_str));
    writeln!(sink, "  Available formatters: {}", formatters.join(", "))?;
    sink.flush()?;
    Ok(())
}
