//! Tabular renderer.
//!
//! Visible leaves become columns in depth-first order. The header is up to
//! three rows:
//!
//! ```text
//!                 Usage         | Limits
//! NAME    STATUS  CPU    MEM    CPU
//! ----    ------  ---    ---    ---
//! ```
//!
//! The group row only appears when at least one column sits under a boxed
//! group. A label is printed where a run of its columns starts, so a group
//! whose leaves resume after a nested group is labelled again. Cells are separated by `\t`; pair the output with a
//! [`TabAligner`](super::sink::TabAligner) for aligned text.

use super::error::ViewError;
use super::extract::render_leaf;
use super::format::FormatterRegistry;
use super::options::ViewOptions;
use super::schema::{Describe, FieldNode, GroupInfo, Schema, TypeDescriptor};
use super::utils::visual_width;
use super::value::Record;
use super::visibility::Visibility;
use std::io::Write;

/// Separator between cells; the sink treats it as an alignment boundary.
pub const COLUMN_SEPARATOR: &str = "\t";

/// Prefix of every group label after the first one in the row.
pub const GROUP_MARKER: &str = "|";

/// The boxed group a column is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    pub id: usize,
    pub name: String,
}

/// One visible leaf.
#[derive(Debug, Clone)]
pub struct Column {
    node: FieldNode,
    group: Option<ColumnGroup>,
}

impl Column {
    pub fn title(&self) -> &str {
        &self.node.title
    }

    pub fn address(&self) -> String {
        self.node.address()
    }

    pub fn selector_path(&self) -> String {
        self.node.selector_path()
    }

    pub fn formatter(&self) -> Option<&str> {
        self.node.formatter.as_deref()
    }

    pub fn default_text(&self) -> &str {
        &self.node.default_text
    }

    pub fn group(&self) -> Option<&ColumnGroup> {
        self.group.as_ref()
    }
}

/// Renders many records as rows.
#[derive(Debug)]
pub struct TableView {
    columns: Vec<Column>,
    formatters: FormatterRegistry,
    error: Option<ViewError>,
}

impl TableView {
    /// Builds the schema and resolves visibility. A schema error is kept and
    /// reported by [`error`](Self::error); `render` then writes nothing.
    pub fn new(descriptor: &TypeDescriptor, options: ViewOptions) -> Self {
        let ViewOptions {
            directive,
            formatters,
        } = options;

        match Schema::build(descriptor, &formatters) {
            Ok(schema) => {
                let visibility = Visibility::resolve(&schema, &directive);
                let mut columns = Vec::new();
                collect_columns(schema.root(), &visibility, None, &mut columns);
                log::debug!(
                    "table view for '{}': {} of {} leaves visible",
                    descriptor.name(),
                    columns.len(),
                    schema.leaves().len()
                );
                Self {
                    columns,
                    formatters,
                    error: None,
                }
            }
            Err(err) => Self {
                columns: Vec::new(),
                formatters,
                error: Some(err.into()),
            },
        }
    }

    pub fn of<T: Describe>(options: ViewOptions) -> Self {
        Self::new(&T::descriptor(), options)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Writes the header and one row per record.
    ///
    /// Rows are written as soon as they are complete; a formatter error stops
    /// the call and leaves earlier rows in `sink`. Check [`error`](Self::error)
    /// afterwards.
    pub fn render<W, R>(&mut self, sink: &mut W, records: &[R]) -> &mut Self
    where
        W: Write + ?Sized,
        R: Record,
    {
        if self.error.is_none()
            && let Err(err) = self.write_table(sink, records)
        {
            self.error = Some(err);
        }
        self
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<(), ViewError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn write_table<W, R>(&self, sink: &mut W, records: &[R]) -> Result<(), ViewError>
    where
        W: Write + ?Sized,
        R: Record,
    {
        if self.columns.is_empty() {
            return Ok(());
        }

        self.write_header(sink)?;
        for record in records {
            let cells = self
                .columns
                .iter()
                .map(|column| render_leaf(&column.node, record, &self.formatters))
                .collect::<Result<Vec<_>, _>>()?;
            writeln!(sink, "{}", cells.join(COLUMN_SEPARATOR))?;
        }
        Ok(())
    }

    fn write_header<W: Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        if self.columns.iter().any(|column| column.group.is_some()) {
            let mut labelled = false;
            let mut previous: Option<usize> = None;
            let mut cells = Vec::with_capacity(self.columns.len());
            for column in &self.columns {
                let current = column.group.as_ref().map(|g| g.id);
                let cell = match &column.group {
                    // a group resuming after a nested group is labelled again
                    Some(group) if previous != current => {
                        let label = if labelled {
                            format!("{} {}", GROUP_MARKER, group.name)
                        } else {
                            group.name.clone()
                        };
                        labelled = true;
                        label
                    }
                    _ => String::new(),
                };
                previous = current;
                cells.push(cell);
            }
            writeln!(sink, "{}", cells.join(COLUMN_SEPARATOR))?;
        }

        let titles: Vec<&str> = self.columns.iter().map(Column::title).collect();
        writeln!(sink, "{}", titles.join(COLUMN_SEPARATOR))?;

        let underline: Vec<String> = titles
            .iter()
            .map(|title| "-".repeat(visual_width(title)))
            .collect();
        writeln!(sink, "{}", underline.join(COLUMN_SEPARATOR))
    }
}

fn collect_columns(
    node: &FieldNode,
    visibility: &Visibility,
    group: Option<&GroupInfo>,
    out: &mut Vec<Column>,
) {
    for child in &node.children {
        match &child.group {
            Some(info) => {
                let label = if info.flatten { group } else { Some(info) };
                collect_columns(child, visibility, label, out);
            }
            None if visibility.is_shown(child) => out.push(Column {
                node: child.clone(),
                group: group.map(|g| ColumnGroup {
                    id: g.id,
                    name: g.name.clone(),
                }),
            }),
            None => {}
        }
    }
}
