//! Key-value renderer for a single record.
//!
//! ```text
//! Name:      trainer-0
//! Usage:
//!   CPU:     2
//!   Memory:  1.5 KiB
//! ```
//!
//! Unlike the table, leaves that render to an empty string are omitted, and a
//! boxed group is only printed when something below it is.

use super::error::ViewError;
use super::extract::render_leaf;
use super::format::FormatterRegistry;
use super::options::ViewOptions;
use super::schema::{Describe, FieldNode, Schema, TypeDescriptor};
use super::value::Record;
use super::visibility::Visibility;
use std::io::Write;

const INDENT: &str = "  ";

/// Renders one record as an indented listing.
#[derive(Debug)]
pub struct DetailView {
    plan: Option<(Schema, Visibility)>,
    formatters: FormatterRegistry,
    error: Option<ViewError>,
}

impl DetailView {
    pub fn new(descriptor: &TypeDescriptor, options: ViewOptions) -> Self {
        let ViewOptions {
            directive,
            formatters,
        } = options;

        match Schema::build(descriptor, &formatters) {
            Ok(schema) => {
                let visibility = Visibility::resolve(&schema, &directive);
                Self {
                    plan: Some((schema, visibility)),
                    formatters,
                    error: None,
                }
            }
            Err(err) => Self {
                plan: None,
                formatters,
                error: Some(err.into()),
            },
        }
    }

    pub fn of<T: Describe>(options: ViewOptions) -> Self {
        Self::new(&T::descriptor(), options)
    }

    /// Writes the listing for `record`. Each top-level field is written as soon
    /// as it is complete; check [`error`](Self::error) afterwards.
    pub fn render<W, R>(&mut self, sink: &mut W, record: &R) -> &mut Self
    where
        W: Write + ?Sized,
        R: Record + ?Sized,
    {
        if self.error.is_none()
            && let Err(err) = self.write_record(sink, record)
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

    fn write_record<W, R>(&self, sink: &mut W, record: &R) -> Result<(), ViewError>
    where
        W: Write + ?Sized,
        R: Record + ?Sized,
    {
        let Some((schema, visibility)) = &self.plan else {
            return Ok(());
        };
        let record: &dyn Record = &record;

        for node in &schema.root().children {
            let mut lines = Vec::new();
            self.collect(node, visibility, record, 0, &mut lines)?;
            for line in lines {
                writeln!(sink, "{}", line)?;
            }
        }
        Ok(())
    }

    fn collect(
        &self,
        node: &FieldNode,
        visibility: &Visibility,
        record: &dyn Record,
        depth: usize,
        lines: &mut Vec<String>,
    ) -> Result<(), ViewError> {
        let Some(group) = &node.group else {
            if visibility.is_shown(node) {
                let text = render_leaf(node, record, &self.formatters)?;
                if !text.is_empty() {
                    lines.push(format!("{}{}:\t{}", INDENT.repeat(depth), node.title, text));
                }
            }
            return Ok(());
        };

        if group.flatten {
            for child in &node.children {
                self.collect(child, visibility, record, depth, lines)?;
            }
            return Ok(());
        }

        let mut nested = Vec::new();
        for child in &node.children {
            self.collect(child, visibility, record, depth + 1, &mut nested)?;
        }
        if !nested.is_empty() {
            let name = if group.name.is_empty() {
                &node.title
            } else {
                &group.name
            };
            lines.push(format!("{}{}:", INDENT.repeat(depth), name));
            lines.append(&mut nested);
        }
        Ok(())
    }
}
