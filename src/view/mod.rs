//! # View Module
//!
//! Declarative projection of nested records into text reports.
//!
//! A record type is described once as a [`TypeDescriptor`] (field order,
//! titles, default text, formatter ids, groups) and exposes its data through
//! the [`Record`] accessor. A render request then flows through:
//!
//! 1. [`Schema::build`]: descriptor → field tree, formatter ids validated
//! 2. [`Visibility::resolve`]: show/hide lists → per-node visibility
//! 3. [`TableView`] (many records, one row each) or [`DetailView`]
//!    (one record, indented `Title: value` lines)
//!
//! Each leaf value is located with [`extract`] and turned into text by its
//! [`Formatter`] or the generic [`stringify`].
//!
//! ```rust
//! use kreport::view::{Field, GroupSpec, TableView, TabAligner, TypeDescriptor, ViewOptions};
//! use serde_json::json;
//! use std::io::Write;
//!
//! let usage = TypeDescriptor::new("Usage")
//!     .field(Field::new("memory").with_title("MEM").with_format("byte-size"));
//! let job = TypeDescriptor::new("Job")
//!     .field(Field::new("name").with_title("NAME"))
//!     .field(Field::record("usage", usage).with_group(GroupSpec::boxed("Usage")));
//!
//! let rows = vec![json!({"name": "trainer-0", "usage": {"memory": 1536}})];
//! let mut out = TabAligner::new(Vec::new());
//! let mut view = TableView::new(&job, ViewOptions::new());
//! view.render(&mut out, &rows);
//! assert!(view.error().is_none());
//! out.flush().unwrap();
//! ```

mod error;
mod extract;
mod format;
mod options;
mod schema;
mod sink;
mod table;
mod tree;
mod utils;
mod value;
mod visibility;

pub use error::{FormatError, SchemaError, ViewError};
pub use extract::extract;
pub use format::{
    BYTE_SIZE, DURATION, Formatter, FormatterRegistry, PERCENTAGE, format_byte_size,
    format_duration, format_percentage, stringify,
};
pub use options::ViewOptions;
pub use schema::{Describe, Field, FieldNode, GroupInfo, GroupSpec, Schema, TypeDescriptor};
pub use sink::TabAligner;
pub use table::{COLUMN_SEPARATOR, Column, ColumnGroup, GROUP_MARKER, TableView};
pub use tree::DetailView;
pub use utils::visual_width;
pub use value::{Record, ToValue, Value};
pub use visibility::{Visibility, VisibilityDirective};
