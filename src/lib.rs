//! # kreport
//!
//! Renders cluster and metrics records as text reports.
//!
//! The [`view`] module is the projection engine: a record type is described
//! once (titles, default text, formatters, groups) and can then be rendered as
//! an aligned table or as an indented key-value listing, with show/hide paths
//! selecting which fields appear. The `kreport` binary drives the engine from
//! layout files and JSON/YAML input.
//!
//! ## Example
//!
//! ```rust
//! use kreport::view::{DetailView, Field, TypeDescriptor, ViewOptions};
//! use serde_json::json;
//!
//! let job = TypeDescriptor::new("Job")
//!     .field(Field::new("name").with_title("Name"))
//!     .field(Field::new("elapsed").with_title("Elapsed").with_format("duration"));
//!
//! let mut out = Vec::new();
//! let mut view = DetailView::new(&job, ViewOptions::new());
//! view.render(&mut out, &json!({"name": "trainer-0", "elapsed": 3661}));
//! assert!(view.error().is_none());
//! assert_eq!(String::from_utf8(out).unwrap(), "Name:\ttrainer-0\nElapsed:\t01:01:01\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod layout;
pub mod view;

// Re-export commonly used types and functions
pub use error::{KreportError, Result};
pub use layout::Layout;
use cli::Commands;
use config::types::Config;
use std::io::Write;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command<W: Write>(command: Commands, config: &Config, out: W) -> Result<()> {
    match command {
        Commands::Table { source, visibility } => {
            handlers::handle_table(&source, &visibility, config, out)
        }
        Commands::Detail {
            source,
            visibility,
            index,
        } => handlers::handle_detail(&source, &visibility, index, config, out),
        Commands::Check { layout, visibility } => {
            handlers::handle_check(&layout, &visibility, config, out)
        }
    }
}
