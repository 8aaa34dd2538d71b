// Handler modules
pub mod check;
pub mod input;
pub mod render;

// Re-export all handler functions
pub use check::handle_check;
pub use input::{parse_document, read_input};
pub use render::{handle_detail, handle_table, view_options};
