//! Output formatting module
//!
//! Renders workspaces as tfe_workspace resources, prints totals and writes
//! line-per-record export files.

mod csv;
mod report;
mod workspaces;

pub use self::csv::export_lines;
pub use self::report::render_report;
pub use self::workspaces::{quote_tags, render_workspace_block};
