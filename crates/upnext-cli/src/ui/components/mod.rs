//! UI components for the list view
//!
//! Components return one element per screen row.

mod celebration;
mod details;
mod empty;
mod header;
mod help;
mod input_form;
pub mod panel;
mod status_bar;
mod tabs;
mod task_table;

pub use celebration::render_celebration;
pub use details::{ListPosition, render_active_details, render_completed_details};
pub use empty::render_empty_state;
pub use header::render_header;
pub use help::{render_full_help, render_help_bar};
pub use input_form::render_input_form;
pub use status_bar::render_status_bar;
pub use tabs::{TabCounts, render_tabs};
pub use task_table::{ColumnWidths, TableRow, render_table};
