//! Output formatting helpers for the CLI.
//!
//! Formatting for expenses and reports in JSON, table, and plain text.

mod json;
mod text;

pub use json::{breakdown_json, expense_json, expenses_json, summary_json};
pub use text::{print_breakdown, print_expense_list, print_summary};
