//! UI primitives for the Spendy CLI.
//!
//! - **Context**: Output mode resolution and terminal detection
//! - **Theme**: Badges, styles, bar glyphs
//! - **Render**: Tables, headers, receipts, hints, bars
//! - **Format**: Money, dates, and string utilities

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::{OutputMode, Terminal, UiContext};
pub use theme::Badge;

pub use render::{
    badge, bar, blank_line, header, hint, kv, print, print_error, receipt, simple_table, Column,
};

pub use format::{format_money, format_percent, relative_day, truncate};
