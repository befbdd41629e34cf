//! Input and parsing helper functions for the CLI.
//!
//! - Category prompting (`input`)
//! - Amount, format, and timezone parsing (`parsing`)

mod input;
mod parsing;

pub use input::resolve_category;
pub use parsing::{parse_amount, parse_output_format, parse_timezone, OutputFormat};
