//! Interactive input for expense creation.

use std::io::{self, IsTerminal};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use spendy_core::KNOWN_CATEGORIES;

use crate::errors::CliError;

/// Resolve the category for a new expense.
///
/// A `--category` value is used as given. Otherwise the known categories are
/// offered in a picker, which requires a terminal and no `--no-input`.
pub fn resolve_category(category: Option<String>, no_input: bool) -> anyhow::Result<String> {
    if let Some(value) = category {
        return Ok(value);
    }

    let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();
    if no_input || !interactive {
        return Err(CliError::invalid_input(
            "Category is required. Pass --category (see `spendy categories`).",
        )
        .into());
    }

    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&KNOWN_CATEGORIES)
        .default(0)
        .interact()?;

    KNOWN_CATEGORIES
        .get(choice)
        .map(|c| c.to_string())
        .ok_or_else(|| anyhow::anyhow!("Category selection out of range"))
}
