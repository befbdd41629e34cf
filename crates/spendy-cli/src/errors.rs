//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. Handlers return them wrapped in
//! `anyhow::Error`; `main` recovers the code with [`exit_code_for`].

use std::fmt;

use spendy_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, expense)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error surfaced by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<LedgerError>() {
        Some(LedgerError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(LedgerError::Validation(_)) | Some(LedgerError::InvalidInput(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Expense not found", "Hint: run `spendy list`");
        assert_eq!(err.to_string(), "Expense not found\nHint: run `spendy list`");
    }

    #[test]
    fn test_exit_codes_through_anyhow() {
        let not_found = anyhow::Error::new(CliError::not_found("x", "y"));
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid = anyhow::Error::new(LedgerError::Validation("bad".to_string()));
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), exit_codes::FAILURE);
    }
}
