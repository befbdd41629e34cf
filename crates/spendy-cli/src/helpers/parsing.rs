//! Parsing helpers for amounts, output formats, and timezones.

use chrono_tz::Tz;

use crate::errors::CliError;

/// Output format requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse an amount typed on the command line.
///
/// Accepts an optional leading currency sign (`$12.50`). Range checks are
/// left to the ledger so every entry point shares one rule.
pub fn parse_amount(value: &str) -> anyhow::Result<f64> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .replace(',', "");
    digits.parse::<f64>().map_err(|_| {
        CliError::invalid_input(format!("Invalid amount: {} (expected a number)", value)).into()
    })
}

/// Parse a timezone name. `auto` (or blank) means the system zone.
pub fn parse_timezone(value: &str) -> anyhow::Result<Option<Tz>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    trimmed.parse::<Tz>().map(Some).map_err(|_| {
        CliError::invalid_input(format!(
            "Unknown timezone: {} (use an IANA name like Europe/Berlin, or auto)",
            trimmed
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("yaml")).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount(" $4.20 ").unwrap(), 4.2);
        assert_eq!(parse_amount("1,250.00").unwrap(), 1250.0);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        let err = parse_amount("lots").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("auto").unwrap(), None);
        assert_eq!(parse_timezone("").unwrap(), None);
        assert_eq!(
            parse_timezone("Europe/Berlin").unwrap(),
            Some(chrono_tz::Europe::Berlin)
        );
        assert!(parse_timezone("Mars/Olympus").is_err());
    }
}
