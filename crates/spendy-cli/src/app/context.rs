//! Application context for the Spendy CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and opens the
//! ledger on demand.

use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use once_cell::unsync::OnceCell;
use tracing::debug;

use spendy_core::aggregate::Summary;
use spendy_core::{Expense, Hydration, Ledger, StorageAdapter};

use crate::cli::Cli;
use crate::config::{SpendyConfig, DEFAULT_CURRENCY};
use crate::helpers::{parse_timezone, OutputFormat};
use crate::ui::{OutputMode, Terminal, UiContext};

use super::resolver::{load_config, open_storage, resolve_data_dir};

/// Ledger type used by command handlers.
pub type CliLedger = Ledger<Box<dyn StorageAdapter>>;

/// The current instant in the zone that "today" and "this month" follow.
///
/// The zone itself is kept, not just today's offset, so past expenses are
/// placed on the calendar with the offset that applied when they happened.
#[derive(Debug, Clone)]
pub enum Now {
    Zoned(DateTime<chrono_tz::Tz>),
    Local(DateTime<Local>),
}

impl Now {
    pub fn summarize(&self, expenses: &[Expense]) -> Summary {
        match self {
            Now::Zoned(now) => Summary::compute(expenses, now),
            Now::Local(now) => Summary::compute(expenses, now),
        }
    }
}

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<SpendyConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one has been written with `spendy init`.
    pub fn config(&self) -> anyhow::Result<Option<&SpendyConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    /// Build the UI context for a command's output flags.
    pub fn ui(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let term = Terminal::detect();
        let mode = OutputMode::resolve(json, format, &term);
        UiContext::new(&term, mode, self.cli.no_color, self.cli.ascii)
    }

    /// Currency symbol for printed amounts.
    pub fn currency(&self) -> anyhow::Result<String> {
        Ok(self
            .config()?
            .map(|c| c.ui.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
    }

    /// Current time in the configured timezone, or the system's local zone.
    pub fn now(&self) -> anyhow::Result<Now> {
        let configured = self.config()?.and_then(|c| c.ui.timezone.as_deref());
        match configured.map(parse_timezone).transpose()?.flatten() {
            Some(tz) => Ok(Now::Zoned(Utc::now().with_timezone(&tz))),
            None => Ok(Now::Local(Local::now())),
        }
    }

    /// Data directory after flag, config and default resolution.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Open the configured storage and hydrate a ledger from it.
    pub fn open_ledger(&self) -> anyhow::Result<(CliLedger, Hydration)> {
        let backend = self
            .config()?
            .map(|c| c.storage.backend)
            .unwrap_or_default();
        let data_dir = self.data_dir()?;
        let storage = open_storage(backend, &data_dir)?;
        debug!(
            backend = backend.as_str(),
            location = %storage.describe(),
            "opening ledger"
        );
        Ok(Ledger::open(storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;
    use spendy_core::ExpenseId;

    fn expense_at(date: DateTime<Utc>) -> Expense {
        Expense {
            id: ExpenseId::from("nov-first"),
            amount: 10.0,
            category: "Bills".to_string(),
            note: "Rent".to_string(),
            date,
        }
    }

    #[test]
    fn test_month_window_follows_dst_rules() {
        // 00:30 EDT on Nov 1, viewed on Nov 10 after the switch to EST.
        let early = expense_at(Utc.with_ymd_and_hms(2024, 11, 1, 4, 30, 0).unwrap());
        let now = Now::Zoned(
            Utc.with_ymd_and_hms(2024, 11, 10, 17, 0, 0)
                .unwrap()
                .with_timezone(&New_York),
        );

        let summary = now.summarize(&[early]);
        assert_eq!(summary.this_month, 10.0);
        assert_eq!(summary.this_month_count, 1);
        assert_eq!(summary.today, 0.0);
    }

    #[test]
    fn test_today_window_follows_dst_rules() {
        // 00:30 EDT on Nov 3 is still Nov 3 once the clocks fall back.
        let early = expense_at(Utc.with_ymd_and_hms(2024, 11, 3, 4, 30, 0).unwrap());
        let now = Now::Zoned(
            Utc.with_ymd_and_hms(2024, 11, 3, 17, 0, 0)
                .unwrap()
                .with_timezone(&New_York),
        );

        let summary = now.summarize(&[early]);
        assert_eq!(summary.today, 10.0);
        assert_eq!(summary.today_count, 1);
    }
}
