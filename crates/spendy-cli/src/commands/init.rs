use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use spendy_core::VERSION;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, SpendyConfig, StorageBackend, DEFAULT_CURRENCY};
use crate::errors::CliError;
use crate::helpers::parse_timezone;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

const BACKEND_CHOICES: [&str; 2] = [
    "file    (one JSON document, easy to back up)",
    "sqlite  (single database file)",
];

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui(false, None);
    let interactive = ui_ctx.is_tty && std::io::stdin().is_terminal();
    let effective_no_input = args.no_input || !interactive;

    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    if !ctx.quiet() && !effective_no_input && ui_ctx.mode.is_pretty() {
        let title = styled("Spendy", styles::bold(), ui_ctx.color);
        let version = styled(&format!("v{}", VERSION), styles::dim(), ui_ctx.color);
        println!("{} {} \u{00B7} init\n", title, version);
    }

    let theme = ColorfulTheme::default();

    let backend = match args.backend.as_deref() {
        Some(value) => StorageBackend::parse(value)
            .map_err(|e| CliError::invalid_input(e.to_string()))?,
        None if effective_no_input => StorageBackend::default(),
        None => {
            let choice = Select::with_theme(&theme)
                .with_prompt("Storage backend")
                .default(0)
                .items(&BACKEND_CHOICES)
                .interact()?;
            if choice == 1 {
                StorageBackend::Sqlite
            } else {
                StorageBackend::File
            }
        }
    };

    let currency = match args.currency.clone() {
        Some(value) => Some(value),
        None if effective_no_input => None,
        None => {
            let input: String = Input::with_theme(&theme)
                .with_prompt("Currency symbol")
                .default(DEFAULT_CURRENCY.to_string())
                .interact_text()?;
            Some(input)
        }
    };

    let timezone = match args.timezone.as_deref() {
        Some(value) => parse_timezone(value)?.map(|tz| tz.name().to_string()),
        None => None,
    };

    let data_dir = ctx.data_dir()?;
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        )
    })?;

    let config = SpendyConfig::new(backend, data_dir.clone(), currency, timezone);
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Data directory {}", data_dir.display()),
                    ),
                );
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Config written to {}", config_path.display()),
                    ),
                );
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        "spendy add 12.50 -c \"Food & Drinks\"  \u{00B7}  spendy summary",
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("backend={}", config.storage.backend.as_str());
                println!("data_dir={}", config.storage.data_dir);
                println!("config_path={}", config_path.display());
            }
        }
    }

    Ok(())
}
