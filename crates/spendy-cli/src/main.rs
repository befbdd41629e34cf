//! Spendy CLI - a local-first expense tracker for the terminal
//!
//! Thin command layer over `spendy-core`: argument parsing, config
//! resolution, and rendering.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use spendy_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an explicit "Hint:" line off an error message, or suggest one for
/// common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        let hint = error[idx + 1..].trim_start_matches("Hint:").trim();
        return (&error[..idx], Some(hint.to_string()));
    }

    let error_lower = error.to_lowercase();
    let hint = if error_lower.contains("category is required") {
        Some("Run `spendy categories` to see the usual ones.".to_string())
    } else if error_lower.contains("amount") {
        Some("Amounts are positive numbers, e.g. `spendy add 12.50 -c Bills`.".to_string())
    } else if error_lower.contains("failed to parse config") {
        Some("Fix the file or rewrite it with `spendy init --force`.".to_string())
    } else {
        None
    };
    (error, hint)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => commands::handle_add(ctx, args)?,
        Some(Commands::Delete(args)) => commands::handle_delete(ctx, args)?,
        Some(Commands::List(args)) => commands::handle_list(ctx, args)?,
        Some(Commands::Summary(args)) => commands::handle_summary(ctx, args)?,
        Some(Commands::Breakdown(args)) => commands::handle_breakdown(ctx, args)?,
        Some(Commands::Categories) => commands::handle_categories(ctx)?,
        Some(Commands::Export(args)) => commands::handle_export(ctx, args)?,
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell)?,
        None => {
            println!("Spendy v{}", VERSION);
            println!("\nQuickstart:");
            println!("  spendy add 12.50 -c \"Food & Drinks\" -n \"Lunch\"");
            println!("  spendy list");
            println!("  spendy summary");
            println!("  spendy breakdown");
            println!("\nRun `spendy --help` for full usage.");
        }
    }

    Ok(())
}
