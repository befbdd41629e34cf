//! Report command handlers: summary and per-category breakdown.

use spendy_core::aggregate;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::errors::CliError;
use crate::helpers::{parse_output_format, OutputFormat};
use crate::output::{breakdown_json, print_breakdown, print_summary, summary_json};

fn check_format(args: &ReportArgs) -> anyhow::Result<Option<OutputFormat>> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(format)
}

pub fn handle_summary(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let format = check_format(args)?;
    let ui_ctx = ctx.ui(args.json, format);

    let (ledger, _hydration) = ctx.open_ledger()?;
    let currency = ctx.currency()?;
    let summary = ctx.now()?.summarize(ledger.all());

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&summary_json(&summary, &currency))?;
        println!("{}", output);
        return Ok(());
    }

    print_summary(&ui_ctx, &summary, &currency, ctx.quiet());
    Ok(())
}

pub fn handle_breakdown(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let format = check_format(args)?;
    let ui_ctx = ctx.ui(args.json, format);

    let (ledger, _hydration) = ctx.open_ledger()?;
    let currency = ctx.currency()?;
    let shares = aggregate::category_shares(ledger.all());
    let total = aggregate::total(ledger.all());

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&breakdown_json(&shares, total, &currency))?;
        println!("{}", output);
        return Ok(());
    }

    print_breakdown(&ui_ctx, &shares, total, &currency, ctx.quiet());
    Ok(())
}
