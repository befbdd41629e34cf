//! Expense command handlers: add, delete, list, export.

use spendy_core::{ExpenseId, LedgerError, Mutation, NewExpense};

use crate::app::{AppContext, Now};
use crate::cli::{AddArgs, DeleteArgs, ExportArgs, ListArgs};
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::errors::CliError;
use crate::helpers::{parse_amount, parse_output_format, resolve_category};
use crate::output::{expense_json, expenses_json, print_expense_list};
use crate::ui::{badge, format_money, print, receipt, Badge, UiContext};

/// Surface a failed snapshot write. The change itself is kept in memory.
fn warn_if_unsaved<T>(ui_ctx: &UiContext, mutation: &Mutation<T>) {
    if let Some(err) = mutation.warning() {
        eprintln!(
            "{}",
            badge(
                ui_ctx,
                Badge::Warn,
                &format!("Change was not saved to storage: {}", err)
            )
        );
    }
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount)?;
    let category = resolve_category(args.category.clone(), args.no_input)?;

    let mut input = NewExpense::new(amount, category);
    if let Some(note) = args.note.clone() {
        input = input.with_note(note);
    }

    let (mut ledger, _hydration) = ctx.open_ledger()?;
    let mutation = ledger.create(input)?;
    let ui_ctx = ctx.ui(args.json, None);
    warn_if_unsaved(&ui_ctx, &mutation);

    let expense = mutation.value;
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&expense_json(&expense))?);
        return Ok(());
    }

    if !ctx.quiet() {
        let currency = ctx.currency()?;
        let amount = format_money(expense.amount, &currency);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Expense added",
                &[
                    ("ID", expense.id.as_str()),
                    ("Amount", amount.as_str()),
                    ("Category", expense.category.as_str()),
                    ("Note", expense.note.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let (mut ledger, _hydration) = ctx.open_ledger()?;

    let id = match ledger.resolve_prefix(&args.id) {
        Ok(expense) => expense.id.clone(),
        Err(LedgerError::NotFound(_)) if looks_like_full_id(&args.id) => {
            // Unknown full ids are a no-op, matching the ledger's delete.
            ExpenseId::from(args.id.trim())
        }
        Err(LedgerError::NotFound(message)) => {
            return Err(CliError::not_found(
                message,
                "Hint: Run `spendy list` to see expense IDs.",
            )
            .into());
        }
        Err(LedgerError::InvalidInput(message)) => {
            return Err(CliError::invalid_input(message).into());
        }
        Err(other) => return Err(other.into()),
    };

    let mutation = ledger.delete(&id);
    let ui_ctx = ctx.ui(false, None);
    warn_if_unsaved(&ui_ctx, &mutation);

    match mutation.value {
        Some(removed) => {
            if !ctx.quiet() {
                let currency = ctx.currency()?;
                let amount = format_money(removed.amount, &currency);
                print(
                    &ui_ctx,
                    &receipt(
                        &ui_ctx,
                        "Expense deleted",
                        &[
                            ("ID", removed.id.as_str()),
                            ("Amount", amount.as_str()),
                            ("Category", removed.category.as_str()),
                        ],
                    ),
                );
            }
        }
        None => {
            if !ctx.quiet() {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Info,
                        &format!("No expense with id {}; nothing to delete", id),
                    ),
                );
            }
        }
    }
    Ok(())
}

/// A generated id (UUID) rather than a short prefix.
fn looks_like_full_id(value: &str) -> bool {
    uuid::Uuid::parse_str(value.trim()).is_ok()
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let ui_ctx = ctx.ui(args.json, format);

    let (ledger, _hydration) = ctx.open_ledger()?;
    let total = ledger.len();

    let mut expenses: Vec<_> = match args.category.as_deref() {
        Some(category) => ledger
            .all()
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect(),
        None => ledger.all().to_vec(),
    };
    let limit = args.limit.unwrap_or(if ui_ctx.mode.is_json() {
        usize::MAX
    } else {
        DEFAULT_LIST_LIMIT
    });
    expenses.truncate(limit);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&expenses_json(&expenses))?);
        return Ok(());
    }

    let context = args.category.as_ref().map(|c| format!("category: {}", c));
    let currency = ctx.currency()?;
    let (context, quiet) = (context.as_deref(), ctx.quiet());
    match ctx.now()? {
        Now::Zoned(now) => {
            print_expense_list(&ui_ctx, &expenses, total, context, &now, &currency, quiet)
        }
        Now::Local(now) => {
            print_expense_list(&ui_ctx, &expenses, total, context, &now, &currency, quiet)
        }
    }
    Ok(())
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let (ledger, _hydration) = ctx.open_ledger()?;
    match args.format.as_str() {
        "json" => {
            let output = serde_json::to_string_pretty(&expenses_json(ledger.all()))?;
            println!("{}", output);
        }
        "jsonl" => {
            for expense in ledger.all() {
                println!("{}", serde_json::to_string(&expense_json(expense))?);
            }
        }
        other => {
            return Err(CliError::invalid_input(format!(
                "Unsupported export format: {} (use json or jsonl for portable exports)",
                other
            ))
            .into());
        }
    }
    Ok(())
}
