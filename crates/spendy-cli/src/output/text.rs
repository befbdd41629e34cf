//! Text and table output for expenses and reports.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use spendy_core::aggregate::{CategoryShare, Summary};
use spendy_core::Expense;

use crate::constants::TABLE_NOTE_MAX;
use crate::ui::format::{format_instant, single_line};
use crate::ui::theme::{styled, styles};
use crate::ui::{
    bar, blank_line, format_money, format_percent, header, hint, kv, print, relative_day,
    simple_table, truncate, Column, OutputMode, UiContext,
};

const BAR_WIDTH: usize = 20;

/// Table rows for an expense list.
///
/// Pretty rows show short ids, relative days and currency; plain rows keep
/// full ids, RFC 3339 dates and bare amounts for scripts.
pub fn expense_rows<Tz: TimeZone>(
    ctx: &UiContext,
    expenses: &[Expense],
    now: &DateTime<Tz>,
    currency: &str,
) -> Vec<Vec<String>>
where
    Tz::Offset: Display,
{
    let pretty = ctx.mode.is_pretty();
    expenses
        .iter()
        .map(|expense| {
            if pretty {
                vec![
                    expense.id.short().to_string(),
                    relative_day(&expense.date, now),
                    styled(
                        &format_money(expense.amount, currency),
                        styles::money(),
                        ctx.color,
                    ),
                    expense.category.clone(),
                    truncate(&single_line(&expense.note), TABLE_NOTE_MAX),
                ]
            } else {
                vec![
                    expense.id.to_string(),
                    format_instant(&expense.date),
                    format!("{:.2}", expense.amount),
                    expense.category.clone(),
                    single_line(&expense.note),
                ]
            }
        })
        .collect()
}

/// Print a list of expenses, newest first.
///
/// `total` is the number of expenses before filtering and limiting.
pub fn print_expense_list<Tz: TimeZone>(
    ctx: &UiContext,
    expenses: &[Expense],
    total: usize,
    context: Option<&str>,
    now: &DateTime<Tz>,
    currency: &str,
    quiet: bool,
) where
    Tz::Offset: Display,
{
    if expenses.is_empty() {
        if !quiet {
            match ctx.mode {
                OutputMode::Pretty => {
                    print(ctx, &header(ctx, "list", context));
                    blank_line(ctx);
                    print(ctx, &hint(ctx, empty_list_hint(total)));
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return;
    }

    match ctx.mode {
        OutputMode::Pretty => {
            print(ctx, &header(ctx, "list", context));
            blank_line(ctx);

            let columns = [
                Column::new("ID"),
                Column::new("When"),
                Column::numeric("Amount"),
                Column::new("Category"),
                Column::new("Note"),
            ];
            let rows = expense_rows(ctx, expenses, now, currency);
            print(ctx, &simple_table(ctx, &columns, &rows));

            if !quiet {
                blank_line(ctx);
                let shown = if expenses.len() < total {
                    format!("Showing {} of {} expenses.", expenses.len(), total)
                } else {
                    format!("{} expenses.", expenses.len())
                };
                let hint_text = match expenses.first() {
                    Some(first) => format!(
                        "{} spendy delete {}  \u{00B7}  spendy summary",
                        shown,
                        first.id.short()
                    ),
                    None => shown,
                };
                print(ctx, &hint(ctx, &hint_text));
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            let columns: [Column; 0] = [];
            let rows = expense_rows(ctx, expenses, now, currency);
            println!("{}", simple_table(ctx, &columns, &rows));
        }
    }
}

/// Print the summary report.
pub fn print_summary(ctx: &UiContext, summary: &Summary, currency: &str, quiet: bool) {
    if !ctx.mode.is_pretty() {
        let lines = [
            kv(ctx, "total", &format!("{:.2}", summary.total)),
            kv(ctx, "this_month", &format!("{:.2}", summary.this_month)),
            kv(ctx, "today", &format!("{:.2}", summary.today)),
            kv(ctx, "average", &format!("{:.2}", summary.average)),
            kv(ctx, "count", &summary.count.to_string()),
            kv(ctx, "this_month_count", &summary.this_month_count.to_string()),
            kv(ctx, "today_count", &summary.today_count.to_string()),
            kv(ctx, "vibe", &vibe_name(summary)),
        ];
        for line in &lines {
            print(ctx, line);
        }
        return;
    }

    let money = |amount: f64| styled(&format_money(amount, currency), styles::money(), ctx.color);

    print(ctx, &header(ctx, "summary", None));
    blank_line(ctx);
    print(ctx, &kv(ctx, "Total", &money(summary.total)));
    print(
        ctx,
        &kv(
            ctx,
            "This Month",
            &counted(money(summary.this_month), summary.this_month_count),
        ),
    );
    print(
        ctx,
        &kv(ctx, "Today", &counted(money(summary.today), summary.today_count)),
    );
    print(ctx, &kv(ctx, "Average", &money(summary.average)));
    print(ctx, &kv(ctx, "Count", &summary.count.to_string()));

    if !quiet {
        blank_line(ctx);
        print(ctx, &hint(ctx, summary.vibe.message()));
    }
}

/// Print per-category totals with their share of the overall total.
pub fn print_breakdown(
    ctx: &UiContext,
    shares: &[CategoryShare],
    total: f64,
    currency: &str,
    quiet: bool,
) {
    if shares.is_empty() {
        if !quiet {
            match ctx.mode {
                OutputMode::Pretty => {
                    print(ctx, &header(ctx, "breakdown", None));
                    blank_line(ctx);
                    print(ctx, &hint(ctx, "Add some expenses to see the breakdown."));
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return;
    }

    match ctx.mode {
        OutputMode::Pretty => {
            print(ctx, &header(ctx, "breakdown", None));
            blank_line(ctx);

            let columns = [
                Column::new("Category"),
                Column::numeric("Amount"),
                Column::numeric("Share"),
                Column::new(""),
            ];
            let rows: Vec<Vec<String>> = shares
                .iter()
                .map(|share| {
                    vec![
                        share.category.clone(),
                        styled(
                            &format_money(share.amount, currency),
                            styles::money(),
                            ctx.color,
                        ),
                        format_percent(share.percent),
                        bar(ctx, share.percent, BAR_WIDTH),
                    ]
                })
                .collect();
            print(ctx, &simple_table(ctx, &columns, &rows));

            if !quiet {
                blank_line(ctx);
                print(
                    ctx,
                    &hint(
                        ctx,
                        &format!(
                            "{} categories \u{00B7} {} total",
                            shares.len(),
                            format_money(total, currency)
                        ),
                    ),
                );
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            let columns: [Column; 0] = [];
            let rows: Vec<Vec<String>> = shares
                .iter()
                .map(|share| {
                    vec![
                        share.category.clone(),
                        format!("{:.2}", share.amount),
                        format!("{:.1}", share.percent),
                    ]
                })
                .collect();
            println!("{}", simple_table(ctx, &columns, &rows));
        }
    }
}

/// Hint for a list with no rows; `total` counts the whole ledger.
fn empty_list_hint(total: usize) -> &'static str {
    if total == 0 {
        "No expenses yet! Start tracking: spendy add 12.50 -c \"Food & Drinks\""
    } else {
        "No expenses match. Try a larger --limit or another --category."
    }
}

fn counted(amount: String, count: usize) -> String {
    let noun = if count == 1 { "expense" } else { "expenses" };
    format!("{} ({} {})", amount, count, noun)
}

fn vibe_name(summary: &Summary) -> String {
    serde_json::to_value(summary.vibe)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use spendy_core::ExpenseId;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: Some(80),
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: Some(120),
            mode: OutputMode::Pretty,
        }
    }

    fn sample() -> Expense {
        Expense {
            id: ExpenseId::from("abcdef12-3456-7890"),
            amount: 8.0,
            category: "Transport".to_string(),
            note: "Bus\nticket".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_plain_rows_are_script_friendly() {
        let rows = expense_rows(&plain_ctx(), &[sample()], &now(), "$");
        assert_eq!(
            rows[0],
            vec![
                "abcdef12-3456-7890".to_string(),
                "2024-03-14T09:00:00.000Z".to_string(),
                "8.00".to_string(),
                "Transport".to_string(),
                "Bus ticket".to_string(),
            ]
        );
    }

    #[test]
    fn test_pretty_rows_use_short_id_and_relative_day() {
        let rows = expense_rows(&pretty_ctx(), &[sample()], &now(), "\u{20ac}");
        assert_eq!(rows[0][0], "abcdef12");
        assert_eq!(rows[0][1], "Yesterday");
        assert_eq!(rows[0][2], "\u{20ac}8.00");
    }

    #[test]
    fn test_plain_rows_keep_five_columns_with_tabbed_note() {
        let mut expense = sample();
        expense.note = "cash\ttip".to_string();
        let rows = expense_rows(&plain_ctx(), &[expense], &now(), "$");
        assert_eq!(rows[0][4], "cash tip");
        assert_eq!(rows[0].join("\t").split('\t').count(), 5);
    }

    #[test]
    fn test_empty_list_hint_depends_on_ledger_size() {
        assert!(empty_list_hint(0).starts_with("No expenses yet!"));
        assert!(empty_list_hint(3).starts_with("No expenses match."));
    }

    #[test]
    fn test_counted_pluralizes() {
        assert_eq!(counted("$3.00".to_string(), 1), "$3.00 (1 expense)");
        assert_eq!(counted("$0.00".to_string(), 0), "$0.00 (0 expenses)");
    }

    #[test]
    fn test_vibe_name_matches_json() {
        let summary = Summary::compute(&[sample()], &now());
        assert_eq!(vibe_name(&summary), "light");
    }
}
