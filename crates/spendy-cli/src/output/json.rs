//! JSON output formatting for expenses and reports.

use chrono::SecondsFormat;

use spendy_core::aggregate::{CategoryShare, Summary};
use spendy_core::Expense;

/// Convert an expense to JSON for output.
pub fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id,
        "amount": expense.amount,
        "category": expense.category,
        "note": expense.note,
        "date": expense.date.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Convert multiple expenses to a JSON array for output.
pub fn expenses_json(expenses: &[Expense]) -> Vec<serde_json::Value> {
    expenses.iter().map(expense_json).collect()
}

/// Summary report with the vibe message and currency.
pub fn summary_json(summary: &Summary, currency: &str) -> serde_json::Value {
    serde_json::json!({
        "currency": currency,
        "total": summary.total,
        "this_month": summary.this_month,
        "today": summary.today,
        "average": summary.average,
        "count": summary.count,
        "this_month_count": summary.this_month_count,
        "today_count": summary.today_count,
        "vibe": summary.vibe,
        "vibe_message": summary.vibe.message(),
    })
}

/// Per-category breakdown report.
pub fn breakdown_json(shares: &[CategoryShare], total: f64, currency: &str) -> serde_json::Value {
    serde_json::json!({
        "currency": currency,
        "total": total,
        "categories": shares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use spendy_core::ExpenseId;

    fn sample() -> Expense {
        Expense {
            id: ExpenseId::from("abc12345-0000"),
            amount: 12.5,
            category: "Food & Drinks".to_string(),
            note: "Lunch".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_expense_json_fields() {
        let value = expense_json(&sample());
        assert_eq!(value["id"], "abc12345-0000");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["category"], "Food & Drinks");
        assert_eq!(value["note"], "Lunch");
        assert_eq!(value["date"], "2024-03-15T12:00:00.000Z");
    }

    #[test]
    fn test_summary_json_includes_vibe() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
        let summary = Summary::compute(&[sample()], &now);
        let value = summary_json(&summary, "$");
        assert_eq!(value["total"], 12.5);
        assert_eq!(value["today_count"], 1);
        assert_eq!(value["vibe"], "light");
        assert_eq!(value["currency"], "$");
    }
}
