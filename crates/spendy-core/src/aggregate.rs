//! Pure aggregations over a ledger snapshot.
//!
//! Nothing here touches storage or the clock: time-windowed sums take `now`
//! explicitly, and calendar boundaries are evaluated in `now`'s time zone.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

use crate::expense::Expense;

/// Sum of amounts for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub count: usize,
}

/// A category's amount and its share of the overall total, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

fn sum<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses.into_iter().fold(0.0, |acc, expense| acc + expense.amount)
}

fn same_day<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    date.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

fn same_month<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    let local = date.with_timezone(&now.timezone());
    local.year() == now.year() && local.month() == now.month()
}

/// Sum of all amounts; 0 for an empty snapshot.
pub fn total(expenses: &[Expense]) -> f64 {
    sum(expenses)
}

pub fn count(expenses: &[Expense]) -> usize {
    expenses.len()
}

/// Mean amount; 0 for an empty snapshot.
pub fn average(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        0.0
    } else {
        total(expenses) / expenses.len() as f64
    }
}

/// Per-category sums in first-seen order of the snapshot.
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(existing) => {
                existing.amount += expense.amount;
                existing.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                amount: expense.amount,
                count: 1,
            }),
        }
    }
    totals
}

/// Sum of expenses dated on the same calendar day as `now`.
pub fn today_total<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> f64 {
    sum(expenses.iter().filter(|e| same_day(&e.date, now)))
}

pub fn today_count<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> usize {
    expenses.iter().filter(|e| same_day(&e.date, now)).count()
}

/// Sum of expenses dated in the same calendar month and year as `now`.
pub fn this_month_total<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> f64 {
    sum(expenses.iter().filter(|e| same_month(&e.date, now)))
}

pub fn this_month_count<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> usize {
    expenses.iter().filter(|e| same_month(&e.date, now)).count()
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        (part / whole) * 100.0
    }
}

/// Category totals with their share of the overall total.
pub fn category_shares(expenses: &[Expense]) -> Vec<CategoryShare> {
    let whole = total(expenses);
    by_category(expenses)
        .into_iter()
        .map(|t| CategoryShare {
            percent: percentage(t.amount, whole),
            category: t.category,
            amount: t.amount,
        })
        .collect()
}

/// Coarse spending tier used for the summary's one-line verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingVibe {
    NothingYet,
    Light,
    Moderate,
    Heavy,
    BigSpender,
}

impl SpendingVibe {
    pub fn classify(total: f64) -> Self {
        if total <= 0.0 {
            Self::NothingYet
        } else if total < 100.0 {
            Self::Light
        } else if total < 500.0 {
            Self::Moderate
        } else if total < 1000.0 {
            Self::Heavy
        } else {
            Self::BigSpender
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NothingYet => "You're doing great! No spending tracked yet.",
            Self::Light => "Light spender! Keep it up.",
            Self::Moderate => "Moderate vibes! You're doing okay.",
            Self::Heavy => "Heavy spender alert! Maybe chill a bit?",
            Self::BigSpender => "Big spender energy! Time to budget?",
        }
    }
}

/// Everything the summary view shows, computed in one pass over a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    pub this_month: f64,
    pub today: f64,
    pub average: f64,
    pub count: usize,
    pub this_month_count: usize,
    pub today_count: usize,
    pub vibe: SpendingVibe,
}

impl Summary {
    pub fn compute<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Self {
        let total = total(expenses);
        Self {
            total,
            this_month: this_month_total(expenses, now),
            today: today_total(expenses, now),
            average: average(expenses),
            count: count(expenses),
            this_month_count: this_month_count(expenses, now),
            today_count: today_count(expenses, now),
            vibe: SpendingVibe::classify(total),
        }
    }
}
