use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::format::format_amount;
use crate::models::{Config, Expense};

/// How many of the newest entries the summary carries for display.
const RECENT_LIMIT: usize = 5;

/// Computed aggregate over the current record set: totals, per-category
/// sums, budget projections and recent entries, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub(crate) total_spent: Decimal,
    /// budget − total_spent; goes negative when overspent, never clamped.
    pub(crate) remaining_budget: Decimal,
    pub(crate) remaining_days: u32,
    pub(crate) daily_budget: Decimal,
    /// One entry per configured category, in enumeration order, sums
    /// rounded to 2 decimal places. Empty categories map to zero rather
    /// than being omitted.
    pub(crate) category_summary: Vec<(String, Decimal)>,
    /// Up to the five newest records, most recent first.
    pub(crate) recent_expenses: Vec<Expense>,
}

/// Chart-ready point for the per-category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartPoint {
    pub(crate) name: String,
    pub(crate) value: Decimal,
}

impl Summary {
    pub(crate) fn total_spent_display(&self) -> String {
        format_amount(self.total_spent)
    }

    pub(crate) fn remaining_budget_display(&self) -> String {
        format_amount(self.remaining_budget)
    }

    pub(crate) fn daily_budget_display(&self) -> String {
        format_amount(self.daily_budget)
    }

    pub(crate) fn chart_data(&self) -> Vec<ChartPoint> {
        self.category_summary
            .iter()
            .map(|(name, value)| ChartPoint {
                name: name.clone(),
                value: *value,
            })
            .collect()
    }
}

/// Aggregate `expenses` against the fixed configuration as of `today`.
///
/// `today` is passed in rather than read from the clock so month-end
/// arithmetic is deterministic under test.
pub(crate) fn compute(expenses: &[Expense], config: &Config, today: NaiveDate) -> Summary {
    let total_spent: Decimal = expenses.iter().map(|e| e.amount).sum();
    let remaining_budget = config.budget - total_spent;

    // Floor at one day so the daily figure is always a plain division;
    // on the last day of the month this matches treating the whole
    // remainder as today's allowance.
    let remaining_days = (days_in_month(today) - today.day()).max(1);
    let daily_budget = remaining_budget / Decimal::from(remaining_days);

    let category_summary = config
        .categories
        .iter()
        .map(|cat| {
            let sum: Decimal = expenses
                .iter()
                .filter(|e| e.category == *cat)
                .map(|e| e.amount)
                .sum();
            (cat.clone(), sum.round_dp(2))
        })
        .collect();

    let recent_expenses = expenses.iter().rev().take(RECENT_LIMIT).cloned().collect();

    Summary {
        total_spent,
        remaining_budget,
        remaining_days,
        daily_budget,
        category_summary,
        recent_expenses,
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

#[cfg(test)]
mod tests;
