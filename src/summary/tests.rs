#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn test_config() -> Config {
    Config {
        budget: dec!(100),
        categories: vec!["Food".into(), "Home".into()],
    }
}

fn expense(name: &str, amount: Decimal, category: &str, date: &str) -> Expense {
    Expense {
        name: name.into(),
        amount,
        category: category.into(),
        date: date.into(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── totals and budget math ────────────────────────────────────

#[test]
fn test_single_expense_example() {
    // categories = [Food, Home]; budget = 100; one lunch on Jan 10.
    let expenses = vec![expense("lunch", dec!(12.50), "Food", "2024-01-10")];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));

    assert_eq!(s.total_spent, dec!(12.50));
    assert_eq!(s.total_spent_display(), "$12.50");
    assert_eq!(s.remaining_budget_display(), "$87.50");
    assert_eq!(
        s.category_summary,
        vec![("Food".to_string(), dec!(12.50)), ("Home".to_string(), dec!(0.00))]
    );
}

#[test]
fn test_empty_records_produce_defaults() {
    let s = compute(&[], &test_config(), date(2024, 1, 10));
    assert_eq!(s.total_spent, Decimal::ZERO);
    assert_eq!(s.remaining_budget, dec!(100));
    assert_eq!(s.recent_expenses.len(), 0);
    assert_eq!(s.category_summary.len(), 2);
    assert!(s.category_summary.iter().all(|(_, v)| *v == Decimal::ZERO));
}

#[test]
fn test_remaining_budget_can_go_negative() {
    let expenses = vec![expense("splurge", dec!(150), "Home", "2024-01-05")];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    assert_eq!(s.remaining_budget, dec!(-50));
    assert_eq!(s.remaining_budget_display(), "-$50.00");
}

#[test]
fn test_remaining_days_mid_month() {
    // January has 31 days; on the 10th, 21 remain.
    let s = compute(&[], &test_config(), date(2024, 1, 10));
    assert_eq!(s.remaining_days, 21);
}

#[test]
fn test_remaining_days_floors_at_one_on_last_day() {
    let s = compute(&[], &test_config(), date(2024, 1, 31));
    assert_eq!(s.remaining_days, 1);
    // Whole remaining budget is today's allowance.
    assert_eq!(s.daily_budget, s.remaining_budget);
}

#[test]
fn test_remaining_days_in_december() {
    // Year rollover in the month-length computation.
    let s = compute(&[], &test_config(), date(2024, 12, 30));
    assert_eq!(s.remaining_days, 1);
}

#[test]
fn test_leap_february() {
    let s = compute(&[], &test_config(), date(2024, 2, 1));
    assert_eq!(s.remaining_days, 28);
}

#[test]
fn test_daily_budget_division() {
    let expenses = vec![expense("x", dec!(16), "Food", "2024-01-10")];
    // Budget 100, spent 16 → 84 remaining over 21 days = 4 per day.
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    assert_eq!(s.daily_budget, dec!(4));
    assert_eq!(s.daily_budget_display(), "$4.00");
}

// ── category buckets ──────────────────────────────────────────

#[test]
fn test_category_buckets_sum_to_total() {
    let expenses = vec![
        expense("a", dec!(10), "Food", "2024-01-01"),
        expense("b", dec!(20), "Home", "2024-01-02"),
        expense("c", dec!(5.25), "Food", "2024-01-03"),
    ];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    let bucket_sum: Decimal = s.category_summary.iter().map(|(_, v)| *v).sum();
    assert_eq!(bucket_sum, s.total_spent);
}

#[test]
fn test_category_buckets_keep_enumeration_order() {
    let expenses = vec![expense("b", dec!(20), "Home", "2024-01-02")];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    let names: Vec<&str> = s.category_summary.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["Food", "Home"]);
}

#[test]
fn test_unconfigured_category_not_bucketed() {
    // A record in a category outside the enumeration (e.g. from a hand
    // edit) still counts toward the total but gets no bucket.
    let expenses = vec![expense("odd", dec!(7), "Travel", "2024-01-02")];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    assert_eq!(s.total_spent, dec!(7));
    assert_eq!(s.category_summary.len(), 2);
    assert!(s.category_summary.iter().all(|(_, v)| *v == Decimal::ZERO));
}

#[test]
fn test_chart_data_mirrors_buckets() {
    let expenses = vec![expense("a", dec!(10), "Food", "2024-01-01")];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    let chart = s.chart_data();
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0].name, "Food");
    assert_eq!(chart[0].value, dec!(10.00));
    assert_eq!(chart[1].value, dec!(0.00));
}

// ── recent expenses ───────────────────────────────────────────

#[test]
fn test_recent_expenses_newest_first_capped_at_five() {
    let expenses: Vec<Expense> = (1..=7)
        .map(|i| expense(&format!("e{i}"), Decimal::from(i), "Food", "2024-01-01"))
        .collect();
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    let names: Vec<&str> = s.recent_expenses.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["e7", "e6", "e5", "e4", "e3"]);
}

#[test]
fn test_recent_expenses_fewer_than_five() {
    let expenses = vec![
        expense("a", dec!(1), "Food", "2024-01-01"),
        expense("b", dec!(2), "Home", "2024-01-02"),
    ];
    let s = compute(&expenses, &test_config(), date(2024, 1, 10));
    let names: Vec<&str> = s.recent_expenses.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
}
