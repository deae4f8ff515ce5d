use anyhow::Result;

use crate::models::{Config, Expense};
use crate::store::Store;
use crate::summary;

pub(crate) fn as_cli(args: &[String], store: &Store, config: &Config) -> Result<()> {
    match args.get(1).map(String::as_str) {
        None | Some("summary") | Some("s") => cli_summary(store, config),
        Some("add") => cli_add(&args[2..], store, config),
        Some("categories") => cli_categories(config),
        Some("repair") => cli_repair(store),
        Some("--help") | Some("-h") | Some("help") => {
            print_usage();
            Ok(())
        }
        Some("--version") | Some("-V") | Some("version") => {
            println!("spendlog {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Spendlog — flat-file personal expense tracker");
    println!();
    println!("Usage: spendlog [command]");
    println!();
    println!("Commands:");
    println!("  (none), summary, s            Print the monthly summary");
    println!("  add <name> <amount> <cat>     Record an expense dated today");
    println!("  categories                    List the expense categories");
    println!("  repair                        Drop malformed lines from the expense file");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_add(args: &[String], store: &Store, config: &Config) -> Result<()> {
    let [name, amount, category] = args else {
        anyhow::bail!("Usage: spendlog add <name> <amount> <category>");
    };

    let today = chrono::Local::now().date_naive();
    let expense = Expense::from_submission(name, amount, category, config, today)?;
    store.append(&expense)?;
    println!(
        "Recorded {} — {} ({}, {})",
        expense.name,
        crate::format::format_amount(expense.amount),
        expense.category,
        expense.date,
    );
    Ok(())
}

fn cli_summary(store: &Store, config: &Config) -> Result<()> {
    let expenses = store.read_all();
    let today = chrono::Local::now().date_naive();
    let summary = summary::compute(&expenses, config, today);

    println!("Spendlog — {}", today.format("%Y-%m"));
    println!("{}", "─".repeat(44));
    println!(
        "  Monthly Budget:    {}",
        crate::format::format_amount(config.budget)
    );
    println!("  Total Spent:       {}", summary.total_spent_display());
    println!("  Remaining Budget:  {}", summary.remaining_budget_display());
    println!(
        "  Daily Budget:      {}  ({} days left)",
        summary.daily_budget_display(),
        summary.remaining_days,
    );

    println!();
    println!("Spending by Category:");
    for point in summary.chart_data() {
        println!(
            "  {:<24} {}",
            point.name,
            crate::format::format_amount(point.value)
        );
    }

    if !summary.recent_expenses.is_empty() {
        println!();
        println!("Recent Expenses:");
        for e in &summary.recent_expenses {
            println!(
                "  {}  {:<20} {:<20} {}",
                e.date,
                e.name,
                e.category,
                crate::format::format_amount(e.amount),
            );
        }
    }

    Ok(())
}

fn cli_categories(config: &Config) -> Result<()> {
    for cat in &config.categories {
        println!("{cat}");
    }
    Ok(())
}

fn cli_repair(store: &Store) -> Result<()> {
    store.repair()?;
    println!("Repaired {}", store.path().display());
    Ok(())
}
