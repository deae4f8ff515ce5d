use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::Config;

/// One persisted expense line: name, amount, category, date.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub name: String,
    pub amount: Decimal,
    /// One of the labels in the configured category enumeration.
    pub category: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
}

impl Expense {
    /// Validate a raw form submission and turn it into a record dated `date`.
    ///
    /// Rejections carry a display-ready reason; nothing is persisted for a
    /// rejected submission.
    pub fn from_submission(
        name: &str,
        amount: &str,
        category: &str,
        config: &Config,
        date: NaiveDate,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Name must not be empty");
        }
        // The persisted format is one comma-separated line per record.
        if name.contains(',') || name.contains('\n') || name.contains('\r') {
            anyhow::bail!("Name must not contain commas or line breaks");
        }

        let amount = parse_amount(amount)?;
        if amount <= Decimal::ZERO {
            anyhow::bail!("Amount must be a positive number");
        }

        if !config.is_known_category(category) {
            anyhow::bail!("Unknown category: {category}");
        }

        Ok(Self {
            name: name.to_string(),
            amount: amount.round_dp(2),
            category: category.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        })
    }
}

/// Parse a user-entered amount, tolerating a currency prefix and
/// thousands separators (e.g. "$1,234.50").
fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(['$', ','], "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        anyhow::bail!("Amount must not be empty");
    }
    Decimal::from_str(cleaned)
        .map_err(|_| anyhow::anyhow!("'{s}' is not a valid amount"))
}
