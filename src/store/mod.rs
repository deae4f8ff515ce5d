use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::Expense;

/// Header row naming the four record fields, in persisted order.
pub(crate) const HEADER: &str = "Name,Amount,Category,Date";

/// Append-only, line-oriented expense store backed by a single CSV file.
///
/// The file is the only data store: records are never updated or deleted
/// in place, and the only way a line leaves the file is the repair pass.
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store, initializing or normalizing the backing file.
    ///
    /// A missing or zero-length file is created with only the header row;
    /// failure to create it is fatal. An existing non-empty file is run
    /// through [`Store::repair`] so malformed lines never survive startup.
    pub(crate) fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        let existing = fs::metadata(&store.path).map(|m| m.len() > 0).unwrap_or(false);
        if existing {
            store.repair()?;
        } else {
            fs::write(&store.path, format!("{HEADER}\n")).with_context(|| {
                format!("Failed to create expense file: {}", store.path.display())
            })?;
        }
        Ok(store)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize one record and append it as a single line.
    ///
    /// Validation happens at the submission boundary, not here; the store
    /// only writes. No locking — interleaved writes from overlapping
    /// requests are an accepted risk for a single-user tool, and a torn
    /// line is dropped by the tolerant read side.
    pub(crate) fn append(&self, expense: &Expense) -> Result<()> {
        let file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open expense file: {}", self.path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record([
            expense.name.as_str(),
            &format!("{:.2}", expense.amount),
            expense.category.as_str(),
            expense.date.as_str(),
        ])
        .context("Failed to append expense record")?;
        wtr.flush().context("Failed to flush expense record")?;
        Ok(())
    }

    /// Read every well-formed record, in file order.
    ///
    /// Infallible by contract: a missing or unreadable file yields an
    /// empty vec, so callers treat "no data" and "error" identically and
    /// fall back to the default summary.
    pub(crate) fn read_all(&self) -> Vec<Expense> {
        self.try_read().unwrap_or_default()
    }

    fn try_read(&self) -> Result<Vec<Expense>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read expense file: {}", self.path.display()))?;
        Ok(text
            .lines()
            .skip(1) // header
            .filter_map(|line| parse_line(line).ok())
            .collect())
    }

    /// Rewrite the file keeping the header plus every line the per-line
    /// parser accepts, preserving relative order. Idempotent; this is the
    /// only defense against partial writes or manual corruption.
    pub(crate) fn repair(&self) -> Result<()> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read expense file: {}", self.path.display()))?;
        let mut lines = text.lines();
        let header = lines.next().unwrap_or(HEADER);

        let mut out = String::with_capacity(text.len());
        out.push_str(header);
        out.push('\n');
        for line in lines {
            if parse_line(line).is_ok() {
                out.push_str(line);
                out.push('\n');
            }
        }

        fs::write(&self.path, out)
            .with_context(|| format!("Failed to rewrite expense file: {}", self.path.display()))
    }
}

/// Strict per-line parser shared by the read and repair paths, so their
/// tolerance semantics cannot drift apart: a line is valid iff it parses
/// into exactly four CSV fields. A non-numeric amount does not invalidate
/// the line; it is coerced to zero.
fn parse_line(line: &str) -> Result<Expense> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = rdr
        .records()
        .next()
        .context("Blank line")?
        .context("Unreadable line")?;
    if record.len() != 4 {
        anyhow::bail!("Expected 4 fields, found {}", record.len());
    }
    Ok(Expense {
        name: record[0].trim().to_string(),
        amount: Decimal::from_str(record[1].trim()).unwrap_or(Decimal::ZERO),
        category: record[2].trim().to_string(),
        date: record[3].trim().to_string(),
    })
}
