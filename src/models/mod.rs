mod config;
mod expense;

pub use config::Config;
pub use expense::Expense;
