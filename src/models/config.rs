use rust_decimal::Decimal;

/// Fixed runtime configuration: the monthly budget ceiling and the
/// permitted expense categories. Built once in `main` and passed down;
/// never persisted, never mutable through the front end.
#[derive(Debug, Clone)]
pub struct Config {
    pub budget: Decimal,
    pub categories: Vec<String>,
}

impl Config {
    /// Whether `name` is a member of the category enumeration (exact match).
    pub fn is_known_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: Decimal::from(2000),
            categories: vec![
                "🍔 Food".into(),
                "🏠 Home".into(),
                "💼 Work".into(),
                "🎉 Fun".into(),
                "✨ Miscellaneous".into(),
            ],
        }
    }
}
