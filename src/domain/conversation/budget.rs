//! Budget slot format check.

use once_cell::sync::Lazy;
use regex::Regex;

static BUDGET_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\d\s,.]+(€|\$|USD|CHF|EUR|euros?|dollars?)$")
        .expect("budget pattern is a valid regex")
});

/// Accepts an amount made of digits, spaces, commas and dots followed by a
/// currency marker, e.g. `500€`, `1 000,50 EUR`, `300 dollars`.
pub fn is_valid_budget(budget: &str) -> bool {
    BUDGET_FORMAT.is_match(budget.trim())
}
