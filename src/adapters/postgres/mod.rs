//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresDestinationRepository` - Destination catalog
//! - `PostgresAccommodationRepository` - Accommodation catalog
//! - `PostgresChatHistoryRepository` - Question/answer history
//!
//! Schema changes live in `migrations/` and are embedded by [`MIGRATOR`].

mod accommodation_repository;
mod chat_history_repository;
mod destination_repository;

pub use accommodation_repository::PostgresAccommodationRepository;
pub use chat_history_repository::PostgresChatHistoryRepository;
pub use destination_repository::PostgresDestinationRepository;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Trimmed, non-blank filter value.
fn filter_value(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `ILIKE` pattern matching `needle` anywhere, with wildcards escaped.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_ignored() {
        assert_eq!(filter_value(&Some("  ".to_string())), None);
        assert_eq!(filter_value(&Some(" Paris ".to_string())), Some("Paris".to_string()));
        assert_eq!(filter_value(&None), None);
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("par"), "%par%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
