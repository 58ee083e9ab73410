//! PostgreSQL implementation of DestinationRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::catalog::{Destination, DestinationDraft, DestinationFilter, Listing, Page};
use crate::domain::foundation::{DestinationId, DomainError};
use crate::ports::DestinationRepository;

use super::{filter_value, like_pattern};

const COLUMNS: &str =
    "id, name, description, price_range, country, climate, activities, image_url";

/// PostgreSQL implementation of DestinationRepository.
#[derive(Clone)]
pub struct PostgresDestinationRepository {
    pool: PgPool,
}

impl PostgresDestinationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for PostgresDestinationRepository {
    async fn create(&self, draft: &DestinationDraft) -> Result<Destination, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO destinations (
                name, description, price_range, country, climate, activities, image_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.price_range)
        .bind(&draft.country)
        .bind(&draft.climate)
        .bind(&draft.activities)
        .bind(&draft.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert destination", e))?;

        row_to_destination(&row)
    }

    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, DomainError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM destinations WHERE id = $1"))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch destination", e))?;

        row.as_ref().map(row_to_destination).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Destination>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM destinations WHERE name ILIKE $1 ORDER BY id LIMIT 1"
        ))
        .bind(like_pattern(name.trim()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch destination by name", e))?;

        row.as_ref().map(row_to_destination).transpose()
    }

    async fn list(&self, filter: &DestinationFilter, page: Page) -> Result<Listing<Destination>, DomainError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM destinations WHERE 1=1");
        push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count destinations", e))?;

        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM destinations WHERE 1=1"));
        push_filter(&mut select, filter);
        select.push(" ORDER BY id LIMIT ");
        select.push_bind(i64::from(page.limit));
        select.push(" OFFSET ");
        select.push_bind(i64::from(page.skip));

        let rows = select
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list destinations", e))?;

        let items = rows.iter().map(row_to_destination).collect::<Result<Vec<_>, _>>()?;
        Ok(Listing {
            items,
            total: total.max(0) as u64,
        })
    }

    async fn update(
        &self,
        id: DestinationId,
        draft: &DestinationDraft,
    ) -> Result<Option<Destination>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE destinations SET
                name = $2,
                description = $3,
                price_range = $4,
                country = $5,
                climate = $6,
                activities = $7,
                image_url = $8
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id.as_i64())
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.price_range)
        .bind(&draft.country)
        .bind(&draft.climate)
        .bind(&draft.activities)
        .bind(&draft.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update destination", e))?;

        row.as_ref().map(row_to_destination).transpose()
    }

    async fn delete(&self, id: DestinationId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete destination", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &DestinationFilter) {
    if let Some(name) = filter_value(&filter.name) {
        query.push(" AND name ILIKE ");
        query.push_bind(like_pattern(&name));
    }
    if let Some(country) = filter_value(&filter.country) {
        query.push(" AND LOWER(country) = LOWER(");
        query.push_bind(country);
        query.push(")");
    }
    if let Some(theme) = filter_value(&filter.theme) {
        let pattern = like_pattern(&theme);
        query.push(" AND (activities ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR climate ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}

fn row_to_destination(row: &PgRow) -> Result<Destination, DomainError> {
    let map_err = |e: sqlx::Error| DomainError::database("Failed to decode destination row", e);
    Ok(Destination {
        id: DestinationId::new(row.try_get("id").map_err(map_err)?),
        details: DestinationDraft {
            name: row.try_get("name").map_err(map_err)?,
            description: row.try_get("description").map_err(map_err)?,
            price_range: row.try_get("price_range").map_err(map_err)?,
            country: row.try_get("country").map_err(map_err)?,
            climate: row.try_get("climate").map_err(map_err)?,
            activities: row.try_get("activities").map_err(map_err)?,
            image_url: row.try_get("image_url").map_err(map_err)?,
        },
    })
}
