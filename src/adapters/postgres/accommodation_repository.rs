//! PostgreSQL implementation of AccommodationRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::catalog::{Accommodation, AccommodationDraft, AccommodationFilter, Listing, Page};
use crate::domain::foundation::{AccommodationId, DomainError};
use crate::ports::AccommodationRepository;

use super::{filter_value, like_pattern};

const COLUMNS: &str = "id, name, accommodation_type, address, city, country, price_per_night, \
                       capacity, amenities, average_rating, image_url";

/// PostgreSQL implementation of AccommodationRepository.
#[derive(Clone)]
pub struct PostgresAccommodationRepository {
    pool: PgPool,
}

impl PostgresAccommodationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccommodationRepository for PostgresAccommodationRepository {
    async fn create(&self, draft: &AccommodationDraft) -> Result<Accommodation, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO accommodations (
                name, accommodation_type, address, city, country, price_per_night,
                capacity, amenities, average_rating, image_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&draft.name)
        .bind(&draft.accommodation_type)
        .bind(&draft.address)
        .bind(&draft.city)
        .bind(&draft.country)
        .bind(draft.price_per_night)
        .bind(draft.capacity)
        .bind(&draft.amenities)
        .bind(draft.average_rating)
        .bind(&draft.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert accommodation", e))?;

        row_to_accommodation(&row)
    }

    async fn find_by_id(&self, id: AccommodationId) -> Result<Option<Accommodation>, DomainError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM accommodations WHERE id = $1"))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch accommodation", e))?;

        row.as_ref().map(row_to_accommodation).transpose()
    }

    async fn list(
        &self,
        filter: &AccommodationFilter,
        page: Page,
    ) -> Result<Listing<Accommodation>, DomainError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM accommodations WHERE 1=1");
        push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count accommodations", e))?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM accommodations WHERE 1=1"));
        push_filter(&mut select, filter);
        select.push(" ORDER BY id LIMIT ");
        select.push_bind(i64::from(page.limit));
        select.push(" OFFSET ");
        select.push_bind(i64::from(page.skip));

        let rows = select
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list accommodations", e))?;

        let items = rows.iter().map(row_to_accommodation).collect::<Result<Vec<_>, _>>()?;
        Ok(Listing {
            items,
            total: total.max(0) as u64,
        })
    }

    async fn update(
        &self,
        id: AccommodationId,
        draft: &AccommodationDraft,
    ) -> Result<Option<Accommodation>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE accommodations SET
                name = $2,
                accommodation_type = $3,
                address = $4,
                city = $5,
                country = $6,
                price_per_night = $7,
                capacity = $8,
                amenities = $9,
                average_rating = $10,
                image_url = $11
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id.as_i64())
        .bind(&draft.name)
        .bind(&draft.accommodation_type)
        .bind(&draft.address)
        .bind(&draft.city)
        .bind(&draft.country)
        .bind(draft.price_per_night)
        .bind(draft.capacity)
        .bind(&draft.amenities)
        .bind(draft.average_rating)
        .bind(&draft.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update accommodation", e))?;

        row.as_ref().map(row_to_accommodation).transpose()
    }

    async fn delete(&self, id: AccommodationId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accommodations WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete accommodation", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &AccommodationFilter) {
    if let Some(city) = filter_value(&filter.city) {
        query.push(" AND city ILIKE ");
        query.push_bind(like_pattern(&city));
    }
    if let Some(kind) = filter_value(&filter.accommodation_type) {
        query.push(" AND LOWER(accommodation_type) = LOWER(");
        query.push_bind(kind);
        query.push(")");
    }
    if let Some(max_price) = filter.max_price {
        query.push(" AND price_per_night <= ");
        query.push_bind(max_price);
    }
    if let Some(min_capacity) = filter.min_capacity {
        query.push(" AND capacity >= ");
        query.push_bind(min_capacity);
    }
}

fn row_to_accommodation(row: &PgRow) -> Result<Accommodation, DomainError> {
    let map_err = |e: sqlx::Error| DomainError::database("Failed to decode accommodation row", e);
    Ok(Accommodation {
        id: AccommodationId::new(row.try_get("id").map_err(map_err)?),
        details: AccommodationDraft {
            name: row.try_get("name").map_err(map_err)?,
            accommodation_type: row.try_get("accommodation_type").map_err(map_err)?,
            address: row.try_get("address").map_err(map_err)?,
            city: row.try_get("city").map_err(map_err)?,
            country: row.try_get("country").map_err(map_err)?,
            price_per_night: row.try_get("price_per_night").map_err(map_err)?,
            capacity: row.try_get("capacity").map_err(map_err)?,
            amenities: row.try_get("amenities").map_err(map_err)?,
            average_rating: row.try_get("average_rating").map_err(map_err)?,
            image_url: row.try_get("image_url").map_err(map_err)?,
        },
    })
}
