//! Property store. Handlers only see `PropertyRepository`; the Postgres
//! implementation is the production backend.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::errors::AppError;
use crate::listings::filter::ListingFilter;
use crate::models::property::{ListingStatus, NewProperty, Property};

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Rows matching `filter`, newest first.
    async fn find(&self, filter: &ListingFilter) -> Result<Vec<Property>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Property>, AppError>;

    /// Inserts a new ACTIVE listing and returns the stored row.
    async fn create(&self, property: NewProperty) -> Result<Property, AppError>;
}

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find(&self, filter: &ListingFilter) -> Result<Vec<Property>, AppError> {
        let mut query = build_find_query(filter);
        let rows = query
            .build_query_as::<Property>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        let row = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, property: NewProperty) -> Result<Property, AppError> {
        let row = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties
                (id, title, description, price, city, state, country, address,
                 bedrooms, bathrooms, square_feet, property_type, listing_status,
                 image_url, agent_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(property.title)
        .bind(property.description)
        .bind(property.price)
        .bind(property.city)
        .bind(property.state)
        .bind(property.country)
        .bind(property.address)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.square_feet)
        .bind(property.property_type)
        .bind(ListingStatus::Active)
        .bind(property.image_url)
        .bind(property.agent_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

fn build_find_query(filter: &ListingFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT * FROM properties WHERE listing_status = ");
    query.push_bind(filter.status);

    if let Some(city) = &filter.city {
        query.push(" AND city ILIKE ").push_bind(like_pattern(city));
    }

    if let Some(keyword) = &filter.keyword {
        let pattern = like_pattern(keyword);
        query
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR city ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR state ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(property_type) = filter.property_type {
        query.push(" AND property_type = ").push_bind(property_type);
    }
    if let Some(min) = filter.min_price {
        query.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        query.push(" AND price <= ").push_bind(max);
    }

    query.push(" ORDER BY created_at DESC");
    query
}

/// `%needle%` with LIKE metacharacters escaped (Postgres escape char is `\`).
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
