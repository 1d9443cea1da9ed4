use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::listings::filter::ListingFilter;
use crate::listings::repository::PropertyRepository;
use crate::models::property::{ListingStatus, NewProperty, Property};

/// Vec-backed repository for handler tests. Applies `ListingFilter::matches`
/// and keeps `created_at` strictly increasing so ordering is deterministic.
#[derive(Default)]
pub struct InMemoryPropertyRepository {
    rows: Mutex<Vec<Property>>,
    failing: bool,
}

impl InMemoryPropertyRepository {
    /// Every call fails as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            failing: true,
        }
    }

    pub fn insert(&self, property: Property) {
        self.rows.lock().unwrap().push(property);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find(&self, filter: &ListingFilter) -> Result<Vec<Property>, AppError> {
        self.check()?;
        let mut matched: Vec<Property> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, property: NewProperty) -> Result<Property, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let latest: Option<DateTime<Utc>> = rows.iter().map(|p| p.created_at).max();
        let now = Utc::now();
        let created_at = match latest {
            Some(latest) if latest >= now => latest + Duration::microseconds(1),
            _ => now,
        };

        let row = Property {
            id: Uuid::new_v4(),
            title: property.title,
            description: property.description,
            price: property.price,
            city: property.city,
            state: property.state,
            country: property.country,
            address: property.address,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            square_feet: property.square_feet,
            property_type: property.property_type,
            listing_status: ListingStatus::Active,
            image_url: property.image_url,
            agent_id: property.agent_id,
            created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }
}
