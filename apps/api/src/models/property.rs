use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "property_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[default]
    House,
    Apartment,
    Condo,
    Townhouse,
    Studio,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "HOUSE",
            PropertyType::Apartment => "APARTMENT",
            PropertyType::Condo => "CONDO",
            PropertyType::Townhouse => "TOWNHOUSE",
            PropertyType::Studio => "STUDIO",
        }
    }

    /// Exact match against the wire value; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "listing_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
    Inactive,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::Active,
        ListingStatus::Pending,
        ListingStatus::Sold,
        ListingStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "ACTIVE",
            ListingStatus::Pending => "PENDING",
            ListingStatus::Sold => "SOLD",
            ListingStatus::Inactive => "INACTIVE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A persisted listing. Serialized in camelCase for the browser client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<i32>,
    pub property_type: PropertyType,
    pub listing_status: ListingStatus,
    pub image_url: Option<String>,
    pub agent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated, coerced listing ready to insert. `listing_status` is not
/// carried: every new listing starts ACTIVE.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub address: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<i32>,
    pub property_type: PropertyType,
    pub image_url: Option<String>,
    pub agent_id: Option<String>,
}
