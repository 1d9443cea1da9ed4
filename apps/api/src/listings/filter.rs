//! Listing search filter: raw query parameters in, a typed filter value out.
//!
//! Unknown `type` values are dropped; unknown or missing `status` falls back
//! to ACTIVE, so an unqualified search only shows live listings.

use serde::Deserialize;

use crate::models::property::{ListingStatus, Property, PropertyType};

/// Raw `GET /properties` query string. Everything is optional and lenient.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub city: Option<String>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Case-insensitive substring of `city`.
    pub city: Option<String>,
    /// Case-insensitive substring of title, description, city or state.
    pub keyword: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: ListingStatus,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl From<ListingQuery> for ListingFilter {
    fn from(query: ListingQuery) -> Self {
        ListingFilter {
            city: non_blank(query.city),
            keyword: non_blank(query.q),
            property_type: non_blank(query.property_type)
                .and_then(|t| PropertyType::parse(&t)),
            status: non_blank(query.status)
                .and_then(|s| ListingStatus::parse(&s))
                .unwrap_or(ListingStatus::Active),
            min_price: parse_price(query.min_price),
            max_price: parse_price(query.max_price),
        }
    }
}

impl ListingFilter {
    /// In-memory form of the filter, equivalent to the SQL the Postgres
    /// repository builds.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn matches(&self, property: &Property) -> bool {
        if property.listing_status != self.status {
            return false;
        }

        if let Some(property_type) = self.property_type {
            if property.property_type != property_type {
                return false;
            }
        }

        if let Some(city) = &self.city {
            if !contains_ignore_case(&property.city, city) {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let hit = contains_ignore_case(&property.title, keyword)
                || contains_ignore_case(&property.description, keyword)
                || contains_ignore_case(&property.city, keyword)
                || property
                    .state
                    .as_deref()
                    .is_some_and(|state| contains_ignore_case(state, keyword));
            if !hit {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }

        true
    }
}

/// Whitespace-only counts as absent; anything else is kept as sent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_price(value: Option<String>) -> Option<f64> {
    non_blank(value)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
