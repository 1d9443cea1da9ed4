use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::listings::filter::{ListingFilter, ListingQuery};
use crate::listings::validation::{validate_new_property, CreatePropertyRequest};
use crate::models::property::Property;
use crate::state::AppState;

/// GET /properties
pub async fn handle_list_properties(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<Vec<Property>>, AppError> {
    let Query(query) = query?;
    let filter = ListingFilter::from(query);
    let properties = state.properties.find(&filter).await?;
    Ok(Json(properties))
}

/// GET /properties/:id
pub async fn handle_get_property(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Property>, AppError> {
    let Path(id) = id?;
    let property = state
        .properties
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Property {id} not found")))?;
    Ok(Json(property))
}

/// POST /properties
///
/// Always creates the listing as ACTIVE, whatever status the caller sent.
pub async fn handle_create_property(
    State(state): State<AppState>,
    request: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    let Json(request) = request?;
    let new_property = validate_new_property(request)?;
    let created = state.properties.create(new_property).await?;
    info!("Created property {} in {}", created.id, created.city);
    Ok((StatusCode::CREATED, Json(created)))
}
