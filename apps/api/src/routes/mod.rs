pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::copywriter::handlers as copy_handlers;
use crate::listings::handlers as listing_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings
        .route(
            "/properties",
            get(listing_handlers::handle_list_properties)
                .post(listing_handlers::handle_create_property),
        )
        .route("/properties/:id", get(listing_handlers::handle_get_property))
        // AI copy
        .route(
            "/ai/listing-description",
            post(copy_handlers::handle_listing_description),
        )
        .route("/ai/inquiry-reply", post(copy_handlers::handle_inquiry_reply))
        .route(
            "/ai/listing-marketing",
            post(copy_handlers::handle_listing_marketing),
        )
        .with_state(state)
}
