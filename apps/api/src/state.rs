use std::sync::Arc;

use crate::copywriter::Copywriter;
use crate::listings::repository::PropertyRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Property store. Postgres in production, in-memory in tests.
    pub properties: Arc<dyn PropertyRepository>,
    pub copywriter: Copywriter,
}
