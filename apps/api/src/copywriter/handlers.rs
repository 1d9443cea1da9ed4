//! Axum route handlers for the AI copy endpoints.
//!
//! Bodies are taken as raw JSON so the credential check runs before any
//! field validation. A body that is not JSON at all is rejected first.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::copywriter::{CopyTemplate, MarketingCopy};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
}

/// POST /ai/listing-description
pub async fn handle_listing_description(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DescriptionResponse>, AppError> {
    let Json(payload) = payload?;
    let description = state
        .copywriter
        .generate(CopyTemplate::ListingDescription, payload)
        .await?;
    Ok(Json(DescriptionResponse { description }))
}

/// POST /ai/inquiry-reply
pub async fn handle_inquiry_reply(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReplyResponse>, AppError> {
    let Json(payload) = payload?;
    let reply = state
        .copywriter
        .generate(CopyTemplate::InquiryReply, payload)
        .await?;
    Ok(Json(ReplyResponse { reply }))
}

/// POST /ai/listing-marketing
///
/// A reply that is not the expected JSON is still a success: the raw text
/// fills both `highlights` and `caption`.
pub async fn handle_listing_marketing(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MarketingCopy>, AppError> {
    let Json(payload) = payload?;
    let raw = state
        .copywriter
        .generate(CopyTemplate::ListingMarketing, payload)
        .await?;
    Ok(Json(MarketingCopy::parse(&raw)))
}
