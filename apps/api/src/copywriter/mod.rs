//! Copy generator — renders a listing payload into a prompt, sends it to the
//! hosted model and hands the text back. Nothing is persisted.
//!
//! Flow: credential check → required fields → typed decode → prompt →
//!       `CompletionClient::complete` → trim → empty check.
//!
//! All three AI routes share `Copywriter::generate`; what differs per route
//! lives in `CopyTemplate`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::copywriter::prompts::{
    render_description, render_inquiry_reply, render_marketing, DescriptionInput, InquiryInput,
    MarketingInput,
};
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, CompletionOptions};

pub mod handlers;
pub mod prompts;

pub const MISSING_API_KEY_MESSAGE: &str = "OPENAI_API_KEY is not configured on the server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTemplate {
    ListingDescription,
    InquiryReply,
    ListingMarketing,
}

impl CopyTemplate {
    /// Body fields that must be present and non-blank.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            CopyTemplate::ListingDescription => &["city", "propertyType", "price"],
            CopyTemplate::InquiryReply => &["propertyTitle", "buyerMessage"],
            CopyTemplate::ListingMarketing => &["title", "city", "propertyType"],
        }
    }

    pub fn options(&self) -> CompletionOptions {
        CompletionOptions {
            json_object: matches!(self, CopyTemplate::ListingMarketing),
            ..CompletionOptions::default()
        }
    }

    /// Decodes the payload into this template's input type and renders it.
    fn render(&self, payload: Value) -> Result<String, serde_json::Error> {
        Ok(match self {
            CopyTemplate::ListingDescription => {
                render_description(&serde_json::from_value::<DescriptionInput>(payload)?)
            }
            CopyTemplate::InquiryReply => {
                render_inquiry_reply(&serde_json::from_value::<InquiryInput>(payload)?)
            }
            CopyTemplate::ListingMarketing => {
                render_marketing(&serde_json::from_value::<MarketingInput>(payload)?)
            }
        })
    }
}

impl fmt::Display for CopyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CopyTemplate::ListingDescription => "listing description",
            CopyTemplate::InquiryReply => "inquiry reply",
            CopyTemplate::ListingMarketing => "marketing copy",
        })
    }
}

#[derive(Clone)]
pub struct Copywriter {
    client: Arc<dyn CompletionClient>,
}

impl Copywriter {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generates trimmed, non-empty text for `template` from a raw JSON body.
    pub async fn generate(&self, template: CopyTemplate, payload: Value) -> Result<String, AppError> {
        if !self.client.is_configured() {
            return Err(AppError::Configuration(MISSING_API_KEY_MESSAGE.to_string()));
        }

        let Value::Object(fields) = payload else {
            return Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            ));
        };

        let missing = missing_fields(template, &fields);
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "{} required to generate {template}",
                missing.join(", ")
            )));
        }

        let prompt = template
            .render(Value::Object(fields))
            .map_err(|e| AppError::Validation(format!("Invalid {template} request: {e}")))?;

        debug!("Requesting {template} ({} prompt chars)", prompt.len());

        let text = self
            .client
            .complete(&prompt, &template.options())
            .await
            .map_err(|e| AppError::Llm(format!("{template} generation failed: {e}")))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyOutput(template.to_string()));
        }

        Ok(text.to_string())
    }
}

fn missing_fields(template: CopyTemplate, fields: &Map<String, Value>) -> Vec<&'static str> {
    template
        .required_fields()
        .iter()
        .copied()
        .filter(|name| match fields.get(*name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        })
        .collect()
}

/// Highlights and caption for social posts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarketingCopy {
    pub highlights: Vec<String>,
    pub caption: String,
}

#[derive(Deserialize)]
struct MarketingReply {
    highlights: Option<Vec<String>>,
    caption: Option<String>,
}

impl MarketingCopy {
    /// Reads the model's JSON reply. Missing keys become empty; text that is
    /// not the expected shape is placed verbatim in both fields.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<MarketingReply>(raw) {
            Ok(reply) => MarketingCopy {
                highlights: reply.highlights.unwrap_or_default(),
                caption: reply.caption.unwrap_or_default(),
            },
            Err(e) => {
                warn!("Marketing reply was not the expected JSON ({e}); using raw text");
                MarketingCopy {
                    highlights: vec![raw.to_string()],
                    caption: raw.to_string(),
                }
            }
        }
    }
}
