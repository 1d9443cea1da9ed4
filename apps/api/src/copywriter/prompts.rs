// Prompt templates and payload types for the copy generator.
// Placeholders in `{braces}` are filled by `render_*` before sending.

use serde::Deserialize;

/// Listing description prompt.
/// Replace: {city}, {property_type}, {bedrooms}, {bathrooms}, {price}, {notes}
pub const LISTING_DESCRIPTION_TEMPLATE: &str = r#"You are an expert real estate copywriter.

Write a polished, compelling listing description for this property:

- City: {city}
- Property type: {property_type}
- Bedrooms: {bedrooms}
- Bathrooms: {bathrooms}
- Price: {price}
- Agent notes: {notes}

Guidelines:
- Two or three short paragraphs.
- Warm and inviting without being cheesy.
- Highlight the location and the key interior features.
- Do NOT invent addresses, HOA details or amenities not listed above.
- Do NOT include contact details or calls to action.
Return only the description text, with no headings or markdown."#;

/// Inquiry reply prompt.
/// Replace: {property_title}, {city}, {price}, {bedrooms}, {bathrooms},
///          {agent_notes}, {buyer_message}
pub const INQUIRY_REPLY_TEMPLATE: &str = r#"You are a friendly, professional real estate agent.

Write a concise email reply to a prospective buyer who asked about a listing.

Property:
- Title: {property_title}
- City: {city}
- Price: {price}
- Bedrooms: {bedrooms}
- Bathrooms: {bathrooms}
- Agent notes: {agent_notes}

Buyer message:
"{buyer_message}"

Guidelines:
- Helpful and professional.
- Restate only the property details relevant to the question.
- Suggest a next step such as a showing or a follow-up question.
- Do NOT include phone numbers or other personal contact details.
- Do NOT commit to specific dates or times.
Return only the email body, with no salutation and no signature."#;

/// Marketing copy prompt. The reply is requested as a JSON object.
/// Replace: {title}, {city}, {property_type}, {price}, {bedrooms},
///          {bathrooms}, {notes}
pub const LISTING_MARKETING_TEMPLATE: &str = r#"You are a real estate marketing copywriter.

Produce:
1) 3 to 6 short highlight bullets for this property
2) One social media caption

Property:
- Title: {title}
- City: {city}
- Type: {property_type}
- Price: {price}
- Bedrooms: {bedrooms}
- Bathrooms: {bathrooms}
- Agent notes: {notes}

Rules:
- Highlights: punchy and benefit-focused, at most 80 characters each.
- Caption: one to three sentences with a subtle call to action; emoji optional.
- Do NOT include phone numbers, emails or URLs.

Return ONLY valid JSON in this shape:
{
  "highlights": ["highlight 1", "highlight 2"],
  "caption": "caption text"
}"#;

const NOT_AVAILABLE: &str = "N/A";
const NOT_SPECIFIED: &str = "Not specified";
const NO_NOTES: &str = "None";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionInput {
    pub city: String,
    pub property_type: String,
    pub price: f64,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryInput {
    pub property_title: String,
    pub buyer_message: String,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub agent_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingInput {
    pub title: String,
    pub city: String,
    pub property_type: String,
    pub price: Option<f64>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub notes: Option<String>,
}

pub fn render_description(input: &DescriptionInput) -> String {
    render(
        LISTING_DESCRIPTION_TEMPLATE,
        &[
            ("city", &input.city),
            ("property_type", &input.property_type),
            ("bedrooms", &count_or_na(input.bedrooms)),
            ("bathrooms", &count_or_na(input.bathrooms)),
            ("price", &format_price(input.price)),
            ("notes", notes_or_none(input.notes.as_deref())),
        ],
    )
}

pub fn render_inquiry_reply(input: &InquiryInput) -> String {
    let city = input
        .city
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE);

    render(
        INQUIRY_REPLY_TEMPLATE,
        &[
            ("property_title", &input.property_title),
            ("city", city),
            ("price", &price_or_unspecified(input.price)),
            ("bedrooms", &count_or_na(input.bedrooms)),
            ("bathrooms", &count_or_na(input.bathrooms)),
            ("agent_notes", notes_or_none(input.agent_notes.as_deref())),
            ("buyer_message", &input.buyer_message),
        ],
    )
}

pub fn render_marketing(input: &MarketingInput) -> String {
    render(
        LISTING_MARKETING_TEMPLATE,
        &[
            ("title", &input.title),
            ("city", &input.city),
            ("property_type", &input.property_type),
            ("price", &price_or_unspecified(input.price)),
            ("bedrooms", &count_or_na(input.bedrooms)),
            ("bathrooms", &count_or_na(input.bathrooms)),
            ("notes", notes_or_none(input.notes.as_deref())),
        ],
    )
}

/// Fills `{name}` placeholders in one pass over `template`. Substituted text
/// is never rescanned; braces that do not name a known value are kept.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });

        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// `$` plus a thousands-grouped amount, up to three decimals: `$1,250,000`.
pub fn format_price(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let fraction = rounded.fract();
    let fraction = if fraction > 0.0 {
        let text = format!("{fraction:.3}");
        text.trim_end_matches('0')
            .trim_start_matches('0')
            .to_string()
    } else {
        String::new()
    };

    format!("{sign}${grouped}{fraction}")
}

fn price_or_unspecified(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 => format_price(p),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn count_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn notes_or_none(notes: Option<&str>) -> &str {
    notes.filter(|n| !n.trim().is_empty()).unwrap_or(NO_NOTES)
}
