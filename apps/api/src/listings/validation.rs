use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::property::{NewProperty, PropertyType};

const DEFAULT_COUNTRY: &str = "USA";

/// Body of `POST /properties`. Numeric fields stay loose JSON so that
/// numeric strings from form inputs are accepted. Unknown fields, including
/// any caller-supplied `listingStatus`, are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub square_feet: Option<Value>,
    pub property_type: Option<String>,
    pub image_url: Option<String>,
    pub agent_id: Option<String>,
}

/// Checks required fields and coerces the payload into a `NewProperty`.
pub fn validate_new_property(request: CreatePropertyRequest) -> Result<NewProperty, AppError> {
    let title = non_blank(request.title);
    let description = non_blank(request.description);
    let price = coerce_number("price", request.price.as_ref())?;
    let city = non_blank(request.city);
    let property_type = non_blank(request.property_type);

    let missing: Vec<&str> = [
        ("title", title.is_none()),
        ("description", description.is_none()),
        ("price", price.is_none()),
        ("city", city.is_none()),
        ("propertyType", property_type.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect();

    let (Some(title), Some(description), Some(price), Some(city), Some(property_type)) =
        (title, description, price, city, property_type)
    else {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    };

    let property_type = PropertyType::parse(&property_type).ok_or_else(|| {
        let allowed: Vec<&str> = PropertyType::ALL.iter().map(|t| t.as_str()).collect();
        AppError::Validation(format!(
            "propertyType must be one of {}",
            allowed.join(", ")
        ))
    })?;

    Ok(NewProperty {
        title,
        description,
        price,
        city,
        state: non_blank(request.state),
        country: non_blank(request.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        address: non_blank(request.address),
        bedrooms: coerce_integer("bedrooms", request.bedrooms.as_ref())?,
        bathrooms: coerce_number("bathrooms", request.bathrooms.as_ref())?,
        square_feet: coerce_integer("squareFeet", request.square_feet.as_ref())?,
        property_type,
        image_url: non_blank(request.image_url),
        agent_id: non_blank(request.agent_id),
    })
}

/// Whitespace-only counts as absent; anything else is kept as sent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// JSON number or numeric string; `null` and blank strings are absent.
fn coerce_number(field: &str, value: Option<&Value>) -> Result<Option<f64>, AppError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        Some(_) => Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        ))),
        None => Err(AppError::Validation(format!("{field} must be a number"))),
    }
}

fn coerce_integer(field: &str, value: Option<&Value>) -> Result<Option<i32>, AppError> {
    match coerce_number(field, value)? {
        None => Ok(None),
        Some(n) if n.fract() != 0.0 => Err(AppError::Validation(format!(
            "{field} must be a whole number"
        ))),
        Some(n) if n > i32::MAX as f64 => {
            Err(AppError::Validation(format!("{field} is too large")))
        }
        Some(n) => Ok(Some(n as i32)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreatePropertyRequest {
        serde_json::from_value(body).unwrap()
    }

    fn validation_message(result: Result<NewProperty, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn minimal() -> Value {
        json!({
            "title": "Modern condo",
            "description": "Downtown views",
            "price": 325000,
            "city": "Austin",
            "propertyType": "CONDO"
        })
    }

    #[test]
    fn test_minimal_payload_gets_defaults() {
        let property = validate_new_property(request(minimal())).unwrap();
        assert_eq!(property.country, "USA");
        assert_eq!(property.property_type, PropertyType::Condo);
        assert!(property.state.is_none());
        assert!(property.bedrooms.is_none());
        assert!(property.bathrooms.is_none());
        assert!(property.square_feet.is_none());
    }

    #[test]
    fn test_missing_title_is_named() {
        let mut body = minimal();
        body.as_object_mut().unwrap().remove("title");
        let msg = validation_message(validate_new_property(request(body)));
        assert_eq!(msg, "Missing required fields: title");
    }

    #[test]
    fn test_all_missing_fields_listed_in_order() {
        let msg = validation_message(validate_new_property(request(json!({}))));
        assert_eq!(
            msg,
            "Missing required fields: title, description, price, city, propertyType"
        );
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let mut body = minimal();
        body["city"] = json!("  ");
        body["price"] = json!("");
        let msg = validation_message(validate_new_property(request(body)));
        assert_eq!(msg, "Missing required fields: price, city");
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let mut body = minimal();
        body["price"] = json!("450000");
        body["bedrooms"] = json!("3");
        body["bathrooms"] = json!("2.5");
        body["squareFeet"] = json!(1800);
        let property = validate_new_property(request(body)).unwrap();
        assert_eq!(property.price, 450_000.0);
        assert_eq!(property.bedrooms, Some(3));
        assert_eq!(property.bathrooms, Some(2.5));
        assert_eq!(property.square_feet, Some(1800));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut body = minimal();
        body["price"] = json!("cheap");
        let msg = validation_message(validate_new_property(request(body)));
        assert_eq!(msg, "price must be a number");
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut body = minimal();
        body["price"] = json!(-1);
        let msg = validation_message(validate_new_property(request(body)));
        assert_eq!(msg, "price must be a non-negative number");
    }

    #[test]
    fn test_fractional_bedrooms_rejected() {
        let mut body = minimal();
        body["bedrooms"] = json!(2.5);
        let msg = validation_message(validate_new_property(request(body)));
        assert_eq!(msg, "bedrooms must be a whole number");
    }

    #[test]
    fn test_oversized_square_feet_rejected() {
        let mut body = minimal();
        body["squareFeet"] = json!(3_000_000_000u64);
        let msg = validation_message(validate_new_property(request(body)));
        assert_eq!(msg, "squareFeet is too large");

        let mut body = minimal();
        body["bedrooms"] = json!("2147483647");
        let property = validate_new_property(request(body)).unwrap();
        assert_eq!(property.bedrooms, Some(i32::MAX));
    }

    #[test]
    fn test_text_fields_are_stored_as_sent() {
        let mut body = minimal();
        body["title"] = json!("  Loft ");
        body["city"] = json!("Austin ");
        body["agentId"] = json!(" agent-7");
        let property = validate_new_property(request(body)).unwrap();
        assert_eq!(property.title, "  Loft ");
        assert_eq!(property.city, "Austin ");
        assert_eq!(property.agent_id.as_deref(), Some(" agent-7"));
    }

    #[test]
    fn test_unknown_property_type_rejected() {
        let mut body = minimal();
        body["propertyType"] = json!("CASTLE");
        let msg = validation_message(validate_new_property(request(body)));
        assert!(msg.starts_with("propertyType must be one of HOUSE"));
    }

    #[test]
    fn test_blank_country_defaults_and_optionals_null() {
        let mut body = minimal();
        body["country"] = json!("");
        body["address"] = json!("");
        body["imageUrl"] = json!(null);
        body["agentId"] = json!("agent-7");
        let property = validate_new_property(request(body)).unwrap();
        assert_eq!(property.country, "USA");
        assert!(property.address.is_none());
        assert!(property.image_url.is_none());
        assert_eq!(property.agent_id.as_deref(), Some("agent-7"));
    }

    #[test]
    fn test_zero_price_is_present() {
        let mut body = minimal();
        body["price"] = json!(0);
        let property = validate_new_property(request(body)).unwrap();
        assert_eq!(property.price, 0.0);
    }
}
