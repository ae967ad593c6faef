/*
[INPUT]:  JSON subtrees of parcel, shipping-price and webhook bodies
[OUTPUT]: Serde structs with string decimals and millisecond timestamps
[POS]:    Data layer - optional typed decoding for SendcloudResponse::decode
[UPDATE]: When documented response fields change
*/

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `error` subtree of a rejected request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub request: Option<String>,
}

impl ErrorDetail {
    /// Read an error subtree, accepting a bare string as the message
    ///
    /// Fields are read one by one so a mistyped field never hides the others.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(message) => Self {
                message: Some(message.clone()),
                ..Self::default()
            },
            Value::Object(map) => Self {
                code: map.get("code").and_then(status_code),
                message: map.get("message").and_then(text),
                request: map.get("request").and_then(text),
            },
            _ => Self::default(),
        }
    }
}

fn status_code(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|code| u16::try_from(code).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Scalars are stringified; nested values are kept as compact JSON.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelStatus {
    pub id: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub iso_2: String,
    #[serde(default)]
    pub iso_3: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentMethod {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Documented subset of a parcel; unknown fields are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub tracking_url: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub status: Option<ParcelStatus>,
    #[serde(default)]
    pub shipment: Option<ShipmentMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
    pub value: f64,
}

/// One entry of the shipping-price response; `price` is null when no pricing exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingPrice {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    pub to_country: String,
    #[serde(default)]
    pub breakdown: Vec<PriceBreakdown>,
}

/// Webhook notification body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub action: String,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl WebhookEvent {
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// Parcel attached to `parcel_status_changed` notifications
    pub fn parcel(&self) -> Option<Parcel> {
        self.data
            .get("parcel")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}
