/*
[INPUT]:  Raw transport responses (status, headers, body bytes)
[OUTPUT]: Decoded response envelopes with payload XOR error and dynamic field lookup
[POS]:    HTTP layer - response interpretation
[UPDATE]: When changing payload/error separation or accessor names
*/

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::{Result, SendcloudError};
use super::transport::TransportResponse;
use crate::types::ErrorDetail;

/// Reason phrase used when a status code is not in the table
pub const UNKNOWN_STATUS: &str = "Unknown status code";

/// Standard reason phrase for a status code
pub fn reason_phrase(status: u16) -> Option<&'static str> {
    let phrase = match status {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-status",
        208 => "Already Reported",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        306 => "Switch Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Time-out",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-URI Too Large",
        415 => "Unsupported Media Type",
        416 => "Requested range not satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Unordered Collection",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Time-out",
        505 => "HTTP Version not supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => return None,
    };
    Some(phrase)
}

/// Decoded API response
///
/// Exactly one of [`payload`](Self::payload) and [`error`](Self::error) is set:
/// a body with a non-null top-level `error` key populates `error`, any other
/// body becomes the payload.
#[derive(Debug, Clone)]
pub struct SendcloudResponse {
    status_code: u16,
    reason_phrase: String,
    protocol_version: String,
    headers: HeaderMap,
    payload: Option<Value>,
    error: Option<Value>,
}

impl SendcloudResponse {
    /// Build an envelope from raw parts
    ///
    /// An empty or missing `reason` falls back to the standard phrase table.
    pub fn new(
        status: u16,
        headers: HeaderMap,
        body: &[u8],
        version: impl Into<String>,
        reason: Option<&str>,
    ) -> Result<Self> {
        let reason_phrase = match reason {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => reason_phrase(status).unwrap_or(UNKNOWN_STATUS).to_string(),
        };
        let (payload, error) = interpret_response(body, status)?;

        Ok(Self {
            status_code: status,
            reason_phrase,
            protocol_version: version.into(),
            headers,
            payload,
            error,
        })
    }

    /// Decode a transport response, keeping the reason phrase it reported
    pub fn from_transport(response: TransportResponse) -> Result<Self> {
        Self::new(
            response.status,
            response.headers,
            &response.body,
            response.version,
            response.reason.as_deref(),
        )
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Decoded body, absent when the body carried an `error` key
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// The body's `error` subtree, if any
    pub fn error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    /// Typed view of the `error` subtree
    pub fn error_detail(&self) -> Option<ErrorDetail> {
        self.error.as_ref().map(ErrorDetail::from_value)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.error.is_none()
    }

    /// True for the 400 responses the API uses to report rejected input
    pub fn is_rejected(&self) -> bool {
        self.status_code == 400
    }

    /// Copy with a new status; an empty reason uses the standard phrase
    pub fn with_status(&self, code: u16, reason: &str) -> Self {
        let reason_phrase = if reason.is_empty() {
            reason_phrase(code).unwrap_or_default().to_string()
        } else {
            reason.to_string()
        };
        Self {
            status_code: code,
            reason_phrase,
            ..self.clone()
        }
    }

    /// Turn an error-bearing envelope into [`SendcloudError::Api`]
    pub fn error_for_payload(self) -> Result<Self> {
        match &self.error {
            None => Ok(self),
            Some(error) => {
                let detail = ErrorDetail::from_value(error);
                Err(SendcloudError::Api {
                    status: self.status_code,
                    message: detail
                        .message
                        .unwrap_or_else(|| self.reason_phrase.clone()),
                    body: error.to_string(),
                })
            }
        }
    }

    /// Look up a field by name
    ///
    /// Keys naming an accessor (`status_code`, `reason-phrase`, `payload`, ...)
    /// resolve to that accessor; any other key is read from the payload object.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.accessor(key) {
            return value;
        }
        self.payload_object()?.get(key).cloned()
    }

    /// Whether [`get`](Self::get) would resolve `key` through an accessor or a non-null payload field
    pub fn has(&self, key: &str) -> bool {
        if self.accessor(key).is_some() {
            return true;
        }
        self.payload_object()
            .and_then(|payload| payload.get(key))
            .is_some_and(|value| !value.is_null())
    }

    /// Deserialize the whole payload into a typed structure
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let payload = self.payload.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(payload)?)
    }

    /// Deserialize one field of the payload, `None` when the field is absent
    pub fn decode_field<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn payload_object(&self) -> Option<&Map<String, Value>> {
        self.payload.as_ref().and_then(Value::as_object)
    }

    // Outer None: no accessor with that name. Inner None: accessor has no value.
    fn accessor(&self, key: &str) -> Option<Option<Value>> {
        let value = match accessor_name(key).as_str() {
            "statuscode" => Some(Value::from(self.status_code)),
            "reasonphrase" => Some(Value::from(self.reason_phrase.clone())),
            "protocolversion" => Some(Value::from(self.protocol_version.clone())),
            "headers" => Some(headers_value(&self.headers)),
            "payload" => self.payload.clone(),
            "error" => self.error.clone(),
            _ => return None,
        };
        Some(value)
    }
}

fn accessor_name(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn headers_value(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for name in headers.keys() {
        let values: Vec<Value> = headers
            .get_all(name)
            .iter()
            .map(|v| Value::from(String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        map.insert(name.as_str().to_string(), Value::Array(values));
    }
    Value::Object(map)
}

fn interpret_response(body: &[u8], status: u16) -> Result<(Option<Value>, Option<Value>)> {
    let decoded: Value = serde_json::from_slice(body).map_err(|source| SendcloudError::InvalidPayload {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    })?;

    match decoded.get("error") {
        Some(error) if !error.is_null() => Ok((None, Some(error.clone()))),
        _ => Ok((Some(decoded), None)),
    }
}
