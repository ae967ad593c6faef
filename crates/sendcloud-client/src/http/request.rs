/*
[INPUT]:  HTTP verb, API host + endpoint path, JSON payload, extra headers
[OUTPUT]: Immutable request descriptors, joined URIs, encoded query strings
[POS]:    HTTP layer - request construction
[UPDATE]: When changing URI joining or payload encoding rules
*/

use std::fmt;
use std::str::FromStr;

use reqwest::header::HeaderMap;
use serde_json::{Map, Number, Value};
use url::form_urlencoded;

use super::error::SendcloudError;

/// Ordered JSON object sent as a query string (GET) or JSON body (other verbs)
pub type Payload = Map<String, Value>;

/// HTTP verbs supported by the Sendcloud API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = SendcloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(SendcloudError::InvalidMethod(s.to_string())),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single API call before authentication and encoding are applied
#[derive(Debug, Clone)]
pub struct SendcloudRequest {
    method: HttpMethod,
    uri: String,
    payload: Payload,
    headers: HeaderMap,
}

impl SendcloudRequest {
    pub fn new(method: HttpMethod, uri: impl Into<String>, payload: Payload, headers: HeaderMap) -> Self {
        Self {
            method,
            uri: uri.into(),
            payload,
            headers,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Target URI with the payload appended as a query string for GET requests
    pub fn target_uri(&self) -> String {
        if self.method != HttpMethod::Get || self.payload.is_empty() {
            return self.uri.clone();
        }
        let separator = if self.uri.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.uri, separator, encode_query(&self.payload))
    }

    /// JSON body for non-GET requests with a non-empty payload
    pub fn body(&self) -> Result<Option<Vec<u8>>, SendcloudError> {
        if self.method == HttpMethod::Get || self.payload.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_vec(&self.payload)?))
    }
}

/// Join host and path with exactly one slash
///
/// Absolute `http(s)://` paths are returned without the host.
pub fn build_uri(host: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", host.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Encode a payload as a query string using PHP-style bracketed keys for nesting
///
/// Nulls are skipped, booleans become `1`/`0` and whole floats lose their fraction.
pub fn encode_query(payload: &Payload) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in payload {
        append_pair(&mut serializer, key, value);
    }
    serializer.finish()
}

// Integers as-is; floats use the shortest form, so `1.0` is written as `1`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn append_pair(serializer: &mut form_urlencoded::Serializer<'_, String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            serializer.append_pair(key, if *b { "1" } else { "0" });
        }
        Value::Number(n) => {
            serializer.append_pair(key, &number_text(n));
        }
        Value::String(s) => {
            serializer.append_pair(key, s);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_pair(serializer, &format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            for (sub_key, item) in map {
                append_pair(serializer, &format!("{key}[{sub_key}]"), item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[rstest]
    #[case("https://panel.sendcloud.sc", "/api/v2/parcels")]
    #[case("https://panel.sendcloud.sc/", "api/v2/parcels")]
    #[case("https://panel.sendcloud.sc//", "//api/v2/parcels")]
    #[case("https://panel.sendcloud.sc", "api/v2/parcels")]
    fn test_build_uri_single_slash(#[case] host: &str, #[case] path: &str) {
        assert_eq!(build_uri(host, path), "https://panel.sendcloud.sc/api/v2/parcels");
    }

    #[rstest]
    #[case("https://cdn.example.com/labels/42.pdf")]
    #[case("http://cdn.example.com/labels/42.pdf?token=abc")]
    fn test_build_uri_absolute_path(#[case] path: &str) {
        assert_eq!(build_uri("https://panel.sendcloud.sc", path), path);
    }

    #[rstest]
    #[case("get", HttpMethod::Get)]
    #[case("GET", HttpMethod::Get)]
    #[case("Post", HttpMethod::Post)]
    #[case("put", HttpMethod::Put)]
    #[case("DeLeTe", HttpMethod::Delete)]
    fn test_method_parse_case_insensitive(#[case] input: &str, #[case] expected: HttpMethod) {
        assert_eq!(input.parse::<HttpMethod>().unwrap(), expected);
    }

    #[test]
    fn test_method_parse_rejects_unknown() {
        let err = "patch".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, SendcloudError::InvalidMethod(m) if m == "patch"));
    }

    #[test]
    fn test_query_round_trip() {
        let payload = payload(json!({
            "to_country": "NL",
            "weight": 2.5,
            "note": "a&b=c d",
            "page": 3,
        }));
        let encoded = encode_query(&payload);
        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            decoded,
            vec![
                ("to_country".to_string(), "NL".to_string()),
                ("weight".to_string(), "2.5".to_string()),
                ("note".to_string(), "a&b=c d".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_nested_values() {
        let payload = payload(json!({
            "ids": [1, 2],
            "filter": {"status": "ready"},
            "cursor": null,
            "archived": false,
        }));
        let decoded: Vec<(String, String)> = form_urlencoded::parse(encode_query(&payload).as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            decoded,
            vec![
                ("ids[0]".to_string(), "1".to_string()),
                ("ids[1]".to_string(), "2".to_string()),
                ("filter[status]".to_string(), "ready".to_string()),
                ("archived".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_whole_floats_drop_fraction() {
        let payload = payload(json!({"weight": 1.0, "height": 2.5, "count": 3, "offset": -4.0}));
        assert_eq!(encode_query(&payload), "weight=1&height=2.5&count=3&offset=-4");
    }

    #[test]
    fn test_get_request_appends_query() {
        let request = SendcloudRequest::new(
            HttpMethod::Get,
            "https://panel.sendcloud.sc/api/v2/parcels",
            payload(json!({"tracking_number": "3SYZXG"})),
            HeaderMap::new(),
        );
        assert_eq!(
            request.target_uri(),
            "https://panel.sendcloud.sc/api/v2/parcels?tracking_number=3SYZXG"
        );
        assert!(request.body().unwrap().is_none());
    }

    #[test]
    fn test_get_request_extends_existing_query() {
        let request = SendcloudRequest::new(
            HttpMethod::Get,
            "https://cdn.example.com/label.pdf?token=abc",
            payload(json!({"dpi": 300})),
            HeaderMap::new(),
        );
        assert_eq!(request.target_uri(), "https://cdn.example.com/label.pdf?token=abc&dpi=300");
    }

    #[test]
    fn test_empty_payload_has_no_query_or_body() {
        let get = SendcloudRequest::new(HttpMethod::Get, "https://h/a", Payload::new(), HeaderMap::new());
        assert_eq!(get.target_uri(), "https://h/a");

        let post = SendcloudRequest::new(HttpMethod::Post, "https://h/a", Payload::new(), HeaderMap::new());
        assert_eq!(post.target_uri(), "https://h/a");
        assert!(post.body().unwrap().is_none());
    }

    #[test]
    fn test_post_request_encodes_json_body() {
        let request = SendcloudRequest::new(
            HttpMethod::Post,
            "https://h/api/v2/parcels",
            payload(json!({"parcel": {"name": "John", "request_label": true}})),
            HeaderMap::new(),
        );
        assert_eq!(request.target_uri(), "https://h/api/v2/parcels");
        let body: Value = serde_json::from_slice(&request.body().unwrap().unwrap()).unwrap();
        assert_eq!(body["parcel"]["name"], "John");
        assert_eq!(body["parcel"]["request_label"], true);
    }
}
