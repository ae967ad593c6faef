/*
[INPUT]:  Credentials, client configuration, pluggable transport
[OUTPUT]: Authenticated dispatch of API requests and classified responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch/classification rules
*/

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{Result, SendcloudError};
use super::request::{HttpMethod, Payload, SendcloudRequest, build_uri};
use super::response::{SendcloudResponse, UNKNOWN_STATUS, reason_phrase};
use super::transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};

/// Default Sendcloud API host
pub const DEFAULT_API_HOST: &str = "https://panel.sendcloud.sc";

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_PDF: &str = "application/pdf";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Host every relative endpoint is joined to
    pub api_host: String,
    /// Per-request timeout handed to the transport
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Connect timeout used by the default transport
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Extra headers sent with every request, overriding the defaults
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            headers: BTreeMap::new(),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

/// Credentials for Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Base64 of `username:password`
    pub fn token(&self) -> String {
        BASE64.encode(format!("{}:{}", self.username, self.password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Callback invoked with every request just before it is dispatched
pub type RequestHook = Arc<dyn Fn(&SendcloudRequest) + Send + Sync>;

/// Main HTTP client for the Sendcloud API
///
/// Dispatch only reads client state; updating credentials or the host
/// requires `&mut self`.
pub struct SendcloudClient {
    auth_token: String,
    api_host: String,
    timeout: Duration,
    option_headers: HeaderMap,
    transport: Box<dyn HttpTransport>,
    request_hook: Option<RequestHook>,
}

impl fmt::Debug for SendcloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendcloudClient")
            .field("api_host", &self.api_host)
            .field("timeout", &self.timeout)
            .field("option_headers", &self.option_headers)
            .field("transport", &self.transport)
            .field("request_hook", &self.request_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl SendcloudClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration and the default transport
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(credentials, config, transport)
    }

    /// Create a new client with custom configuration and transport
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: impl HttpTransport + 'static,
    ) -> Result<Self> {
        Ok(Self {
            auth_token: credentials.token(),
            api_host: config.api_host,
            timeout: config.timeout,
            option_headers: header_map(&config.headers)?,
            transport: Box::new(transport),
            request_hook: None,
        })
    }

    /// Replace the credentials used for every subsequent request
    pub fn set_auth_credentials(&mut self, credentials: &Credentials) {
        self.auth_token = credentials.token();
    }

    /// Override the API host, e.g. for testing
    pub fn set_api_host(&mut self, api_host: impl Into<String>) {
        self.api_host = api_host.into();
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Replace the transport
    pub fn set_transport(&mut self, transport: impl HttpTransport + 'static) {
        self.transport = Box::new(transport);
    }

    /// Register a callback that sees every request before dispatch
    pub fn set_request_hook(&mut self, hook: impl Fn(&SendcloudRequest) + Send + Sync + 'static) {
        self.request_hook = Some(Arc::new(hook));
    }

    /// Send a request and decode the JSON response
    ///
    /// A 400 response is returned as an envelope carrying the API's error;
    /// other 4xx/5xx statuses fail with [`SendcloudError::Api`].
    pub fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Payload,
    ) -> Result<SendcloudResponse> {
        let response = self.request_raw(method, endpoint, payload, accept(APPLICATION_JSON))?;
        SendcloudResponse::from_transport(response)
    }

    /// Send a request accepting a PDF and return the undecoded response
    pub fn request_file(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Payload,
    ) -> Result<TransportResponse> {
        self.request_raw(method, endpoint, payload, accept(APPLICATION_PDF))
    }

    /// Send a request with extra headers and return the undecoded response
    pub fn request_raw(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Payload,
        headers: HeaderMap,
    ) -> Result<TransportResponse> {
        let uri = build_uri(&self.api_host, endpoint);
        let request = self.build_request(method, uri, payload, headers);
        if let Some(hook) = &self.request_hook {
            hook(&request);
        }

        let response = self.submit_request(&request)?;
        classify(&request, response)
    }

    /// Create a request descriptor
    pub fn build_request(
        &self,
        method: HttpMethod,
        uri: impl Into<String>,
        payload: Payload,
        headers: HeaderMap,
    ) -> SendcloudRequest {
        SendcloudRequest::new(method, uri, payload, headers)
    }

    /// Authenticate, encode and pass a request to the transport
    ///
    /// Returns whatever the transport returns; status codes are not inspected.
    pub fn submit_request(&self, request: &SendcloudRequest) -> Result<TransportResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization()?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        merge_headers(&mut headers, request.headers());
        merge_headers(&mut headers, &self.option_headers);

        let transport_request = TransportRequest {
            method: request.method(),
            uri: request.target_uri(),
            body: request.body()?,
            headers,
            timeout: Some(self.timeout),
        };

        debug!(
            method = %transport_request.method,
            uri = %transport_request.uri,
            "dispatching request"
        );
        let response = self.transport.send(transport_request)?;
        debug!(status = response.status, "response received");
        Ok(response)
    }

    fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::try_from(format!("Basic {}", self.auth_token))
            .map_err(|e| SendcloudError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Pass 1xx-3xx and 400 through, escalate every other 4xx/5xx
fn classify(request: &SendcloudRequest, response: TransportResponse) -> Result<TransportResponse> {
    let status = response.status;
    if status <= 400 {
        return Ok(response);
    }

    let kind = if status < 500 { "Client" } else { "Server" };
    let reason = match response.reason.as_deref() {
        Some(reason) if !reason.is_empty() => reason,
        _ => reason_phrase(status).unwrap_or(UNKNOWN_STATUS),
    };
    let message = format!(
        "{kind} error: `{} {}` resulted in a `{status} {reason}` response",
        request.method(),
        request.target_uri(),
    );
    warn!(status, uri = %request.uri(), "API request failed");

    Err(SendcloudError::Api {
        status,
        message,
        body: response.text(),
    })
}

fn accept(content_type: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(content_type));
    headers
}

// Later maps replace every value of a header name present in earlier ones.
fn merge_headers(target: &mut HeaderMap, overrides: &HeaderMap) {
    for name in overrides.keys() {
        target.remove(name);
        for value in overrides.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| SendcloudError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| SendcloudError::InvalidHeader(format!("{name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
