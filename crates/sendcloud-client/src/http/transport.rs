/*
[INPUT]:  Fully built requests (method, URI, merged headers, encoded body)
[OUTPUT]: Raw HTTP responses (status, headers, body bytes, version, reason)
[POS]:    HTTP layer - pluggable transport boundary
[UPDATE]: When changing the transport contract or the default reqwest transport
*/

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::Version;
use thiserror::Error;
use tracing::trace;

use super::client::ClientConfig;
use super::request::HttpMethod;

/// Connection-level failures raised by a transport
#[derive(Error, Debug)]
pub enum TransportError {
    /// DNS, TCP or TLS failure before a response was received
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request did not complete in time
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other failure while sending or reading the response
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// A request as handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Per-request timeout taken from configuration, applied by the transport
    pub timeout: Option<Duration>,
}

/// A raw response as returned by the transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Protocol version without the `HTTP/` prefix, e.g. `1.1`
    pub version: String,
    /// Reason phrase reported by the transport, if any
    pub reason: Option<String>,
}

impl TransportResponse {
    /// Build a response with an empty header map, HTTP/1.1 and no reason phrase
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            version: "1.1".to_string(),
            reason: None,
        }
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Synchronous HTTP transport used by [`SendcloudClient`](super::SendcloudClient)
///
/// Implementations must return every HTTP status as a response; only
/// failures where no response was received are errors.
pub trait HttpTransport: fmt::Debug + Send + Sync {
    fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.uri)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        let status = response.status();
        let version = version_string(response.version());
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();
        trace!(status = status.as_u16(), bytes = body.len(), "transport response received");

        Ok(TransportResponse {
            status: status.as_u16(),
            headers,
            body,
            version,
            reason: status.canonical_reason().map(str::to_string),
        })
    }
}

fn version_string(version: Version) -> String {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
    .to_string()
}
