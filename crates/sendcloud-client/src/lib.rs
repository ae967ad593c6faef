/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Sendcloud client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Blocking client for the Sendcloud shipping API.
//!
//! Requests go through [`SendcloudClient`], which adds Basic authentication,
//! encodes the payload (query string for GET, JSON body otherwise) and hands
//! the result to a pluggable [`HttpTransport`]. Responses come back as
//! [`SendcloudResponse`] envelopes. A 400 response is not an error: the
//! envelope carries the API's `error` object instead of a payload.

pub mod http;
pub mod modules;
pub mod types;
pub mod webhooks;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    DEFAULT_API_HOST,
    HttpMethod,
    HttpTransport,
    Payload,
    ReqwestTransport,
    Result,
    SendcloudClient,
    SendcloudError,
    SendcloudRequest,
    SendcloudResponse,
    TransportError,
    TransportRequest,
    TransportResponse,
};

pub use modules::Module;

// Re-export all types
pub use types::*;

pub use webhooks::{SIGNATURE_HEADER, WebhookVerifier};
