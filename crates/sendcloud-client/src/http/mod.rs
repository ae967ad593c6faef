/*
[INPUT]:  Credentials, client configuration, endpoint paths and payloads
[OUTPUT]: Dispatched requests and decoded response envelopes
[POS]:    HTTP layer - request/response pipeline
[UPDATE]: When changing dispatch, encoding or interpretation behavior
*/

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use error::{Result, SendcloudError};
pub use request::{HttpMethod, Payload, SendcloudRequest, build_uri, encode_query};
pub use response::{SendcloudResponse, UNKNOWN_STATUS, reason_phrase};
pub use transport::{
    HttpTransport, ReqwestTransport, TransportError, TransportRequest, TransportResponse,
};

pub use client::{ClientConfig, Credentials, DEFAULT_API_HOST, RequestHook, SendcloudClient};
