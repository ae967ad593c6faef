/*
[INPUT]:  Canned transport responses and test payloads
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for sendcloud-client tests

use std::sync::{Arc, Mutex};

use sendcloud_client::{
    ClientConfig, Credentials, HttpTransport, Payload, SendcloudClient, TransportError,
    TransportRequest, TransportResponse,
};
use serde_json::Value;

/// Transport that records every request and answers with a fixed response
#[derive(Debug, Clone)]
pub struct MockTransport {
    status: u16,
    body: String,
    reason: Option<String>,
    fail: bool,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            reason: None,
            fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Report `reason` as the response's reason phrase
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// A transport whose every call fails at the connection level
    pub fn unreachable() -> Self {
        Self {
            fail: true,
            ..Self::respond(0, "")
        }
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests().pop().expect("transport was never called")
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(request);
        if self.fail {
            return Err(TransportError::Connect(
                "dns error: failed to lookup address information".to_string(),
            ));
        }
        let mut response = TransportResponse::new(self.status, self.body.as_bytes());
        response.reason = self.reason.clone();
        Ok(response)
    }
}

pub fn test_credentials() -> Credentials {
    Credentials::new("public-key", "secret-key")
}

/// Client wired to `transport`, plus a handle to inspect it
pub fn client_with(transport: MockTransport) -> (SendcloudClient, MockTransport) {
    let client = SendcloudClient::with_transport(
        test_credentials(),
        ClientConfig::default(),
        transport.clone(),
    )
    .expect("client init");
    (client, transport)
}

pub fn payload(value: Value) -> Payload {
    value.as_object().cloned().expect("payload must be a JSON object")
}
