/*
[INPUT]:  Mock transport responses
[OUTPUT]: Test results for the request/response pipeline
[POS]:    Integration tests - dispatch, classification, interpretation
[UPDATE]: When dispatch or interpretation behavior changes
*/

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{MockTransport, client_with, payload, test_credentials};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use sendcloud_client::{
    ClientConfig, Credentials, HttpMethod, Payload, SendcloudClient, SendcloudError,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_get_parcel_scenario() {
    let (client, transport) = client_with(MockTransport::respond(
        200,
        r#"{"parcel":{"id":42,"status":{"id":1}}}"#,
    ));

    let method: HttpMethod = assert_ok!("get".parse());
    let response = assert_ok!(client.request(method, "/api/v2/parcels/42", Payload::new()));

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.reason_phrase(), "OK");
    let parcel = response.get("parcel").expect("parcel field");
    assert_eq!(parcel["id"], 42);
    assert_eq!(response.payload().unwrap()["parcel"], parcel);
    assert!(response.error().is_none());

    let sent = transport.last_request();
    assert_eq!(sent.method, HttpMethod::Get);
    assert_eq!(sent.uri, "https://panel.sendcloud.sc/api/v2/parcels/42");
    assert!(sent.body.is_none());
}

#[test]
fn test_default_headers() {
    let (client, transport) = client_with(MockTransport::respond(200, "{}"));
    assert_ok!(client.request(HttpMethod::Get, "api/v2/parcels", Payload::new()));

    let sent = transport.last_request();
    assert_eq!(
        sent.headers.get(AUTHORIZATION).unwrap(),
        &format!("Basic {}", test_credentials().token())
    );
    assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(sent.headers.get(ACCEPT).unwrap(), "application/json");
    assert_eq!(sent.timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_caller_headers_override_defaults() {
    let transport = MockTransport::respond(200, "{}");
    let mut config = ClientConfig::default();
    config
        .headers
        .insert("Content-Type".to_string(), "application/vnd.sendcloud+json".to_string());
    config
        .headers
        .insert("X-Integration".to_string(), "shop-42".to_string());
    let client = assert_ok!(SendcloudClient::with_transport(
        test_credentials(),
        config,
        transport.clone()
    ));

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer override"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    assert_ok!(client.request_raw(HttpMethod::Get, "/api/v2/parcels", Payload::new(), headers));

    let sent = transport.last_request();
    assert_eq!(sent.headers.get(AUTHORIZATION).unwrap(), "Bearer override");
    assert_eq!(
        sent.headers.get(CONTENT_TYPE).unwrap(),
        "application/vnd.sendcloud+json"
    );
    assert_eq!(sent.headers.get("x-integration").unwrap(), "shop-42");
    assert_eq!(sent.headers.get_all(CONTENT_TYPE).iter().count(), 1);
}

#[test]
fn test_get_payload_becomes_query_string() {
    let (client, transport) = client_with(MockTransport::respond(200, "[]"));
    let query = payload(json!({"to_country": "NL", "ids": [1, 2]}));
    assert_ok!(client.request(HttpMethod::Get, "/api/v2/parcels", query));

    let sent = transport.last_request();
    assert_eq!(
        sent.uri,
        "https://panel.sendcloud.sc/api/v2/parcels?to_country=NL&ids%5B0%5D=1&ids%5B1%5D=2"
    );
    assert!(sent.body.is_none());
}

#[test]
fn test_post_payload_becomes_json_body() {
    let (client, transport) = client_with(MockTransport::respond(200, r#"{"parcel":{"id":1}}"#));
    let body = payload(json!({"parcel": {"name": "John Doe", "country": "NL"}}));
    assert_ok!(client.request(HttpMethod::Post, "/api/v2/parcels", body.clone()));

    let sent = transport.last_request();
    assert_eq!(sent.uri, "https://panel.sendcloud.sc/api/v2/parcels");
    let decoded: Payload = serde_json::from_slice(&sent.body.unwrap()).unwrap();
    assert_eq!(decoded, body);
}

#[test]
fn test_bad_request_is_returned_not_raised() {
    let (client, _) = client_with(MockTransport::respond(
        400,
        r#"{"error":{"message":"bad request"}}"#,
    ));

    let response = assert_ok!(client.request(HttpMethod::Post, "/api/v2/parcels", Payload::new()));
    assert_eq!(response.status_code(), 400);
    assert!(response.is_rejected());
    assert!(response.payload().is_none());
    assert_eq!(response.error().unwrap()["message"], "bad request");
    assert_eq!(
        response.error_detail().unwrap().message.as_deref(),
        Some("bad request")
    );
}

#[test]
fn test_server_error_is_api_failure() {
    let (client, _) = client_with(MockTransport::respond(500, r#"{"error":"boom"}"#));

    let err = assert_err!(client.request(HttpMethod::Get, "/api/v2/parcels", Payload::new()));
    match err {
        SendcloudError::Api { status, message, body } => {
            assert_eq!(status, 500);
            assert!(message.starts_with("Server error:"));
            assert_eq!(body, r#"{"error":"boom"}"#);
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_not_found_is_api_failure() {
    let (client, _) = client_with(MockTransport::respond(404, r#"{"error":{"code":404}}"#));
    let err = assert_err!(client.request(HttpMethod::Get, "/api/v2/parcels/1", Payload::new()));
    assert_eq!(err.status(), Some(404));
}

#[test]
fn test_transport_reason_phrase_is_kept() {
    let (client, _) = client_with(MockTransport::respond(200, "{}").with_reason("Custom Reason"));
    let response = assert_ok!(client.request(HttpMethod::Get, "/api/v2/parcels", Payload::new()));
    assert_eq!(response.reason_phrase(), "Custom Reason");
    assert_eq!(response.get("reason_phrase").unwrap(), "Custom Reason");
}

#[test]
fn test_api_failure_message_uses_transport_reason() {
    let (client, _) = client_with(MockTransport::respond(429, "{}").with_reason("Slow Down"));
    let err = assert_err!(client.request(HttpMethod::Get, "/api/v2/parcels", Payload::new()));
    match err {
        SendcloudError::Api { status, message, .. } => {
            assert_eq!(status, 429);
            assert!(message.ends_with("resulted in a `429 Slow Down` response"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_transport_failure_propagates() {
    let (client, transport) = client_with(MockTransport::unreachable());
    let err = assert_err!(client.request(HttpMethod::Get, "/api/v2/parcels", Payload::new()));
    assert!(err.is_transport_error());
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_malformed_json_is_invalid_payload() {
    let (client, _) = client_with(MockTransport::respond(200, "<html>maintenance</html>"));
    let err = assert_err!(client.request(HttpMethod::Get, "/api/v2/parcels", Payload::new()));
    match err {
        SendcloudError::InvalidPayload { status, body, .. } => {
            assert_eq!(status, 200);
            assert_eq!(body, "<html>maintenance</html>");
        }
        other => panic!("Expected InvalidPayload, got {other:?}"),
    }
}

#[test]
fn test_request_file_accepts_pdf_and_skips_decoding() {
    let (client, transport) = client_with(MockTransport::respond(200, "%PDF-1.4"));
    let response = assert_ok!(client.request_file(
        HttpMethod::Get,
        "https://panel.sendcloud.sc/api/v2/labels/label_printer/13",
        Payload::new()
    ));
    assert_eq!(response.body, b"%PDF-1.4");

    let sent = transport.last_request();
    assert_eq!(sent.headers.get(ACCEPT).unwrap(), "application/pdf");
    assert_eq!(sent.uri, "https://panel.sendcloud.sc/api/v2/labels/label_printer/13");
}

#[test]
fn test_set_auth_credentials_recomputes_token() {
    let (mut client, transport) = client_with(MockTransport::respond(200, "{}"));
    let updated = Credentials::new("new-key", "new-secret");
    client.set_auth_credentials(&updated);
    assert_ok!(client.request(HttpMethod::Get, "/api/v2/parcels", Payload::new()));

    assert_eq!(
        transport.last_request().headers.get(AUTHORIZATION).unwrap(),
        &format!("Basic {}", updated.token())
    );
}

#[test]
fn test_set_api_host() {
    let (mut client, transport) = client_with(MockTransport::respond(200, "{}"));
    client.set_api_host("http://localhost:9000/");
    assert_ok!(client.request(HttpMethod::Delete, "/api/v2/pickups/1", Payload::new()));
    assert_eq!(transport.last_request().uri, "http://localhost:9000/api/v2/pickups/1");
}

#[test]
fn test_request_hook_sees_descriptor() {
    let (mut client, _) = client_with(MockTransport::respond(200, "{}"));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    client.set_request_hook(move |request| {
        sink.lock()
            .unwrap()
            .push((request.method(), request.uri().to_string(), request.payload().clone()));
    });

    assert_ok!(client.request(
        HttpMethod::Put,
        "/api/v2/parcels",
        payload(json!({"parcel": {"id": 3}}))
    ));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, HttpMethod::Put);
    assert_eq!(seen[0].1, "https://panel.sendcloud.sc/api/v2/parcels");
    assert_eq!(seen[0].2, payload(json!({"parcel": {"id": 3}})));
}

#[test]
fn test_client_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SendcloudClient>();
}
