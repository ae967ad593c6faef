/*
[INPUT]:  Parsed subcommand arguments and a configured client
[OUTPUT]: Printed responses, downloaded files, verified webhook events
[POS]:    Command layer - glue between clap and the client crate
[UPDATE]: When adding subcommands or changing their output
*/

use std::path::Path;

use anyhow::{Context, Result, bail};
use sendcloud_client::{HttpMethod, Payload, SendcloudClient, SendcloudResponse, WebhookVerifier};
use serde_json::Value;
use tracing::info;

/// Send one request and print the decoded envelope
pub fn request(
    client: &SendcloudClient,
    method: &str,
    endpoint: &str,
    params: &[String],
    body: Option<&str>,
) -> Result<()> {
    let method: HttpMethod = method.parse().context("parse method")?;
    let payload = build_payload(params, body)?;
    let response = client
        .request(method, endpoint, payload)
        .with_context(|| format!("{method} {endpoint}"))?;
    println!("{}", render(&response)?);
    Ok(())
}

/// Fetch a document by absolute URL and write it to `output`
pub fn download(client: &SendcloudClient, url: &str, output: &Path) -> Result<()> {
    let response = client
        .downloads()
        .get(url, Payload::new())
        .with_context(|| format!("download {url}"))?;
    std::fs::write(output, &response.body)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        bytes = response.body.len(),
        output = %output.display(),
        "document saved"
    );
    Ok(())
}

/// Check a webhook body against its signature and print the event
pub fn verify_webhook(secret: &str, signature: &str, body_file: &Path) -> Result<()> {
    let body = std::fs::read(body_file)
        .with_context(|| format!("read {}", body_file.display()))?;
    let event = WebhookVerifier::new(secret)
        .parse(&body, signature)
        .context("verify webhook")?;
    info!(action = %event.action, "webhook signature valid");
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

/// Merge `key=value` params over an optional JSON object body
///
/// Values that parse as JSON keep their type; anything else is a string.
pub fn build_payload(params: &[String], body: Option<&str>) -> Result<Payload> {
    let mut payload = match body {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("parse --body")? {
            Value::Object(map) => map,
            other => bail!("--body must be a JSON object, got {other}"),
        },
        None => Payload::new(),
    };

    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            bail!("--param must be key=value, got {param:?}");
        };
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
        payload.insert(key.to_string(), value);
    }
    Ok(payload)
}

fn render(response: &SendcloudResponse) -> Result<String> {
    let body = match (response.payload(), response.error()) {
        (_, Some(error)) => serde_json::json!({ "error": error }),
        (Some(payload), None) => payload.clone(),
        (None, None) => Value::Null,
    };
    Ok(format!(
        "HTTP/{} {} {}\n{}",
        response.protocol_version(),
        response.status_code(),
        response.reason_phrase(),
        serde_json::to_string_pretty(&body)?
    ))
}
