/*
[INPUT]:  Raw webhook bodies, signature header values, integration secret
[OUTPUT]: Verified webhook events
[POS]:    Webhook layer - HMAC-SHA256 signature verification
[UPDATE]: When the signature scheme or event format changes
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::http::{Result, SendcloudError};
use crate::types::WebhookEvent;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex signature of the webhook body
pub const SIGNATURE_HEADER: &str = "Sendcloud-Signature";

/// Verifies webhook notifications signed with the integration secret
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

impl WebhookVerifier {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Hex-encoded HMAC-SHA256 of `body`
    pub fn sign(&self, body: &[u8]) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check `signature` against the body in constant time
    pub fn verify(&self, body: &[u8], signature: &str) -> Result<()> {
        let expected = hex::decode(signature.trim()).map_err(|_| SendcloudError::InvalidSignature)?;
        let mut mac = self.mac()?;
        mac.update(body);
        mac.verify_slice(&expected).map_err(|_| {
            warn!("webhook signature mismatch");
            SendcloudError::InvalidSignature
        })
    }

    /// Verify and decode a webhook notification
    pub fn parse(&self, body: &[u8], signature: &str) -> Result<WebhookEvent> {
        self.verify(body, signature)?;
        Ok(serde_json::from_slice(body)?)
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| SendcloudError::Config(format!("invalid webhook secret: {e}")))
    }
}
