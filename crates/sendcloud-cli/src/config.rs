/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed credentials and client settings
[POS]:    Configuration layer - CLI startup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use sendcloud_client::{ClientConfig, Credentials};

/// Top-level configuration for the command line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Integration public key
    pub username: String,
    /// Integration secret key
    pub password: String,
    /// Webhook signing secret, defaults to the secret key
    #[serde(default)]
    pub webhook_secret: Option<String>,
    /// Host, timeouts and extra headers
    #[serde(flatten)]
    pub client: ClientConfig,
}

impl CliConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }

    pub fn webhook_secret(&self) -> &str {
        self.webhook_secret.as_deref().unwrap_or(&self.password)
    }
}
