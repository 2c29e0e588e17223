//! Secret retrieval (summarization API key).

use anyhow::{Context, Result};
use aws_sdk_ssm::Client;

#[async_trait::async_trait]
pub trait SecretStore: Send + Sync {
    /// Decrypted value of the named secret
    async fn get_secret(&self, name: &str) -> Result<String>;
}

/// SSM Parameter Store, read with decryption
pub struct SsmSecretStore {
    client: Client,
}

impl SsmSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .with_context(|| format!("Failed to get parameter {}", name))?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_owned)
            .with_context(|| format!("Parameter {} has no value", name))
    }
}
