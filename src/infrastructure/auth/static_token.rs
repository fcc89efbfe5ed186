//! Shared-secret admin verifier

use async_trait::async_trait;

use crate::config::AdminConfig;
use crate::domain::AdminVerifier;

/// Compares the presented header byte-for-byte with one configured secret.
///
/// With no secret configured nothing is ever accepted.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    token: Option<String>,
}

impl StaticTokenVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_config(&AdminConfig {
            token: Some(token.into()),
        })
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        let token = config.token.clone().filter(|t| !t.is_empty());
        Self { token }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }
}

impl std::fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenVerifier")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[async_trait]
impl AdminVerifier for StaticTokenVerifier {
    async fn verify(&self, presented: Option<&[u8]>) -> bool {
        match (presented, self.token.as_deref()) {
            (Some(presented), Some(secret)) => presented == secret.as_bytes(),
            _ => false,
        }
    }

    fn verifier_name(&self) -> &'static str {
        "static_token"
    }
}
