use async_trait::async_trait;
use std::fmt::Debug;

/// Header carrying the admin credential
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Decides whether a presented admin credential grants access.
///
/// The route layer only sees this trait, so a session or JWT scheme can
/// replace the shared-secret check without touching any handler.
#[async_trait]
pub trait AdminVerifier: Send + Sync + Debug {
    /// `presented` is the raw header value, `None` when the header is absent
    async fn verify(&self, presented: Option<&[u8]>) -> bool;

    /// Verifier name for logging
    fn verifier_name(&self) -> &'static str;
}
