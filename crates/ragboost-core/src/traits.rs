use crate::error::Result;
use async_trait::async_trait;

/// The external LLM collaborator.
///
/// Implementations own the endpoint, credentials, model choice, and any
/// timeout or retry policy; the store never retries on its behalf.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Answer `question`, grounded in `context` when one is supplied.
    /// Failures surface as `Error::Provider` and are propagated verbatim.
    async fn complete(&self, context: Option<&str>, question: &str) -> Result<String>;
}
