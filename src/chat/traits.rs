use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can answer a visitor's chat message
/// A live support backend can replace the canned responder through this seam
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Produce the reply to a single message
    async fn reply(&self, message: &str) -> Result<String>;

    /// Get the name of the responder
    fn name(&self) -> &'static str;
}
