use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::chat::traits::ChatResponder;
use crate::config::ChatConfig;

pub const DEFAULT_REPLY: &str = "Liên hệ 1900 9999 để được hỗ trợ.";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Answers every message with the same hotline notice after a short pause
pub struct CannedResponder {
    reply: String,
    delay: Duration,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self::with_reply(DEFAULT_REPLY, DEFAULT_DELAY)
    }

    pub fn with_reply(reply: impl Into<String>, delay: Duration) -> Self {
        Self {
            reply: reply.into(),
            delay,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::with_reply(config.reply.clone(), Duration::from_millis(config.delay_ms))
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatResponder for CannedResponder {
    async fn reply(&self, message: &str) -> Result<String> {
        debug!("Canned reply to {} chars after {:?}", message.len(), self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}
