use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::traits::ChatResponder;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Transcript of one chat window
pub struct ChatSession<R: ChatResponder> {
    responder: R,
    messages: Vec<ChatMessage>,
}

impl<R: ChatResponder> ChatSession<R> {
    pub fn new(responder: R) -> Self {
        Self {
            responder,
            messages: Vec::new(),
        }
    }

    /// Send a message and wait for the reply
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    pub async fn send(&mut self, input: &str) -> Result<Option<&ChatMessage>> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.push(Sender::User, text.to_string());
        info!("Chat message sent to {} responder", self.responder.name());

        let reply = self.responder.reply(text).await?;
        self.push(Sender::Bot, reply);

        Ok(self.messages.last())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage {
            sender,
            text,
            sent_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::canned::{CannedResponder, DEFAULT_REPLY};
    use async_trait::async_trait;
    use std::time::Duration;

    struct Echo;

    #[async_trait]
    impl ChatResponder for Echo {
        async fn reply(&self, message: &str) -> Result<String> {
            Ok(format!("echo: {}", message))
        }

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = ChatSession::new(Echo);
        assert!(session.send("   ").await.unwrap().is_none());
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn records_both_sides() {
        let mut session = ChatSession::new(Echo);
        let reply = session.send("  giá bao nhiêu?  ").await.unwrap().cloned();
        assert_eq!(reply.map(|m| m.text), Some("echo: giá bao nhiêu?".to_string()));

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
        assert_eq!(session.messages()[0].text, "giá bao nhiêu?");
    }

    #[tokio::test(start_paused = true)]
    async fn canned_session() {
        let mut session =
            ChatSession::new(CannedResponder::with_reply(DEFAULT_REPLY, Duration::from_secs(1)));
        session.send("xin chào").await.unwrap();
        session.send("còn phòng?").await.unwrap();
        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.messages()[3].text, DEFAULT_REPLY);
    }
}
