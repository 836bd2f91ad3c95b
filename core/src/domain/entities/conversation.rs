//! Conversation session entities for the chatbot memory cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message within a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// An in-memory conversation session
///
/// Sessions live only for the lifetime of the process and are evicted
/// once idle past the configured TTL. The message list is append-only.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    /// Ordered message history, oldest first
    pub messages: Vec<ChatMessage>,

    /// Timestamp of the most recent append
    pub last_active_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Creates an empty session marked active now
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            last_active_at: Utc::now(),
        }
    }

    /// Appends a message and refreshes the activity timestamp
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
        self.last_active_at = Utc::now();
    }

    /// Whether this session has been idle longer than `ttl_seconds` as of `now`
    pub fn is_idle(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        now.signed_duration_since(self.last_active_at)
            > chrono::Duration::seconds(ttl_seconds as i64)
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_push_appends_in_order() {
        let mut session = ConversationSession::new();
        session.push(ChatRole::User, "hello");
        session.push(ChatRole::Assistant, "hi there");

        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, ChatRole::User);
        assert_eq!(session.messages[0].content, "hello");
        assert_eq!(session.messages[1].role, ChatRole::Assistant);
    }

    #[test]
    fn test_push_refreshes_activity() {
        let mut session = ConversationSession::new();
        let before = session.last_active_at;
        session.push(ChatRole::User, "hello");
        assert!(session.last_active_at >= before);
    }

    #[test]
    fn test_is_idle() {
        let session = ConversationSession::new();
        let now = session.last_active_at;

        assert!(!session.is_idle(now + Duration::seconds(299), 300));
        assert!(session.is_idle(now + Duration::seconds(301), 300));
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
