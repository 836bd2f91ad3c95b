//! Conversation memory cache implementation

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use vy_shared::config::ChatMemorySettings;

use crate::domain::entities::conversation::{ChatMessage, ChatRole, ConversationSession};

/// Configuration for the conversation cache
#[derive(Debug, Clone)]
pub struct ChatMemoryConfig {
    /// Seconds of inactivity before a session is evicted
    pub session_ttl_seconds: u64,
    /// How often the eviction sweep runs (in seconds)
    pub sweep_interval_seconds: u64,
}

impl Default for ChatMemoryConfig {
    fn default() -> Self {
        Self {
            session_ttl_seconds: 300,
            sweep_interval_seconds: 60,
        }
    }
}

impl From<ChatMemorySettings> for ChatMemoryConfig {
    fn from(settings: ChatMemorySettings) -> Self {
        Self {
            session_ttl_seconds: settings.session_ttl_seconds,
            sweep_interval_seconds: settings.sweep_interval_seconds,
        }
    }
}

/// Process-wide conversation cache
///
/// Constructed once at startup and injected into callers; there is no
/// ambient global instance. All access paths (reads, appends, the
/// eviction sweep) serialize on one `RwLock`, so a reader never observes
/// a torn append and an eviction never interleaves with one.
pub struct ChatMemory {
    sessions: Arc<RwLock<HashMap<String, ConversationSession>>>,
    config: ChatMemoryConfig,
}

impl ChatMemory {
    /// Create a new empty cache
    pub fn new(config: ChatMemoryConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Get the message history for a conversation, oldest first
    ///
    /// Returns an empty list for unknown keys.
    pub async fn history(&self, conversation_id: &str) -> Vec<ChatMessage> {
        let sessions = self.sessions.read().await;
        sessions
            .get(conversation_id)
            .map(|s| s.messages.clone())
            .unwrap_or_default()
    }

    /// Append a message, creating the session on first use
    ///
    /// Refreshes the session's activity timestamp.
    pub async fn append(&self, conversation_id: &str, role: ChatRole, content: impl Into<String>) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(conversation_id.to_string())
            .or_default()
            .push(role, content);
    }

    /// Drop a conversation explicitly
    pub async fn clear(&self, conversation_id: &str) {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(conversation_id).is_some() {
            debug!(conversation_id, "Cleared conversation session");
        }
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    /// Evict sessions idle longer than the configured TTL as of `now`
    ///
    /// Returns the number of evicted sessions. Split out from the sweep
    /// loop so eviction stays deterministic under test.
    pub(crate) async fn evict_idle_at(&self, now: DateTime<Utc>) -> usize {
        let ttl = self.config.session_ttl_seconds;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {} idle chat session(s)", evicted);
        }
        evicted
    }

    /// Start the periodic eviction sweep as a background task
    pub fn start_background_task(self: Arc<Self>) {
        let interval = std::time::Duration::from_secs(self.config.sweep_interval_seconds);

        tokio::spawn(async move {
            info!(
                "Chat memory sweep started - will run every {} seconds",
                self.config.sweep_interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;
                self.evict_idle_at(Utc::now()).await;
            }
        });
    }
}
