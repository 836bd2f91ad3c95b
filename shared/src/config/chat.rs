//! Conversation memory configuration

use serde::{Deserialize, Serialize};

/// Settings for the in-memory chat session cache
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatMemorySettings {
    /// Seconds of inactivity before a session is evicted
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,

    /// How often the eviction sweep runs, in seconds
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for ChatMemorySettings {
    fn default() -> Self {
        Self {
            session_ttl_seconds: default_session_ttl(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

impl ChatMemorySettings {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let session_ttl_seconds = std::env::var("CHAT_SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_session_ttl);
        let sweep_interval_seconds = std::env::var("CHAT_SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sweep_interval);

        Self {
            session_ttl_seconds,
            sweep_interval_seconds,
        }
    }
}

fn default_session_ttl() -> u64 {
    300
}

fn default_sweep_interval() -> u64 {
    60
}
