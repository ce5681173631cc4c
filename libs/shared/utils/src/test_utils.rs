use std::sync::Arc;
use chrono::{Duration, TimeZone, Utc};

use shared_config::AppConfig;
use shared_models::conversation::{Message, Role};

pub struct TestConfig {
    pub max_input_chars: usize,
    pub history_window: usize,
    pub consultation_min_messages: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
            history_window: 10,
            consultation_min_messages: 6,
        }
    }
}

impl TestConfig {
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_input_chars: self.max_input_chars,
            history_window: self.history_window,
            consultation_min_messages: self.consultation_min_messages,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Conversation fixture; timestamps start at 2024-01-01 09:00 UTC and advance
/// one minute per message.
pub struct ConversationBuilder {
    messages: Vec<Message>,
}

impl Default for ConversationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationBuilder {
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    pub fn user(self, content: &str) -> Self {
        self.push(Role::User, content)
    }

    pub fn assistant(self, content: &str) -> Self {
        self.push(Role::Assistant, content)
    }

    pub fn system(self, content: &str) -> Self {
        self.push(Role::System, content)
    }

    fn push(mut self, role: Role, content: &str) -> Self {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single().unwrap_or_default();
        let offset = Duration::minutes(self.messages.len() as i64);
        self.messages.push(Message::new(role, content).with_timestamp(start + offset));
        self
    }

    pub fn build(self) -> Vec<Message> {
        self.messages
    }
}
