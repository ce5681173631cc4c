use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 2000;
pub const DEFAULT_HISTORY_WINDOW: usize = 10;
pub const DEFAULT_CONSULTATION_MIN_MESSAGES: usize = 6;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_input_chars: usize,
    pub history_window: usize,
    pub consultation_min_messages: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            history_window: DEFAULT_HISTORY_WINDOW,
            consultation_min_messages: DEFAULT_CONSULTATION_MIN_MESSAGES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            host: env::var("TRIAGE_HOST")
                .unwrap_or_else(|_| {
                    warn!("TRIAGE_HOST not set, using default");
                    DEFAULT_HOST.to_string()
                }),
            port: parse_var("TRIAGE_PORT", DEFAULT_PORT),
            max_input_chars: parse_var("TRIAGE_MAX_INPUT_CHARS", DEFAULT_MAX_INPUT_CHARS),
            history_window: parse_var("TRIAGE_HISTORY_WINDOW", DEFAULT_HISTORY_WINDOW),
            consultation_min_messages: parse_var(
                "TRIAGE_CONSULTATION_MIN_MESSAGES",
                DEFAULT_CONSULTATION_MIN_MESSAGES,
            ),
        };

        if !config.is_configured() {
            warn!("Triage engine limits are zero, the API will refuse to start");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        self.max_input_chars > 0 && self.history_window > 0
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}
