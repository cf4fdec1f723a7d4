use std::env;

pub const SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
pub const NOTIFY_ACTOR_SUBSTRING: &str = "NOTIFY_ACTOR_SUBSTRING";
pub const TRACING_DEBUG: &str = "TRACING_DEBUG";

pub const DEFAULT_ACTOR_SUBSTRING: &str = "@xyz.com";

/// Settings read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: Option<String>,
    pub actor_substring: String,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            webhook_url: lookup(SLACK_WEBHOOK_URL).filter(|url| !url.is_empty()),
            actor_substring: lookup(NOTIFY_ACTOR_SUBSTRING)
                .filter(|needle| !needle.is_empty())
                .unwrap_or_else(|| DEFAULT_ACTOR_SUBSTRING.to_string()),
            debug: lookup(TRACING_DEBUG).is_some(),
        }
    }
}
