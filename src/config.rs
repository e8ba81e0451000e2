use anyhow::{Context, Result};
use std::time::Duration;

use crate::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL, TIMEOUT_SECS_ENV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
    // None keeps requests open until the backend answers
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.backend_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_SECS_ENV).filter(|raw| !raw.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_SECS_ENV, raw))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
