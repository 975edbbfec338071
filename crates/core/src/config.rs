use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub token: String,
    pub api_base: String,
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl GenerationConfig {
    /// `Ok(None)` when no credential is set; the bot then runs without a
    /// generation backend.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(api_key) = non_empty(&lookup, "GEMINI_API_KEY") else {
            return Ok(None);
        };

        Ok(Some(Self {
            api_key,
            model: non_empty(&lookup, "GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            api_base: non_empty(&lookup, "GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            timeout: Duration::from_secs(parse_or(&lookup, "GEMINI_TIMEOUT_SECONDS", 30)?),
        }))
    }

    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Process configuration, built once at startup and handed to the components
/// that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub transport: TransportConfig,
    pub generation: Option<GenerationConfig>,
    pub keep_alive_addr: SocketAddr,
}

impl BotConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = non_empty(&lookup, "TELEGRAM_BOT_TOKEN")
            .ok_or(ConfigError::MissingVar("TELEGRAM_BOT_TOKEN"))?;
        let transport = TransportConfig {
            token,
            api_base: non_empty(&lookup, "TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            poll_timeout: Duration::from_secs(parse_or(
                &lookup,
                "TELEGRAM_POLL_TIMEOUT_SECONDS",
                30,
            )?),
        };

        let port: u16 = parse_or(&lookup, "PORT", 8080)?;

        Ok(Self {
            transport,
            generation: GenerationConfig::from_lookup(&lookup)?,
            keep_alive_addr: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn generation_enabled(&self) -> bool {
        self.generation.is_some()
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_empty(lookup, key) {
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidVar {
            name: key,
            value,
        }),
        None => Ok(default),
    }
}
