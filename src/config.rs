//! Site configuration resolved once at startup.
//!
//! A static site has no runtime environment, so overrides are read from the
//! build environment through `option_env!` (e.g. `PORTFOLIO_LOG_LEVEL=debug
//! trunk serve`). Invalid values fall back to defaults with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;

use crate::state::router::PageId;

pub const DEFAULT_GLASS_BALL_COUNT: usize = 8;
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 400;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_OWNER_NAME: &str = "Portfolio";

pub const CONTACT_ACKNOWLEDGEMENT: &str = "Thank you! Your message has been sent.";
pub const RESUME_ACKNOWLEDGEMENT: &str = "Resume download will be added soon.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("invalid reveal delay (expected milliseconds): {0}")]
    InvalidRevealDelay(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub default_page: PageId,
    pub glass_ball_count: usize,
    pub reveal_delay_ms: u32,
    pub reveal_threshold: f64,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER_NAME.to_owned(),
            default_page: PageId::Home,
            glass_ball_count: DEFAULT_GLASS_BALL_COUNT,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PORTFOLIO_LOG_LEVEL`: `trace|debug|info|warn|error|off` (default `info`)
    /// - `PORTFOLIO_REVEAL_DELAY_MS`: scroll-reveal startup delay (default 400)
    /// - `PORTFOLIO_OWNER_NAME`: name shown in the hero and page title
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_LOG_LEVEL"),
            option_env!("PORTFOLIO_REVEAL_DELAY_MS"),
            option_env!("PORTFOLIO_OWNER_NAME"),
        )
    }

    /// Build config from raw optional values, falling back per field.
    pub fn from_values(log_level: Option<&str>, reveal_delay_ms: Option<&str>, owner_name: Option<&str>) -> Self {
        let defaults = Self::default();

        let log_level = parse_log_level(log_level).unwrap_or_else(|e| {
            log::warn!("{e}; using {}", defaults.log_level);
            defaults.log_level
        });
        let reveal_delay_ms = parse_reveal_delay(reveal_delay_ms).unwrap_or_else(|e| {
            log::warn!("{e}; using {}", defaults.reveal_delay_ms);
            defaults.reveal_delay_ms
        });
        let owner_name = owner_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or(defaults.owner_name.clone(), str::to_owned);

        Self { owner_name, log_level, reveal_delay_ms, ..defaults }
    }
}

pub(crate) fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(LevelFilter::Info);
    };
    match raw.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidLogLevel(raw.to_owned())),
    }
}

pub(crate) fn parse_reveal_delay(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_REVEAL_DELAY_MS);
    };
    raw.parse::<u32>()
        .map_err(|_| ConfigError::InvalidRevealDelay(raw.to_owned()))
}
