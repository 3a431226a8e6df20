use std::net::SocketAddr;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const ANILIST_BASE_URL: &str = "https://graphql.anilist.co";
pub const JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const TRAKT_BASE_URL: &str = "https://api.trakt.tv";

const DEFAULT_USER_AGENT: &str = "watchtower/0.1 (+https://animac-metaverse.vercel.app)";

/// Base URLs of the four content providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    pub anilist: String,
    pub jikan: String,
    pub tmdb: String,
    pub trakt: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            anilist: ANILIST_BASE_URL.to_string(),
            jikan: JIKAN_BASE_URL.to_string(),
            tmdb: TMDB_BASE_URL.to_string(),
            trakt: TRAKT_BASE_URL.to_string(),
        }
    }
}

/// Runtime configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub tmdb_api_key: Option<String>,
    pub trakt_api_key: Option<String>,
    pub endpoints: UpstreamEndpoints,
    pub max_retries: u32,
    pub retry_base_delay: Duration,
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 5000,
            tmdb_api_key: None,
            trakt_api_key: None,
            endpoints: UpstreamEndpoints::default(),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
            http_timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => parse_number::<u16>("PORT", &raw)?,
            None => defaults.port,
        };
        let max_retries = match get("WATCHTOWER_MAX_RETRIES") {
            Some(raw) => parse_number::<u32>("WATCHTOWER_MAX_RETRIES", &raw)?,
            None => defaults.max_retries,
        };
        let retry_base_delay = match get("WATCHTOWER_RETRY_BASE_MS") {
            Some(raw) => Duration::from_millis(parse_number("WATCHTOWER_RETRY_BASE_MS", &raw)?),
            None => defaults.retry_base_delay,
        };
        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("HTTP_TIMEOUT_SECS", &raw)?),
            None => defaults.http_timeout,
        };

        let endpoints = UpstreamEndpoints {
            anilist: get("ANILIST_BASE_URL").unwrap_or(defaults.endpoints.anilist),
            jikan: get("JIKAN_BASE_URL").unwrap_or(defaults.endpoints.jikan),
            tmdb: get("TMDB_BASE_URL").unwrap_or(defaults.endpoints.tmdb),
            trakt: get("TRAKT_BASE_URL").unwrap_or(defaults.endpoints.trakt),
        };

        let config = Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port,
            tmdb_api_key: get("TMDB_API_KEY").or_else(|| get("REACT_APP_TMDB_KEY")),
            trakt_api_key: get("TRAKT_API_KEY").or_else(|| get("REACT_APP_TRAKT_KEY")),
            endpoints,
            max_retries,
            retry_base_delay,
            http_timeout,
            user_agent: get("WATCHTOWER_USER_AGENT").unwrap_or(defaults.user_agent),
        };

        if config.tmdb_api_key.is_none() {
            log::warn!("[WatchTower] Missing TMDB_API_KEY, TMDB requests will be rejected upstream");
        }
        if config.trakt_api_key.is_none() {
            log::warn!("[WatchTower] Missing TRAKT_API_KEY, Trakt requests will be rejected upstream");
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|e| AppError::ConfigError(format!("Invalid bind address: {}", e)))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| AppError::ConfigError(format!("{} must be a number ({}): {}", key, raw, e)))
}
