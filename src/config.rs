// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::application::queries::categories::MAX_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    session_cookie_name: String,
    category_page_size: u32,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_token_ttl() -> u64 {
    3600
}

fn default_session_cookie_name() -> String {
    "access_token".into()
}

const fn default_category_page_size() -> u32 {
    10
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables. Optional values fall
    /// back to defaults; present-but-malformed values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = non_empty_var("DATABASE_URL");
        let listen_addr = non_empty_var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let biscuit_private_key = non_empty_var("BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;

        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = match non_empty_var("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid(format!("TOKEN_TTL_SECONDS '{raw}' is not a number")))?,
            None => default_token_ttl(),
        };

        let session_cookie_name =
            non_empty_var("SESSION_COOKIE_NAME").unwrap_or_else(default_session_cookie_name);

        let category_page_size = match non_empty_var("CATEGORY_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "CATEGORY_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}, got '{raw}'"
                    ))
                })?,
            None => default_category_page_size(),
        };

        let allowed_origins = non_empty_var("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            session_cookie_name,
            category_page_size,
            allowed_origins,
        })
    }

    /// `None` selects the in-memory category store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }

    pub const fn category_page_size(&self) -> u32 {
        self.category_page_size
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
