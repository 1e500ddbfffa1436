use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::catalog::selector::{
    SelectorSettings, DEFAULT_COMPANY_POOL_SIZE, DEFAULT_FOCUS_SPLICE_PROBABILITY,
};

const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog replacing the built-in tables.
    pub catalog_path: Option<PathBuf>,
    pub focus_splice_probability: f64,
    pub company_pool_size: usize,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            port: parse_or("PORT", 8080, &lookup)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            focus_splice_probability: parse_or(
                "FOCUS_SPLICE_PROBABILITY",
                DEFAULT_FOCUS_SPLICE_PROBABILITY,
                &lookup,
            )?,
            company_pool_size: parse_or("COMPANY_POOL_SIZE", DEFAULT_COMPANY_POOL_SIZE, &lookup)?,
            session_ttl_minutes: parse_or(
                "SESSION_TTL_MINUTES",
                DEFAULT_SESSION_TTL_MINUTES,
                &lookup,
            )?,
        };

        if !(0.0..=1.0).contains(&config.focus_splice_probability) {
            bail!(
                "FOCUS_SPLICE_PROBABILITY must be between 0 and 1, got {}",
                config.focus_splice_probability
            );
        }
        if config.company_pool_size == 0 {
            bail!("COMPANY_POOL_SIZE must be at least 1");
        }
        if config.session_ttl_minutes < 1 {
            bail!("SESSION_TTL_MINUTES must be at least 1");
        }

        Ok(config)
    }

    pub fn selector_settings(&self) -> SelectorSettings {
        SelectorSettings {
            company_pool_size: self.company_pool_size,
            focus_splice_probability: self.focus_splice_probability,
        }
    }
}

fn parse_or<T, F>(key: &str, default: T, lookup: &F) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}
