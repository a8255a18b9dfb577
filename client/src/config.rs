//! Client configuration with build-time overrides.
//!
//! A WASM bundle has no process environment at runtime, so overrides are
//! captured with `option_env!` when the crate is compiled. Parsing goes through
//! a lookup function so it can be exercised without touching the real
//! environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "aerocast-auth";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";
pub const DEFAULT_MOCK_LATENCY_MS: u32 = 400;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `localStorage` key holding the persisted session record.
    pub storage_key: String,
    /// Target of the catch-all redirect for unknown paths.
    pub home_path: String,
    /// Where unauthenticated visitors of protected routes are sent.
    pub login_path: String,
    /// Post-login destination when no redirect intent is carried.
    pub landing_path: String,
    /// Simulated round-trip of the mock auth endpoint.
    pub mock_latency_ms: u32,
    /// How long transient notices stay on screen.
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            landing_path: DEFAULT_LANDING_PATH.to_owned(),
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build config from the overrides captured at compile time.
    ///
    /// Optional:
    /// - `AEROCAST_STORAGE_KEY`: default `aerocast-auth`
    /// - `AEROCAST_HOME_PATH`: default `/`
    /// - `AEROCAST_LOGIN_PATH`: default `/login`
    /// - `AEROCAST_LANDING_PATH`: default `/dashboard`
    /// - `AEROCAST_MOCK_LATENCY_MS`: default 400
    /// - `AEROCAST_NOTICE_TIMEOUT_MS`: default 4000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first override that fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                "AEROCAST_STORAGE_KEY" => option_env!("AEROCAST_STORAGE_KEY"),
                "AEROCAST_HOME_PATH" => option_env!("AEROCAST_HOME_PATH"),
                "AEROCAST_LOGIN_PATH" => option_env!("AEROCAST_LOGIN_PATH"),
                "AEROCAST_LANDING_PATH" => option_env!("AEROCAST_LANDING_PATH"),
                "AEROCAST_MOCK_LATENCY_MS" => option_env!("AEROCAST_MOCK_LATENCY_MS"),
                "AEROCAST_NOTICE_TIMEOUT_MS" => option_env!("AEROCAST_NOTICE_TIMEOUT_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first override that fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage_key = match lookup("AEROCAST_STORAGE_KEY") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Empty { var: "AEROCAST_STORAGE_KEY" });
            }
            Some(raw) => raw.trim().to_owned(),
            None => defaults.storage_key,
        };

        Ok(Self {
            storage_key,
            home_path: parse_path(&lookup, "AEROCAST_HOME_PATH", defaults.home_path)?,
            login_path: parse_path(&lookup, "AEROCAST_LOGIN_PATH", defaults.login_path)?,
            landing_path: parse_path(&lookup, "AEROCAST_LANDING_PATH", defaults.landing_path)?,
            mock_latency_ms: parse_millis(&lookup, "AEROCAST_MOCK_LATENCY_MS", defaults.mock_latency_ms)?,
            notice_timeout_ms: parse_millis(&lookup, "AEROCAST_NOTICE_TIMEOUT_MS", defaults.notice_timeout_ms)?,
        })
    }
}

fn parse_path<F>(lookup: &F, var: &'static str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw.trim();
    if !value.starts_with('/') || value.starts_with("//") {
        return Err(ConfigError::InvalidPath { var, value: raw });
    }
    if value.len() > 1 {
        return Ok(value.trim_end_matches('/').to_owned());
    }
    Ok(value.to_owned())
}

fn parse_millis<F>(lookup: &F, var: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        None => Ok(default),
    }
}
