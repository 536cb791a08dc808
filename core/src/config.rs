//! Client configuration and feature levels.
//!
//! Values come from a key lookup so the same loader serves native hosts
//! (`std::env::var`) and the browser build (compile-time `option_env!`).

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::locale::Locale;
use crate::notice::NOTICE_TTL_MS;

pub const DEFAULT_API_BASE_URL: &str = "https://todoapitest.juansegaliz.com";

pub const ENV_API_BASE_URL: &str = "TODO_API_BASE_URL";
pub const ENV_FEATURE_LEVEL: &str = "TODO_FEATURE_LEVEL";
pub const ENV_LOCALE: &str = "TODO_LOCALE";
pub const ENV_NOTICE_TTL_MS: &str = "TODO_NOTICE_TTL_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How much of the client is switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureLevel {
    /// List, create, delete. No validation.
    Basic,
    /// Adds per-row completion toggle.
    Standard,
    /// Adds the edit modal and form validation.
    #[default]
    Full,
}

impl FeatureLevel {
    pub fn features(self) -> Features {
        match self {
            FeatureLevel::Basic => Features {
                validate: false,
                toggle: false,
                edit: false,
                delete: true,
            },
            FeatureLevel::Standard => Features {
                validate: false,
                toggle: true,
                edit: false,
                delete: true,
            },
            FeatureLevel::Full => Features {
                validate: true,
                toggle: true,
                edit: true,
                delete: true,
            },
        }
    }
}

impl FromStr for FeatureLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(FeatureLevel::Basic),
            "standard" => Ok(FeatureLevel::Standard),
            "full" => Ok(FeatureLevel::Full),
            other => Err(format!("unknown feature level `{other}`")),
        }
    }
}

/// Individual switches derived from a [`FeatureLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub validate: bool,
    pub toggle: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Default for Features {
    fn default() -> Self {
        FeatureLevel::default().features()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub feature_level: FeatureLevel,
    pub locale: Locale,
    pub notice_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            feature_level: FeatureLevel::default(),
            locale: Locale::default(),
            notice_ttl_ms: NOTICE_TTL_MS,
        }
    }
}

impl ClientConfig {
    /// Build a config from `lookup`, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            api_base_url: lookup(ENV_API_BASE_URL)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            feature_level: parse_or(&lookup, ENV_FEATURE_LEVEL, defaults.feature_level)?,
            locale: parse_or(&lookup, ENV_LOCALE, defaults.locale)?,
            notice_ttl_ms: parse_or(&lookup, ENV_NOTICE_TTL_MS, defaults.notice_ttl_ms)?,
        };
        info!(
            api = %config.api_base_url,
            level = ?config.feature_level,
            locale = %config.locale,
            "client configured"
        );
        Ok(config)
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn features(&self) -> Features {
        self.feature_level.features()
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
