//! Build-time configuration.
//!
//! The browser has no process environment, so the `TODO_*` variables are
//! captured when the bundle is compiled.

use todo_core::config::{ENV_API_BASE_URL, ENV_FEATURE_LEVEL, ENV_LOCALE, ENV_NOTICE_TTL_MS};
use todo_core::ClientConfig;

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_BASE_URL => option_env!("TODO_API_BASE_URL"),
        ENV_FEATURE_LEVEL => option_env!("TODO_FEATURE_LEVEL"),
        ENV_LOCALE => option_env!("TODO_LOCALE"),
        ENV_NOTICE_TTL_MS => option_env!("TODO_NOTICE_TTL_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load the client config, falling back to defaults on bad values.
pub fn load() -> ClientConfig {
    load_from(build_env)
}

fn load_from(lookup: impl Fn(&str) -> Option<String>) -> ClientConfig {
    ClientConfig::from_lookup(lookup).unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid build configuration, using defaults");
        ClientConfig::default()
    })
}
