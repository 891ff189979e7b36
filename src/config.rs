//! Environment-driven server configuration.
//!
//! The dev server reads its knobs from the environment (optionally via a
//! `.env` file loaded in `main`). Missing or unparseable values fall back
//! to defaults with a warning rather than aborting startup.

use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 8787;
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Listen configuration for the dev API server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
}

impl ServerConfig {
    /// Load from `PORT` and `BIND_ADDR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            bind_addr: env_parse("BIND_ADDR", DEFAULT_BIND_ADDR),
        }
    }
}

/// Parse an environment variable, falling back to `default` when the
/// variable is unset or fails to parse.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(%key, %raw, "invalid value, using default");
            default
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
