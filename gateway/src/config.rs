//! Configuration module for environment variable parsing.

use std::env;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Shared secret used to verify EventSub webhook signatures
    pub webhook_secret: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TWITCH_WEBHOOK_SECRET` is required: a missing or empty secret is a
    /// startup error, never a per-request one.
    pub fn from_env() -> Result<Self> {
        let webhook_secret =
            env::var("TWITCH_WEBHOOK_SECRET").context("TWITCH_WEBHOOK_SECRET must be set")?;
        if webhook_secret.trim().is_empty() {
            bail!("TWITCH_WEBHOOK_SECRET must not be empty");
        }

        Ok(Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            webhook_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the shared environment variables are touched from one
    // thread only.
    #[test]
    fn test_from_env_secret_handling() {
        env::remove_var("TWITCH_WEBHOOK_SECRET");
        assert!(Config::from_env().is_err());

        env::set_var("TWITCH_WEBHOOK_SECRET", "   ");
        assert!(Config::from_env().is_err());

        env::set_var("TWITCH_WEBHOOK_SECRET", "secret123");
        env::set_var("PORT", "9090");
        let config = Config::from_env().unwrap();
        assert_eq!(config.webhook_secret, "secret123");
        assert_eq!(config.port, 9090);

        env::set_var("PORT", "not-a-port");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);

        env::remove_var("TWITCH_WEBHOOK_SECRET");
        env::remove_var("PORT");
    }
}
