use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub reply_delay_base: Duration,
    pub reply_delay_jitter: Duration,
    /// Seeds the random source so default replies and jitter are reproducible.
    pub advisor_seed: Option<u64>,
    pub max_sessions: usize,
    pub session_idle_ttl: Duration,
    pub session_sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_sessions: usize = parse_env("MAX_SESSIONS", 10_000)?;
        ensure!(max_sessions > 0, "MAX_SESSIONS must be at least 1");
        let sweep_secs: u64 = parse_env("SESSION_SWEEP_INTERVAL_SECS", 60)?;
        ensure!(sweep_secs > 0, "SESSION_SWEEP_INTERVAL_SECS must be at least 1");

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            reply_delay_base: Duration::from_millis(parse_env("REPLY_DELAY_BASE_MS", 1000)?),
            reply_delay_jitter: Duration::from_millis(parse_env("REPLY_DELAY_JITTER_MS", 1000)?),
            advisor_seed: parse_optional_env("ADVISOR_SEED")?,
            max_sessions,
            session_idle_ttl: Duration::from_secs(parse_env("SESSION_IDLE_TTL_SECS", 3600)?),
            session_sweep_interval: Duration::from_secs(sweep_secs),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_optional_env(key)?.unwrap_or(default))
}

fn parse_optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("CAREERGENIE_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_optional_env_reads_value() {
        std::env::set_var("CAREERGENIE_TEST_SEED", "1234");
        let seed: Option<u64> = parse_optional_env("CAREERGENIE_TEST_SEED").unwrap();
        assert_eq!(seed, Some(1234));
    }

    #[test]
    fn test_parse_env_reads_session_cap() {
        std::env::set_var("CAREERGENIE_TEST_MAX_SESSIONS", "250");
        let cap: usize = parse_env("CAREERGENIE_TEST_MAX_SESSIONS", 10_000).unwrap();
        assert_eq!(cap, 250);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("CAREERGENIE_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("CAREERGENIE_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("CAREERGENIE_TEST_BAD_PORT"));
    }
}
