//! Runtime configuration, read from the environment (and `.env`).

use thiserror::Error;

use crate::infrastructure::http_client::DEFAULT_API_BASE_URL;
use crate::state::PointBuyRules;

/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default save slot name
pub const DEFAULT_SAVE_SLOT: &str = "autosave";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid roll range: minimum {min} exceeds maximum {max}")]
    InvalidRollRange { min: i32, max: i32 },

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub rules: PointBuyRules,
    pub save_slot: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            rules: PointBuyRules::default(),
            save_slot: DEFAULT_SAVE_SLOT.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unparseable numbers, and a zero request timeout, fall back to their
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = lookup("DELVE_API_URL")
            .or_else(|| lookup("API_BASE_URL"))
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        url::Url::parse(&api_base_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_base_url.clone(),
            reason: e.to_string(),
        })?;

        let request_timeout_ms = parse_where(
            &lookup,
            "DELVE_REQUEST_TIMEOUT_MS",
            defaults.request_timeout_ms,
            |ms| *ms > 0,
        );
        let roll_min = parse_or(&lookup, "DELVE_ROLL_MIN", defaults.rules.roll_min);
        let roll_max = parse_or(&lookup, "DELVE_ROLL_MAX", defaults.rules.roll_max);
        let bonus_points = parse_or(&lookup, "DELVE_BONUS_POINTS", defaults.rules.bonus_points);
        let rules = PointBuyRules::new(roll_min, roll_max, bonus_points)?;

        let save_slot = lookup("DELVE_SAVE_SLOT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.save_slot);

        Ok(Self {
            api_base_url,
            request_timeout_ms,
            rules,
            save_slot,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    parse_where(lookup, key, default, |_| true)
}

fn parse_where<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    accept: impl Fn(&T) -> bool,
) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => value,
        _ => {
            tracing::warn!(key, value = %raw, fallback = %default, "ignoring unparseable setting");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = PlayerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.rules.roll_min, 5);
        assert_eq!(config.rules.roll_max, 19);
        assert_eq!(config.rules.bonus_points, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = PlayerConfig::from_lookup(lookup_from(&[
            ("DELVE_API_URL", "http://game.example:8080/"),
            ("DELVE_REQUEST_TIMEOUT_MS", "1500"),
            ("DELVE_ROLL_MIN", "3"),
            ("DELVE_ROLL_MAX", "18"),
            ("DELVE_BONUS_POINTS", "7"),
            ("DELVE_SAVE_SLOT", "slot-2"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://game.example:8080");
        assert_eq!(config.request_timeout_ms, 1500);
        assert_eq!(config.rules, PointBuyRules::new(3, 18, 7).unwrap());
        assert_eq!(config.save_slot, "slot-2");
    }

    #[test]
    fn legacy_url_variable_is_a_fallback() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[("API_BASE_URL", "http://legacy:5000")]))
                .unwrap();
        assert_eq!(config.api_base_url, "http://legacy:5000");
    }

    #[test]
    fn garbage_numbers_fall_back_to_defaults() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[("DELVE_BONUS_POINTS", "lots")])).unwrap();
        assert_eq!(config.rules.bonus_points, 5);
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[("DELVE_REQUEST_TIMEOUT_MS", "0")])).unwrap();
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn inverted_roll_range_is_rejected() {
        let err = PlayerConfig::from_lookup(lookup_from(&[
            ("DELVE_ROLL_MIN", "15"),
            ("DELVE_ROLL_MAX", "10"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidRollRange { min: 15, max: 10 });
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = PlayerConfig::from_lookup(lookup_from(&[("DELVE_API_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }
}
