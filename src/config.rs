//! Configuration handling for the TUI

use crate::submission::DEFAULT_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides `submission_delay_ms`
pub const SUBMIT_DELAY_ENV: &str = "NATURAL_PM_SUBMIT_DELAY_MS";
/// Overrides `simulate_submission_failure` ("1"/"true" or "0"/"false")
pub const SIMULATE_FAILURE_ENV: &str = "NATURAL_PM_SIMULATE_FAILURE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated submission latency in milliseconds
    pub submission_delay_ms: Option<u64>,
    /// Make every simulated submission fail
    pub simulate_submission_failure: Option<bool>,
    /// Start on the landing page without the banner
    pub skip_splash: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "naturalpm", "natural-pm-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Apply overrides looked up by variable name; unparsable values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(SUBMIT_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.submission_delay_ms = Some(ms),
                Err(_) => tracing::warn!("Ignoring {SUBMIT_DELAY_ENV}={raw:?}"),
            }
        }
        if let Some(raw) = lookup(SIMULATE_FAILURE_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.simulate_submission_failure = Some(true),
                "0" | "false" | "no" => self.simulate_submission_failure = Some(false),
                _ => tracing::warn!("Ignoring {SIMULATE_FAILURE_ENV}={raw:?}"),
            }
        }
    }

    pub fn submission_delay(&self) -> Duration {
        self.submission_delay_ms
            .map_or(DEFAULT_DELAY, Duration::from_millis)
    }

    pub fn simulate_submission_failure(&self) -> bool {
        self.simulate_submission_failure.unwrap_or(false)
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.submission_delay_ms.is_none());
        assert!(config.simulate_submission_failure.is_none());
        assert!(config.skip_splash.is_none());
        assert_eq!(config.submission_delay(), Duration::from_millis(2000));
        assert!(!config.simulate_submission_failure());
        assert!(!config.skip_splash());
    }

    #[test]
    fn test_default_delay_matches_simulated_effect() {
        let config = TuiConfig::default();
        assert_eq!(config.submission_delay(), DEFAULT_DELAY);
        assert_eq!(
            crate::submission::SimulatedSubmission::from_config(&config).delay(),
            DEFAULT_DELAY
        );
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            submission_delay_ms: Some(250),
            simulate_submission_failure: Some(true),
            skip_splash: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submission_delay_ms, Some(250));
        assert_eq!(parsed.simulate_submission_failure, Some(true));
        assert_eq!(parsed.skip_splash, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submission_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown fields are ignored
        let json = r#"{"skip_splash": true, "legacy_theme": "dark"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.skip_splash());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = TuiConfig {
            submission_delay_ms: Some(2000),
            ..Default::default()
        };
        config.apply_overrides(env(&[
            (SUBMIT_DELAY_ENV, "10"),
            (SIMULATE_FAILURE_ENV, "TRUE"),
        ]));
        assert_eq!(config.submission_delay(), Duration::from_millis(10));
        assert!(config.simulate_submission_failure());
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = TuiConfig {
            submission_delay_ms: Some(300),
            simulate_submission_failure: Some(true),
            ..Default::default()
        };
        config.apply_overrides(env(&[
            (SUBMIT_DELAY_ENV, "soon"),
            (SIMULATE_FAILURE_ENV, "maybe"),
        ]));
        assert_eq!(config.submission_delay_ms, Some(300));
        assert_eq!(config.simulate_submission_failure, Some(true));
    }

    #[test]
    fn test_no_env_leaves_config_alone() {
        let mut config = TuiConfig::default();
        config.apply_overrides(|_| None);
        assert!(config.submission_delay_ms.is_none());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = TuiConfig::config_path();
    }
}
