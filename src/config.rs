use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "rabrie10";
pub const DEFAULT_OUTPUT_DIR: &str = "assets/readme-stats";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub username: String,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
    pub use_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so tests do not
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN").filter(|v| !v.trim().is_empty());
        if github_token.is_none() {
            tracing::warn!("GITHUB_TOKEN not set, API calls may be rate-limited");
        }

        let username = lookup("USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(Error::Config("USERNAME is set but empty".to_string()));
        }

        let output_dir = lookup("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let use_sample_data = lookup("USE_SAMPLE_DATA")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Self {
            github_token,
            username: username.trim().to_string(),
            output_dir,
            request_timeout: Duration::from_secs(timeout_secs),
            use_sample_data,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub output_dir: PathBuf,
    pub use_sample_data: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            use_sample_data: config.use_sample_data,
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
    fn test_defaults_when_environment_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.github_token, None);
        assert_eq!(config.username, DEFAULT_USERNAME);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.use_sample_data);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_abc"),
            ("USERNAME", "octocat"),
            ("OUTPUT_DIR", "out"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("USE_SAMPLE_DATA", "false"),
        ]))
        .unwrap();
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.username, "octocat");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(!config.use_sample_data);
    }

    #[test]
    fn test_blank_token_is_treated_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  ")])).unwrap();
        assert_eq!(config.github_token, None);
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let config =
            Config::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "soon")])).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("USERNAME", " ")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
