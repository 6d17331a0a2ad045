use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Runtime configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // a missing .env is fine

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't have to touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = parse_base_url(
            &lookup("RESUME_PARSER_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )?;

        let timeout_secs = match lookup("RESUME_PARSER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("RESUME_PARSER_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("RESUME_PARSER_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Applies a `--server` value from the command line, if one was given.
    pub fn with_server_override(mut self, server: Option<&str>) -> Result<Self> {
        if let Some(server) = server {
            self.base_url = parse_base_url(server)?;
        }
        Ok(self)
    }

    /// Tracing directives for the subscriber. A bare level such as `debug` only
    /// applies to this crate; full directive lists are used as given.
    pub fn log_filter(&self) -> String {
        let level = self.rust_log.trim();
        if level.contains('=') || level.contains(',') {
            level.to_string()
        } else {
            format!("{}={}", env!("CARGO_PKG_NAME"), level)
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("'{trimmed}' is not a valid server URL"))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("server URL must use http or https, got '{other}'"),
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
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn reads_values_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_PARSER_URL", "https://parser.example.com/"),
            ("RESUME_PARSER_TIMEOUT_SECS", " 30 "),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://parser.example.com/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn bare_level_is_scoped_to_this_crate() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config.log_filter(), "resume_uploader=debug");

        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_filter(), "resume_uploader=info");
    }

    #[test]
    fn directive_lists_pass_through() {
        let config = Config::from_lookup(lookup_from(&[(
            "RUST_LOG",
            "resume_uploader=trace,reqwest=debug",
        )]))
        .unwrap();
        assert_eq!(config.log_filter(), "resume_uploader=trace,reqwest=debug");
    }

    #[test]
    fn rejects_bad_timeouts() {
        assert!(Config::from_lookup(lookup_from(&[("RESUME_PARSER_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("RESUME_PARSER_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(Config::from_lookup(lookup_from(&[("RESUME_PARSER_URL", "ftp://host")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("RESUME_PARSER_URL", "not a url")])).is_err());
    }

    #[test]
    fn server_override_replaces_base_url() {
        let config = Config::from_lookup(lookup_from(&[]))
            .unwrap()
            .with_server_override(Some("http://10.0.0.5:9000/"))
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://10.0.0.5:9000/");

        let untouched = Config::from_lookup(lookup_from(&[]))
            .unwrap()
            .with_server_override(None)
            .unwrap();
        assert_eq!(untouched.base_url.as_str(), "http://127.0.0.1:8000/");
    }
}
