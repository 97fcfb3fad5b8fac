//! Client configuration read from the environment
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("pokemon-trainer/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_BASE_URL` - API root (default: `https://pokeapi.co/api/v2`)
    /// - `POKEAPI_TIMEOUT_SECS` - request timeout in seconds (default: 30)
    /// - `POKEAPI_USER_AGENT` - user agent header
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEAPI_BASE_URL") {
            let trimmed = url.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_string();
            }
        }

        if let Some(secs) = read_var::<u64, _>(&lookup, "POKEAPI_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(agent) = lookup("POKEAPI_USER_AGENT") {
            let agent = agent.trim();
            if !agent.is_empty() {
                config.user_agent = agent.to_string();
            }
        }

        config
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("pokemon-trainer/"));
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("POKEAPI_BASE_URL", "http://localhost:8000/api/v2/"),
            ("POKEAPI_TIMEOUT_SECS", "5"),
            ("POKEAPI_USER_AGENT", "tester"),
        ]);

        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tester");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = config_with(&[("POKEAPI_TIMEOUT_SECS", "soon"), ("POKEAPI_BASE_URL", " ")]);

        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
