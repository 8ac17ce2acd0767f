//! Config module.

use std::env;

/// Default GitHub API root URL.
pub const DEFAULT_ROOT_URL: &str = "https://api.github.com";
/// Default connect timeout, in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 5000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// API root URL.
    pub root_url: String,
    /// API personal token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                connect_timeout: env_to_u64("GOST_API_CONNECT_TIMEOUT", DEFAULT_CONNECT_TIMEOUT),
                root_url: env_to_str("GOST_API_ROOT_URL", DEFAULT_ROOT_URL),
                token: env_to_str("GOST_API_TOKEN", ""),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("GOST_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }

    /// Replace the API token.
    pub fn with_token<T: Into<String>>(mut self, token: T) -> Self {
        self.api.token = token.into();
        self
    }

    /// Replace the API root URL.
    pub fn with_root_url<T: Into<String>>(mut self, root_url: T) -> Self {
        self.api.root_url = root_url.into();
        self
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_env_parsing_fallbacks() {
        env::set_var("GOST_TEST_U64_GARBAGE", "not-a-number");
        env::set_var("GOST_TEST_U64_VALID", "1500");
        env::set_var("GOST_TEST_BOOL_SET", "1");

        assert_eq!(env_to_u64("GOST_TEST_U64_GARBAGE", 5000), 5000);
        assert_eq!(env_to_u64("GOST_TEST_U64_VALID", 5000), 1500);
        assert_eq!(env_to_u64("GOST_TEST_U64_MISSING", 5000), 5000);
        assert!(env_to_bool("GOST_TEST_BOOL_SET", false));
        assert!(!env_to_bool("GOST_TEST_BOOL_MISSING", false));
        assert_eq!(env_to_str("GOST_TEST_STR_MISSING", "abc"), "abc");
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::from_env_no_version()
            .with_token("T")
            .with_root_url("http://127.0.0.1:1234");

        assert_eq!(config.api.token, "T");
        assert_eq!(config.api.root_url, "http://127.0.0.1:1234");
        assert_eq!(config.version, "0.0.0");
    }
}
