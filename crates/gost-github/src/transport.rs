//! HTTP transport.

use std::time::Duration;

use gost_config::Config;
use reqwest::blocking::{Client, ClientBuilder, Request, Response};

use crate::errors::GitHubError;

/// Sends a built request and hands back the response with its body unread.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Execute a request.
    fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

impl Transport for Client {
    fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        Client::execute(self, request)
    }
}

/// Timeouts applied by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportTimeouts {
    /// Bound on connection establishment.
    pub connect: Duration,
    /// Bound on the whole exchange, if any.
    pub total: Option<Duration>,
}

impl TransportTimeouts {
    /// Only connection establishment is bounded: once connected, the exchange
    /// may take as long as the server needs.
    pub fn from_config(config: &Config) -> Self {
        Self {
            connect: Duration::from_millis(config.api.connect_timeout),
            total: None,
        }
    }
}

/// Get a client builder with a bounded connect timeout.
pub fn get_client_builder(config: &Config) -> ClientBuilder {
    let timeouts = TransportTimeouts::from_config(config);

    Client::builder()
        .connect_timeout(timeouts.connect)
        .timeout(timeouts.total)
        .user_agent(format!("gost/{}", config.version))
}

/// Build the default transport.
pub fn build_transport(config: &Config) -> Result<Client, GitHubError> {
    get_client_builder(config).build().map_err(GitHubError::from)
}

#[cfg(test)]
mod tests {
    use gost_config::DEFAULT_CONNECT_TIMEOUT;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_timeouts_bound_connect_only() {
        let config = Config::from_env_no_version();
        assert_eq!(config.api.connect_timeout, DEFAULT_CONNECT_TIMEOUT);

        assert_eq!(
            TransportTimeouts::from_config(&config),
            TransportTimeouts {
                connect: Duration::from_secs(5),
                total: None,
            }
        );
        get_client_builder(&config).build().unwrap();
    }

    #[test]
    fn test_unreachable_host_is_connect_error() {
        let mut config = Config::from_env_no_version();
        config.api.connect_timeout = 100;
        let client = build_transport(&config).unwrap();

        // Port 1 on loopback is closed: the connection is refused well before the bound.
        let request = Request::new(
            reqwest::Method::GET,
            "http://127.0.0.1:1/gists".parse().unwrap(),
        );
        let err = Transport::execute(&client, request).unwrap_err();
        assert!(err.is_connect());
    }
}
