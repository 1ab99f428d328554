//! Host-facing configuration for the HTTP transport.

use std::time::Duration;

use reqwest::Client;

use crate::client::SessionsHttpClient;
use crate::environment::Environment;

/// Everything needed to construct a [`SessionsHttpClient`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use checkout_sessions_http::{CheckoutConfig, Environment};
///
/// let client = CheckoutConfig::new(Environment::Test, "client-key")
///     .with_timeout(Duration::from_secs(10))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// API environment to target.
    pub environment: Environment,

    /// Public client key issued for the merchant account.
    pub client_key: String,

    /// Per-request timeout. `None` leaves the client's default in place.
    pub timeout: Option<Duration>,

    /// Pre-configured `reqwest` client, e.g. with proxies or certificate
    /// pinning. `None` uses a fresh default client.
    pub http_client: Option<Client>,
}

impl CheckoutConfig {
    /// Creates a configuration with no timeout and a default HTTP client.
    #[must_use]
    pub fn new(environment: Environment, client_key: impl Into<String>) -> Self {
        Self {
            environment,
            client_key: client_key.into(),
            timeout: None,
            http_client: None,
        }
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a pre-configured `reqwest` client.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the transport client.
    #[must_use]
    pub fn build(self) -> SessionsHttpClient {
        let mut client = SessionsHttpClient::new(self.environment, self.client_key);
        if let Some(timeout) = self.timeout {
            client = client.with_timeout(timeout);
        }
        if let Some(http_client) = self.http_client {
            client = client.with_http_client(http_client);
        }
        client
    }
}

impl From<CheckoutConfig> for SessionsHttpClient {
    fn from(config: CheckoutConfig) -> Self {
        config.build()
    }
}
