//! A [`SessionTransport`] implementation over `reqwest`.
//!
//! Every operation is a JSON `POST` to
//! `{base}/v1/sessions/{id}/{operation}?clientKey={key}`. Non-success
//! statuses and undecodable bodies are folded into [`TransportError`]; the
//! protocol-level interpretation of those failures happens in the core crate.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use checkout_sessions::proto::{
    BalanceRequest, BalanceResponse, CancelOrderRequest, CancelOrderResponse, CreateOrderRequest,
    CreateOrderResponse, DetailsRequest, DetailsResponse, PaymentsRequest, PaymentsResponse,
    SetupRequest, SetupResponse,
};
use checkout_sessions::transport::{SessionTransport, TransportError};

use crate::environment::Environment;

/// HTTP client for the hosted sessions API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SessionsHttpClient {
    base_url: Url,
    client_key: String,
    client: Client,
    timeout: Option<Duration>,
}

impl SessionsHttpClient {
    /// Creates a client for the given environment.
    ///
    /// `client_key` is the public key issued for the merchant account; it is
    /// appended to every request as the `clientKey` query parameter.
    #[must_use]
    pub fn new(environment: Environment, client_key: impl Into<String>) -> Self {
        Self::from_base_url(environment.url(), client_key)
    }

    /// Creates a client against an explicit base URL, e.g. a regional proxy.
    ///
    /// The URL must have a host and should end with a slash so the API paths
    /// resolve under it.
    #[must_use]
    pub fn from_base_url(base_url: Url, client_key: impl Into<String>) -> Self {
        Self {
            base_url,
            client_key: client_key.into(),
            client: Client::new(),
            timeout: None,
        }
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the underlying `reqwest` client, e.g. to configure proxies
    /// or certificate pinning.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the base URL this client talks to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured timeout, if any.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds `{base}/v1/sessions/{id}/{suffix}?clientKey={key}`.
    ///
    /// The session id goes through the path-segment writer, so ids are
    /// percent-encoded rather than interpreted as path structure.
    fn endpoint(&self, session_id: &str, suffix: &'static str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().expect("base URL has a host");
            segments.pop_if_empty();
            segments.extend(["v1", "sessions", session_id]);
            segments.extend(suffix.split('/'));
        }
        url.query_pairs_mut()
            .append_pair("clientKey", &self.client_key);
        url
    }

    /// Generic POST helper handling serialization, timeout application, and
    /// error folding.
    ///
    /// `context` identifies the call in errors and logs (e.g. `"POST /payments"`).
    async fn post_json<T, R>(
        &self,
        url: Url,
        context: &'static str,
        payload: &T,
    ) -> Result<R, TransportError>
    where
        T: serde::Serialize + Sync + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        debug!(endpoint = context, "sending sessions request");
        let mut req = self.client.post(url).json(payload);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let response = req.send().await.map_err(|e| TransportError::Network {
            context,
            source: Box::new(e),
        })?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .map_err(|e| TransportError::Decode {
                    context,
                    source: Box::new(e),
                })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(TransportError::Status {
                context,
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl SessionTransport for SessionsHttpClient {
    async fn setup(
        &self,
        session_id: &str,
        request: SetupRequest,
    ) -> Result<SetupResponse, TransportError> {
        self.post_json(self.endpoint(session_id, "setup"), "POST /setup", &request)
            .await
    }

    async fn submit_payment(
        &self,
        session_id: &str,
        request: PaymentsRequest,
    ) -> Result<PaymentsResponse, TransportError> {
        self.post_json(
            self.endpoint(session_id, "payments"),
            "POST /payments",
            &request,
        )
        .await
    }

    async fn submit_details(
        &self,
        session_id: &str,
        request: DetailsRequest,
    ) -> Result<DetailsResponse, TransportError> {
        self.post_json(
            self.endpoint(session_id, "paymentDetails"),
            "POST /paymentDetails",
            &request,
        )
        .await
    }

    async fn check_balance(
        &self,
        session_id: &str,
        request: BalanceRequest,
    ) -> Result<BalanceResponse, TransportError> {
        self.post_json(
            self.endpoint(session_id, "paymentMethodBalance"),
            "POST /paymentMethodBalance",
            &request,
        )
        .await
    }

    async fn create_order(
        &self,
        session_id: &str,
        request: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, TransportError> {
        self.post_json(self.endpoint(session_id, "orders"), "POST /orders", &request)
            .await
    }

    async fn cancel_order(
        &self,
        session_id: &str,
        request: CancelOrderRequest,
    ) -> Result<CancelOrderResponse, TransportError> {
        self.post_json(
            self.endpoint(session_id, "orders/cancel"),
            "POST /orders/cancel",
            &request,
        )
        .await
    }
}
