//! The raw network boundary of the sessions protocol.
//!
//! [`SessionTransport`] is the only seam between the protocol core and the
//! outside world: one async method per sessions endpoint, taking a typed
//! request body and returning a typed response or a [`TransportError`]. The
//! `checkout-sessions-http` crate implements it over HTTP; tests implement it
//! with scripted responses.
//!
//! The transport performs a single attempt per call. Retry policy, if any,
//! belongs to the host application.

use crate::proto::{
    BalanceRequest, BalanceResponse, CancelOrderRequest, CancelOrderResponse, CreateOrderRequest,
    CreateOrderResponse, DetailsRequest, DetailsResponse, PaymentsRequest, PaymentsResponse,
    SetupRequest, SetupResponse,
};

/// Boxed error used as the underlying cause of transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur at the network boundary.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("network failure during {context}: {source}")]
    Network {
        /// Human-readable call identifier (e.g. `"POST /payments"`).
        context: &'static str,
        /// The underlying network error.
        #[source]
        source: BoxError,
    },

    /// The server answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status} during {context}: {body}")]
    Status {
        /// Human-readable call identifier.
        context: &'static str,
        /// The HTTP status code.
        status: u16,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// The response body could not be decoded into the expected shape
    /// (including a missing `sessionData`).
    #[error("malformed server payload during {context}: {source}")]
    Decode {
        /// Human-readable call identifier.
        context: &'static str,
        /// The underlying decode error.
        #[source]
        source: BoxError,
    },
}

/// Performs the raw network calls of the sessions protocol.
///
/// Implementations must not retry and must not mutate any session state; the
/// rotating credential is threaded through the request and response bodies by
/// the layers above.
pub trait SessionTransport: Send + Sync {
    /// Calls `POST v1/sessions/{id}/setup`.
    fn setup(
        &self,
        session_id: &str,
        request: SetupRequest,
    ) -> impl Future<Output = Result<SetupResponse, TransportError>> + Send;

    /// Calls `POST v1/sessions/{id}/payments`.
    fn submit_payment(
        &self,
        session_id: &str,
        request: PaymentsRequest,
    ) -> impl Future<Output = Result<PaymentsResponse, TransportError>> + Send;

    /// Calls `POST v1/sessions/{id}/paymentDetails`.
    fn submit_details(
        &self,
        session_id: &str,
        request: DetailsRequest,
    ) -> impl Future<Output = Result<DetailsResponse, TransportError>> + Send;

    /// Calls `POST v1/sessions/{id}/paymentMethodBalance`.
    fn check_balance(
        &self,
        session_id: &str,
        request: BalanceRequest,
    ) -> impl Future<Output = Result<BalanceResponse, TransportError>> + Send;

    /// Calls `POST v1/sessions/{id}/orders`.
    fn create_order(
        &self,
        session_id: &str,
        request: CreateOrderRequest,
    ) -> impl Future<Output = Result<CreateOrderResponse, TransportError>> + Send;

    /// Calls `POST v1/sessions/{id}/orders/cancel`.
    fn cancel_order(
        &self,
        session_id: &str,
        request: CancelOrderRequest,
    ) -> impl Future<Output = Result<CancelOrderResponse, TransportError>> + Send;
}
