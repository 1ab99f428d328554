//! Error types for the sessions protocol.
//!
//! Flow takeover is deliberately not an error: it is a normal termination of
//! SDK-managed progression and is modeled as a `TakenOver` variant in the
//! [`call_result`](crate::interactor::call_result) vocabularies instead.

use crate::transport::TransportError;

/// A failure while progressing the sessions flow.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The network call failed or the server answered with an error status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered successfully but the payload was malformed or
    /// missing a field the protocol requires.
    #[error("unexpected server payload during {context}: {message}")]
    Protocol {
        /// Human-readable call identifier (e.g. `"POST /setup"`).
        context: &'static str,
        /// Description of what was wrong with the payload.
        message: String,
    },

    /// The payment was refused while completing a partial payment. The
    /// active order has been cancelled before this error was surfaced.
    #[error("payment was refused while completing a partial payment")]
    RefusedPartialPayment,

    /// The partial payment method has no balance to contribute.
    #[error("payment method has no balance to contribute to the purchase")]
    InsufficientBalance,
}

impl SessionError {
    /// Converts a transport failure, classifying decode failures as protocol
    /// errors: the bytes arrived fine, the server just sent something the
    /// protocol does not allow.
    #[must_use]
    pub fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Decode { context, source } => Self::Protocol {
                context,
                message: source.to_string(),
            },
            other => Self::Transport(other),
        }
    }
}
