#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types and protocol state machine for the checkout sessions flow.
//!
//! This crate implements the client side of the sessions payment-orchestration
//! protocol: a hosted "session" resource on the server drives a shopper's
//! payment attempt, and the SDK sequences the network calls against it. The
//! session credential (`sessionData`) rotates on every server response, so all
//! calls for one attempt must be serialized and must always carry the most
//! recently received value.
//!
//! # Overview
//!
//! The flow is layered, leaves first:
//!
//! - [`transport::SessionTransport`] - the raw network boundary; implemented
//!   over HTTP by the `checkout-sessions-http` crate, or by a mock in tests.
//! - [`repository::SessionRepository`] - non-throwing wrapper that builds wire
//!   requests and folds transport failures into [`error::SessionError`].
//! - [`interactor::SessionInteractor`] - owns the rotating [`proto::Session`]
//!   credential and maps raw responses into the closed
//!   [`interactor::call_result`] vocabularies.
//! - [`handler::SessionsEventHandler`] - the top-level state machine; consumes
//!   component events, consults the host's [`callbacks::CheckoutCallbacks`],
//!   and emits normalized [`handler::CheckoutResult`] outcomes.
//!
//! The host application can take over the flow at any interception point by
//! returning `true` from the relevant callback; from then on the SDK performs
//! no further autonomous network calls and forwards all events to the host.
//!
//! # Modules
//!
//! - [`callbacks`] - Host-implemented interception and notification hooks
//! - [`error`] - Error types for the sessions protocol
//! - [`handler`] - Top-level event handler and normalized checkout results
//! - [`interactor`] - Session-owning call sequencer and result mapping
//! - [`proto`] - Wire format types for the sessions API
//! - [`repository`] - Non-throwing repository over a transport
//! - [`transport`] - Transport trait and transport-level errors

pub mod callbacks;
pub mod error;
pub mod handler;
pub mod interactor;
pub mod proto;
pub mod repository;
pub mod transport;

pub use callbacks::{CheckoutCallbacks, ComponentError, PermissionCallback};
pub use error::SessionError;
pub use handler::{CheckoutResult, ComponentEvent, FlowState, SessionsEventHandler};
pub use interactor::SessionInteractor;
pub use interactor::call_result::PaymentResult;
pub use repository::SessionRepository;
pub use transport::{SessionTransport, TransportError};
