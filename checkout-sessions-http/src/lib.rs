#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the checkout sessions protocol.
//!
//! This crate implements
//! [`checkout_sessions::transport::SessionTransport`] over `reqwest`,
//! targeting the hosted sessions API. Hosts construct a
//! [`SessionsHttpClient`] for an [`Environment`] and hand it to the core
//! crate:
//!
//! ```no_run
//! use checkout_sessions::{SessionInteractor, SessionRepository};
//! use checkout_sessions::proto::Session;
//! use checkout_sessions_http::{Environment, SessionsHttpClient};
//!
//! let transport = SessionsHttpClient::new(Environment::Test, "client-key");
//! let session = Session::new("CS616D08FD", "initial-session-data");
//! let interactor = SessionInteractor::new(SessionRepository::new(transport), session);
//! ```

pub mod client;
pub mod config;
pub mod environment;

pub use client::SessionsHttpClient;
pub use config::CheckoutConfig;
pub use environment::Environment;
