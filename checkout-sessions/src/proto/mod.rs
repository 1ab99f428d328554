//! Wire format types for the sessions API.
//!
//! All request and response bodies are JSON with camelCase field names. Every
//! response carries a rotated `sessionData` credential that must be used for
//! the next call on the same session.
//!
//! Payloads the core does not interpret (payment method details, action
//! contents, payment method lists) are kept as [`serde_json::Value`] so that
//! UI components and the server can evolve them independently.

mod amount;
mod order;
mod payments;
mod session;
mod setup;

pub use amount::Amount;
pub use order::{
    BalanceRequest, BalanceResponse, BalanceResult, CancelOrderRequest, CancelOrderResponse,
    CreateOrderRequest, CreateOrderResponse, Order, OrderDetails,
};
pub use payments::{
    Action, ActionComponentData, DetailsRequest, DetailsResponse, PaymentComponentData,
    PaymentComponentState, PaymentsRequest, PaymentsResponse, ResultCode,
};
pub use session::Session;
pub use setup::{SetupRequest, SetupResponse};
