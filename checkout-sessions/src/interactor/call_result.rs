//! Closed, per-operation outcome vocabularies.
//!
//! Every interactor operation produces exactly one value from its own enum;
//! the value is immutable and never re-mapped in place. `TakenOver` means the
//! host application claimed the call (or the whole flow) and the SDK made no
//! network request for this step.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SessionError;
use crate::proto::{Action, BalanceResult, Order, OrderDetails, ResultCode};

/// The host-facing terminal payload of a payment attempt.
///
/// Hosts relay `session_result` to their backend to validate the outcome of
/// the session server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    /// Identifier of the session the result belongs to.
    pub session_id: String,

    /// Opaque result blob for server-side validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_result: Option<String>,

    /// Last rotated session credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_data: Option<String>,

    /// Result code reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<ResultCode>,

    /// Final order state, present during partial payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderDetails>,
}

/// Outcome of a payments call.
#[derive(Debug)]
pub enum Payments {
    /// The payment reached a terminal result.
    Finished(PaymentResult),
    /// The payment succeeded but the order still has a remaining amount; the
    /// partial-payment flow continues with another payment method.
    NotFullyPaidOrder(PaymentResult),
    /// The shopper must complete a follow-up action.
    Action(Action),
    /// The payment was refused while an order was in progress; the caller
    /// must cancel the order before surfacing the failure.
    RefusedPartialPayment(PaymentResult),
    /// The call failed.
    Error(SessionError),
    /// The host application handled the call itself.
    TakenOver,
}

/// Outcome of a payment-details call.
#[derive(Debug)]
pub enum Details {
    /// The payment reached a terminal result.
    Finished(PaymentResult),
    /// Another follow-up action is required.
    Action(Action),
    /// The call failed.
    Error(SessionError),
    /// The host application handled the call itself.
    TakenOver,
}

/// Outcome of a balance check.
#[derive(Debug)]
pub enum Balance {
    /// The payment method has a usable balance.
    Successful(BalanceResult),
    /// The call failed, or the method has no balance at all.
    Error(SessionError),
    /// The host application handled the call itself.
    TakenOver,
}

/// Outcome of an order creation.
#[derive(Debug)]
pub enum CreateOrder {
    /// A new order was created.
    Successful(Order),
    /// The call failed.
    Error(SessionError),
    /// The host application handled the call itself.
    TakenOver,
}

/// Outcome of an order cancellation.
#[derive(Debug)]
pub enum CancelOrder {
    /// The reservation was released.
    Successful,
    /// The call failed.
    Error(SessionError),
    /// The host application handled the call itself.
    TakenOver,
}

/// Outcome of a payment-methods refresh.
#[derive(Debug)]
pub enum UpdatePaymentMethods {
    /// Fresh payment methods are available.
    Successful {
        /// The payment methods payload, opaque to the core.
        payment_methods: Value,
        /// The order the refresh was scoped to, if any.
        order: Option<Order>,
    },
    /// The call failed.
    Error(SessionError),
}
