//! Partial-payment order types and the balance/order endpoint bodies.
//!
//! An order is a server-side container that lets a shopper combine multiple
//! payment methods (e.g. a gift card plus a card) against a single purchase.
//! It is created when the first partial payment begins, carried on every
//! subsequent payment call, and closed implicitly on full payment or
//! explicitly via cancellation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Amount;

/// The request-side order reference attached to payment and cancellation
/// calls once a partial-payment order exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned reference for the order.
    pub psp_reference: String,

    /// Opaque order state blob, echoed back to the server on each call.
    pub order_data: String,
}

/// The response-side view of an order, as returned inside payment responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    /// Server-assigned reference for the order.
    pub psp_reference: String,

    /// Opaque order state blob.
    pub order_data: String,

    /// Total order amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    /// Amount still to be paid. A positive value means the order is not yet
    /// fully paid and another payment method is needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_amount: Option<Amount>,

    /// Expiry timestamp of the reservation, if the server provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl OrderDetails {
    /// Returns `true` if the order still has a positive remaining amount.
    #[must_use]
    pub fn is_non_fully_paid(&self) -> bool {
        self.remaining_amount.as_ref().is_some_and(|a| a.value > 0)
    }

    /// Produces the request-side reference for this order.
    #[must_use]
    pub fn to_order(&self) -> Order {
        Order {
            psp_reference: self.psp_reference.clone(),
            order_data: self.order_data.clone(),
        }
    }
}

/// Balance check outcome surfaced to the partial-payment flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResult {
    /// Balance available on the payment method.
    pub balance: Amount,

    /// Maximum amount the method may be charged in one transaction, if the
    /// issuer imposes one.
    pub transaction_limit: Option<Amount>,
}

/// Body of `POST v1/sessions/{id}/paymentMethodBalance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    /// Current rotating session credential.
    pub session_data: String,

    /// Payment method details of the partial payment method, opaque to the
    /// core.
    pub payment_method: Value,
}

/// Response of `POST v1/sessions/{id}/paymentMethodBalance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Rotated session credential.
    pub session_data: String,

    /// Balance available on the payment method.
    pub balance: Amount,

    /// Optional per-transaction limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_limit: Option<Amount>,
}

/// Body of `POST v1/sessions/{id}/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Current rotating session credential.
    pub session_data: String,
}

/// Response of `POST v1/sessions/{id}/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// Rotated session credential.
    pub session_data: String,

    /// Server-assigned reference for the new order.
    pub psp_reference: String,

    /// Opaque order state blob.
    pub order_data: String,
}

/// Body of `POST v1/sessions/{id}/orders/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Current rotating session credential.
    pub session_data: String,

    /// The order whose reservation should be released.
    pub order: Order,
}

/// Response of `POST v1/sessions/{id}/orders/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    /// Rotated session credential.
    pub session_data: String,

    /// Cancellation status reported by the server (e.g. `"received"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
