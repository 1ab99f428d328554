//! Payment and payment-details endpoint bodies, component payloads, and the
//! server result code vocabulary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Amount, Order, OrderDetails};

/// Result code reported by the server for a payment or details call.
///
/// The set of codes the server may send grows over time; unknown codes are
/// preserved verbatim in [`ResultCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    /// The payment was authorised.
    Authorised,
    /// The payment was refused.
    Refused,
    /// The final result is not yet known.
    Pending,
    /// The shopper cancelled the payment.
    Cancelled,
    /// The payment failed due to an error.
    Error,
    /// The request was received; the outcome follows asynchronously.
    Received,
    /// Additional information must be presented to the shopper.
    PresentToShopper,
    /// Any result code this crate does not know about.
    #[serde(untagged)]
    Other(String),
}

impl ResultCode {
    /// Returns `true` if this code indicates a refused payment.
    ///
    /// Servers are not consistent about casing, so unknown codes are compared
    /// case-insensitively.
    #[must_use]
    pub fn is_refused(&self) -> bool {
        match self {
            Self::Refused => true,
            Self::Other(code) => code.eq_ignore_ascii_case("refused"),
            _ => false,
        }
    }
}

/// A server-requested follow-up step (redirect, 3-D Secure challenge,
/// SDK-specific data) that must be resolved before the payment can complete.
///
/// The core only dispatches on the action's `type`; the remaining fields are
/// opaque and handed to the action-handling UI untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action type discriminator (e.g. `"redirect"`, `"threeDS2"`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Action-specific payload.
    #[serde(flatten)]
    pub payload: Value,
}

/// The payment payload produced by a UI component.
///
/// The core forwards this as-is; only the `order` field is managed by the
/// protocol layer, which attaches the active partial-payment order before
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentComponentData {
    /// Payment method details collected by the component, opaque to the core.
    pub payment_method: Value,

    /// Active partial-payment order, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Amount the component was configured with, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

/// Snapshot of a payment component at the moment an event was emitted: the
/// form data plus a validity flag. Produced by UI components; the core does
/// not interpret it beyond forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentComponentState {
    /// The payload that would be submitted.
    pub data: PaymentComponentData,

    /// Whether the component considers its input complete and valid.
    pub is_valid: bool,
}

/// The payload produced by an action-handling component once the shopper has
/// completed a follow-up step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionComponentData {
    /// Echo of the `paymentData` the action was issued with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<String>,

    /// Action result details, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Body of `POST v1/sessions/{id}/payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsRequest {
    /// Current rotating session credential.
    pub session_data: String,

    /// The component payload, with the active order attached when a partial
    /// payment is in progress.
    pub payment_component_data: PaymentComponentData,
}

/// Response of `POST v1/sessions/{id}/payments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsResponse {
    /// Rotated session credential.
    pub session_data: String,

    /// Opaque result blob the host can relay to its backend for validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_result: Option<String>,

    /// Result code, absent when an action is required instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<ResultCode>,

    /// Follow-up action the shopper must complete, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    /// Order state after this payment, present during partial payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderDetails>,

    /// Amount that was charged by this call, if the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

/// Body of `POST v1/sessions/{id}/paymentDetails`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest {
    /// Current rotating session credential.
    pub session_data: String,

    /// Echo of the `paymentData` the action was issued with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<String>,

    /// Action result details, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Response of `POST v1/sessions/{id}/paymentDetails`.
///
/// Same shape as [`PaymentsResponse`] minus the fields only a fresh payment
/// can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsResponse {
    /// Rotated session credential.
    pub session_data: String,

    /// Opaque result blob the host can relay to its backend for validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_result: Option<String>,

    /// Result code, absent when another action is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<ResultCode>,

    /// Another follow-up action, if the previous one was not sufficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    /// Order state, present during partial payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderDetails>,
}
