//! Session setup endpoint bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Amount, Order};

/// Body of `POST v1/sessions/{id}/setup`.
///
/// Carrying an order restricts the returned payment methods to those usable
/// for the order's remaining amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    /// Current rotating session credential.
    pub session_data: String,

    /// Active partial-payment order, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Response of `POST v1/sessions/{id}/setup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupResponse {
    /// Rotated session credential.
    pub session_data: String,

    /// Amount of the purchase this session was created for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    /// Expiry timestamp of the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    /// Payment methods available to the shopper, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Value>,

    /// Redirect return URL configured for the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Country the session was created for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Locale the shopper should be addressed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_locale: Option<String>,

    /// Session-level configuration flags, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
}
