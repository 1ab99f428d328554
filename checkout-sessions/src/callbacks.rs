//! Host-implemented interception and notification hooks.
//!
//! The host application registers a [`CheckoutCallbacks`] implementation to
//! observe the flow and, optionally, to take it over. All methods have
//! default implementations; implement only the hooks you need.
//!
//! # Taking over the flow
//!
//! The `before_*` hooks (and [`CheckoutCallbacks::on_additional_details`])
//! return a `bool`: `true` means the host performs the corresponding network
//! call through its own backend. Once any hook returns `true` the SDK stops
//! all autonomous protocol progression for the rest of the attempt,
//! [`CheckoutCallbacks::on_flow_taken_over`] fires exactly once, and every
//! subsequent component event is forwarded to the host raw.

use std::fmt::{self, Debug};
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::proto::{ActionComponentData, Order, PaymentComponentState};

/// Boxed future returned by callback methods, keeping the trait
/// dyn-compatible.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An error reported by a UI component, forwarded to the host verbatim.
#[derive(Debug, Clone)]
pub struct ComponentError {
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl ComponentError {
    /// Creates a component error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Resolution handle for a runtime permission request raised by a component.
pub trait PermissionCallback: Send + Sync {
    /// The host granted the permission.
    fn grant(&self);

    /// The host denied the permission.
    fn deny(&self);
}

/// Hooks the host application implements to interact with the sessions flow.
pub trait CheckoutCallbacks: Send + Sync {
    /// Called before a submit-triggered payments call.
    ///
    /// Return `true` to take over: [`Self::on_submit`] is invoked with the
    /// same state and the SDK performs no network call for this step.
    fn before_submit<'a>(&'a self, _state: &'a PaymentComponentState) -> BoxFuture<'a, bool> {
        Box::pin(async { false })
    }

    /// Called when the host has taken over a submit, and for every raw
    /// submit event after the flow was taken over.
    fn on_submit<'a>(&'a self, _state: &'a PaymentComponentState) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// Called before an additional-details call.
    ///
    /// Return `true` to take over the details call (and the rest of the
    /// flow); the SDK then performs no network call for this step.
    fn on_additional_details<'a>(&'a self, _data: &'a ActionComponentData) -> BoxFuture<'a, bool> {
        Box::pin(async { false })
    }

    /// Called before a balance check in the partial-payment flow. Return
    /// `true` to take over.
    fn before_balance_check<'a>(&'a self, _state: &'a PaymentComponentState) -> BoxFuture<'a, bool> {
        Box::pin(async { false })
    }

    /// Called before an order is created in the partial-payment flow. Return
    /// `true` to take over.
    fn before_order_request(&self) -> BoxFuture<'_, bool> {
        Box::pin(async { false })
    }

    /// Called before an order is cancelled, including the automatic
    /// cancellation after a refused partial payment. Return `true` to take
    /// over.
    fn before_order_cancel<'a>(&'a self, _order: &'a Order) -> BoxFuture<'a, bool> {
        Box::pin(async { false })
    }

    /// Called exactly once per payment attempt when the flow is taken over.
    fn on_flow_taken_over(&self) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }

    /// Called during the partial-payment flow when payment methods for the
    /// order's remaining amount are available and the UI should re-present.
    fn on_order_updated<'a>(
        &'a self,
        _payment_methods: &'a Value,
        _order: &'a Order,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// A component reported an error. No protocol state is affected.
    fn on_error<'a>(&'a self, _error: &'a ComponentError) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// A component's state changed. No protocol state is affected.
    fn on_state_changed<'a>(&'a self, _state: &'a PaymentComponentState) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// A component requested a runtime permission. Resolve it through the
    /// provided callback. No protocol state is affected.
    fn on_permission_request<'a>(
        &'a self,
        _permission: &'a str,
        _callback: &'a dyn PermissionCallback,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// A network call is starting (`true`) or has completed (`false`).
    /// Useful for driving a loading indicator.
    fn on_loading(&self, _is_loading: bool) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}

impl Debug for dyn CheckoutCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutCallbacks").finish_non_exhaustive()
    }
}
