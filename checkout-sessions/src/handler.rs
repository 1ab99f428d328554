//! Top-level protocol state machine.
//!
//! [`SessionsEventHandler`] consumes component-level events, consults the
//! host's [`CheckoutCallbacks`], drives the [`SessionInteractor`], and emits
//! normalized [`CheckoutResult`] outcomes. It owns the one-way takeover
//! latch: once the host claims the flow, the interactor is never invoked
//! again for the attempt and all further events pass through to the host.

use std::fmt::{self, Debug};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::callbacks::{CheckoutCallbacks, ComponentError, PermissionCallback};
use crate::error::SessionError;
use crate::interactor::SessionInteractor;
use crate::interactor::call_result::{
    Balance, CancelOrder, CreateOrder, Details, PaymentResult, Payments, UpdatePaymentMethods,
};
use crate::proto::{Action, ActionComponentData, Amount, Order, PaymentComponentState};
use crate::transport::SessionTransport;

/// An event emitted by a payment or action component.
pub enum ComponentEvent {
    /// The shopper submitted the payment form.
    Submit(PaymentComponentState),
    /// An action component resolved a follow-up step.
    ActionDetails(ActionComponentData),
    /// A component reported an error.
    Error(ComponentError),
    /// A component's form state changed.
    StateChanged(PaymentComponentState),
    /// A component needs a runtime permission.
    PermissionRequest {
        /// The permission being requested.
        permission: String,
        /// Handle the host uses to grant or deny it.
        callback: Box<dyn PermissionCallback>,
    },
}

impl Debug for ComponentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit(state) => f.debug_tuple("Submit").field(state).finish(),
            Self::ActionDetails(data) => f.debug_tuple("ActionDetails").field(data).finish(),
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Self::StateChanged(state) => f.debug_tuple("StateChanged").field(state).finish(),
            Self::PermissionRequest { permission, .. } => f
                .debug_struct("PermissionRequest")
                .field("permission", permission)
                .finish_non_exhaustive(),
        }
    }
}

/// The normalized outcome of one protocol step, surfaced to the host.
#[derive(Debug)]
pub enum CheckoutResult {
    /// The payment attempt reached a terminal result.
    Finished(PaymentResult),
    /// The shopper must complete a follow-up action; feed its outcome back
    /// in via [`ComponentEvent::ActionDetails`].
    Action(Action),
    /// The step failed.
    Error(SessionError),
}

/// Observable state of the protocol state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Ready to accept a submit.
    Idle,
    /// A session-mutating call is in flight.
    AwaitingResult,
    /// An action was surfaced and has not been resolved yet.
    ActionPending,
    /// The attempt finished with a terminal result.
    Finished,
    /// The attempt was refused during a partial payment.
    Refused,
    /// The host took over; terminal for the remainder of the attempt.
    TakenOver,
}

/// Drives a shopper's payment attempt end-to-end against a session.
#[derive(Debug)]
pub struct SessionsEventHandler<T> {
    interactor: SessionInteractor<T>,
    callbacks: Option<Arc<dyn CheckoutCallbacks>>,
    amount: Option<Amount>,
    state: FlowState,
    active_order: Option<Order>,
    taken_over: bool,
}

impl<T: SessionTransport> SessionsEventHandler<T> {
    /// Creates a handler over the given interactor with no host callbacks.
    pub const fn new(interactor: SessionInteractor<T>) -> Self {
        Self {
            interactor,
            callbacks: None,
            amount: None,
            state: FlowState::Idle,
            active_order: None,
            taken_over: false,
        }
    }

    /// Registers the host's callbacks.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: Arc<dyn CheckoutCallbacks>) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Sets the purchase amount, enabling the balance-sufficiency shortcut in
    /// the partial-payment flow. Usually taken from the setup response.
    #[must_use]
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Restores the takeover latch, for handlers recreated from persisted
    /// state after the host already claimed the flow.
    #[must_use]
    pub const fn with_taken_over(mut self, taken_over: bool) -> Self {
        self.taken_over = taken_over;
        if taken_over {
            self.state = FlowState::TakenOver;
        }
        self
    }

    /// Returns the current state of the flow state machine.
    pub const fn flow_state(&self) -> FlowState {
        self.state
    }

    /// Returns `true` once the host has taken over the flow.
    pub const fn is_taken_over(&self) -> bool {
        self.taken_over
    }

    /// Returns the active partial-payment order, if one is in progress.
    pub const fn active_order(&self) -> Option<&Order> {
        self.active_order.as_ref()
    }

    /// Returns the interactor driving this handler.
    pub const fn interactor(&self) -> &SessionInteractor<T> {
        &self.interactor
    }

    /// Feeds a component event into the state machine.
    ///
    /// Returns `Some` when the step produced an outcome the host must act on;
    /// `None` when the flow is still in progress (an order was updated, the
    /// host took over) or the event was pass-through.
    pub async fn on_event(&mut self, event: ComponentEvent) -> Option<CheckoutResult> {
        debug!(event = ?event, "event received");
        if self.taken_over {
            return self.forward_event(event).await;
        }
        match event {
            ComponentEvent::Submit(state) => self.on_submit_requested(state).await,
            ComponentEvent::ActionDetails(data) => self.on_details_requested(data).await,
            ComponentEvent::Error(err) => {
                if let Some(cb) = &self.callbacks {
                    cb.on_error(&err).await;
                }
                None
            }
            ComponentEvent::StateChanged(state) => {
                if let Some(cb) = &self.callbacks {
                    cb.on_state_changed(&state).await;
                }
                None
            }
            ComponentEvent::PermissionRequest {
                permission,
                callback,
            } => {
                if let Some(cb) = &self.callbacks {
                    cb.on_permission_request(&permission, callback.as_ref())
                        .await;
                }
                None
            }
        }
    }

    async fn on_submit_requested(
        &mut self,
        state: PaymentComponentState,
    ) -> Option<CheckoutResult> {
        self.loading(true).await;
        let result = if self.host_claims_submit(&state).await {
            Payments::TakenOver
        } else {
            self.state = FlowState::AwaitingResult;
            self.interactor
                .submit_payment(&state, self.active_order.as_ref())
                .await
        };
        let outcome = self.apply_payments_result(result).await;
        self.loading(false).await;
        outcome
    }

    async fn host_claims_submit(&self, state: &PaymentComponentState) -> bool {
        let Some(cb) = &self.callbacks else {
            return false;
        };
        if cb.before_submit(state).await {
            cb.on_submit(state).await;
            true
        } else {
            false
        }
    }

    async fn apply_payments_result(&mut self, result: Payments) -> Option<CheckoutResult> {
        match result {
            Payments::Finished(payment) => {
                self.state = FlowState::Finished;
                self.active_order = None;
                Some(CheckoutResult::Finished(payment))
            }
            Payments::Action(action) => {
                self.state = FlowState::ActionPending;
                Some(CheckoutResult::Action(action))
            }
            Payments::NotFullyPaidOrder(payment) => self.enter_partial_payment(payment).await,
            Payments::RefusedPartialPayment(_) => {
                self.cancel_order_after_refusal().await;
                if !self.taken_over {
                    self.state = FlowState::Refused;
                }
                Some(CheckoutResult::Error(SessionError::RefusedPartialPayment))
            }
            Payments::Error(err) => {
                self.state = FlowState::Idle;
                Some(CheckoutResult::Error(err))
            }
            Payments::TakenOver => {
                self.set_taken_over().await;
                None
            }
        }
    }

    /// A payment left the order partially paid: latch the order, refresh the
    /// payment methods for the remaining amount, and hand back to the UI.
    async fn enter_partial_payment(&mut self, payment: PaymentResult) -> Option<CheckoutResult> {
        let Some(details) = payment.order else {
            return Some(CheckoutResult::Error(SessionError::Protocol {
                context: "POST /payments",
                message: "order missing from a partially paid response".to_owned(),
            }));
        };
        let order = details.to_order();
        self.active_order = Some(order.clone());
        self.state = FlowState::Idle;
        match self.interactor.update_payment_methods(Some(&order)).await {
            UpdatePaymentMethods::Successful {
                payment_methods, ..
            } => {
                if let Some(cb) = &self.callbacks {
                    cb.on_order_updated(&payment_methods, &order).await;
                }
                None
            }
            UpdatePaymentMethods::Error(err) => Some(CheckoutResult::Error(err)),
        }
    }

    async fn on_details_requested(&mut self, data: ActionComponentData) -> Option<CheckoutResult> {
        self.loading(true).await;
        let result = if self.host_claims_details(&data).await {
            Details::TakenOver
        } else {
            self.state = FlowState::AwaitingResult;
            self.interactor.submit_details(&data).await
        };
        let outcome = match result {
            Details::Finished(payment) => {
                self.state = FlowState::Finished;
                self.active_order = None;
                Some(CheckoutResult::Finished(payment))
            }
            Details::Action(action) => {
                self.state = FlowState::ActionPending;
                Some(CheckoutResult::Action(action))
            }
            Details::Error(err) => {
                self.state = FlowState::Idle;
                Some(CheckoutResult::Error(err))
            }
            Details::TakenOver => {
                self.set_taken_over().await;
                None
            }
        };
        self.loading(false).await;
        outcome
    }

    async fn host_claims_details(&self, data: &ActionComponentData) -> bool {
        match &self.callbacks {
            Some(cb) => cb.on_additional_details(data).await,
            None => false,
        }
    }

    /// Starts the partial-payment flow with the given partial method (e.g. a
    /// gift card): check its balance, create an order when the balance does
    /// not cover the purchase, then submit.
    pub async fn start_partial_payment(
        &mut self,
        state: PaymentComponentState,
    ) -> Option<CheckoutResult> {
        if self.taken_over {
            return self.forward_event(ComponentEvent::Submit(state)).await;
        }
        self.loading(true).await;
        let outcome = self.run_partial_payment(state).await;
        self.loading(false).await;
        outcome
    }

    async fn run_partial_payment(
        &mut self,
        state: PaymentComponentState,
    ) -> Option<CheckoutResult> {
        let balance = if self.host_claims_balance_check(&state).await {
            Balance::TakenOver
        } else {
            self.state = FlowState::AwaitingResult;
            self.interactor.check_balance(&state).await
        };

        let balance_result = match balance {
            Balance::Successful(result) => result,
            Balance::Error(err) => {
                self.state = FlowState::Idle;
                return Some(CheckoutResult::Error(err));
            }
            Balance::TakenOver => {
                self.set_taken_over().await;
                return None;
            }
        };

        // The method covers the whole purchase: a plain payment suffices, no
        // order needed.
        if self.covers_full_amount(&balance_result.balance) {
            let result = self.interactor.submit_payment(&state, None).await;
            return self.apply_payments_result(result).await;
        }

        let created = if self.host_claims_order_request().await {
            CreateOrder::TakenOver
        } else {
            self.interactor.create_order().await
        };
        match created {
            CreateOrder::Successful(order) => {
                self.active_order = Some(order.clone());
                let result = self.interactor.submit_payment(&state, Some(&order)).await;
                self.apply_payments_result(result).await
            }
            CreateOrder::Error(err) => {
                self.state = FlowState::Idle;
                Some(CheckoutResult::Error(err))
            }
            CreateOrder::TakenOver => {
                self.set_taken_over().await;
                None
            }
        }
    }

    fn covers_full_amount(&self, balance: &Amount) -> bool {
        // Unknown purchase amount: assume the balance is partial and go
        // through the order flow, which also handles full coverage.
        self.amount
            .as_ref()
            .is_some_and(|amount| balance.currency == amount.currency && balance.value >= amount.value)
    }

    async fn host_claims_balance_check(&self, state: &PaymentComponentState) -> bool {
        match &self.callbacks {
            Some(cb) => cb.before_balance_check(state).await,
            None => false,
        }
    }

    async fn host_claims_order_request(&self) -> bool {
        match &self.callbacks {
            Some(cb) => cb.before_order_request().await,
            None => false,
        }
    }

    /// Cancels the active order because the shopper abandoned the partial
    /// payment, releasing the server-side reservation.
    pub async fn abandon_partial_payment(&mut self) -> Option<CheckoutResult> {
        if self.taken_over {
            return None;
        }
        let Some(order) = self.active_order.clone() else {
            return None;
        };
        self.loading(true).await;
        let result = self.cancel_order_call(&order).await;
        let outcome = match result {
            CancelOrder::Successful => {
                self.active_order = None;
                self.state = FlowState::Idle;
                None
            }
            CancelOrder::Error(err) => Some(CheckoutResult::Error(err)),
            CancelOrder::TakenOver => {
                self.set_taken_over().await;
                None
            }
        };
        self.loading(false).await;
        outcome
    }

    /// A partial payment was refused: the reservation must be released
    /// before the error reaches the host, so that no dangling order is left
    /// server-side. Failure to cancel is logged but does not mask the
    /// refusal.
    async fn cancel_order_after_refusal(&mut self) {
        let Some(order) = self.active_order.take() else {
            return;
        };
        warn!(psp_reference = %order.psp_reference, "cancelling order after refused partial payment");
        match self.cancel_order_call(&order).await {
            CancelOrder::Successful => {}
            CancelOrder::Error(err) => {
                warn!(error = %err, "failed to cancel order after refusal");
            }
            CancelOrder::TakenOver => self.set_taken_over().await,
        }
    }

    async fn cancel_order_call(&self, order: &Order) -> CancelOrder {
        let host_claims = match &self.callbacks {
            Some(cb) => cb.before_order_cancel(order).await,
            None => false,
        };
        if host_claims {
            CancelOrder::TakenOver
        } else {
            self.interactor.cancel_order(order).await
        }
    }

    async fn set_taken_over(&mut self) {
        if self.taken_over {
            return;
        }
        self.taken_over = true;
        self.state = FlowState::TakenOver;
        info!("flow was taken over");
        if let Some(cb) = &self.callbacks {
            cb.on_flow_taken_over().await;
        }
    }

    /// Post-takeover event handling: everything goes to the host raw, and
    /// the interactor is never invoked.
    async fn forward_event(&self, event: ComponentEvent) -> Option<CheckoutResult> {
        let Some(cb) = &self.callbacks else {
            return None;
        };
        match event {
            ComponentEvent::Submit(state) => cb.on_submit(&state).await,
            ComponentEvent::ActionDetails(data) => {
                let _ = cb.on_additional_details(&data).await;
            }
            ComponentEvent::Error(err) => cb.on_error(&err).await,
            ComponentEvent::StateChanged(state) => cb.on_state_changed(&state).await,
            ComponentEvent::PermissionRequest {
                permission,
                callback,
            } => {
                cb.on_permission_request(&permission, callback.as_ref())
                    .await;
            }
        }
        None
    }

    async fn loading(&self, is_loading: bool) {
        if let Some(cb) = &self.callbacks {
            cb.on_loading(is_loading).await;
        }
    }
}
