//! Non-throwing repository over a [`SessionTransport`].
//!
//! The repository owns no long-lived state. Each operation builds the wire
//! request from the caller's `Session` snapshot and payload, performs exactly
//! one transport call, and folds every failure into a [`SessionError`] value.
//! No retries are performed here.

use tracing::debug;

use crate::error::SessionError;
use crate::proto::{
    ActionComponentData, BalanceRequest, BalanceResponse, CancelOrderRequest, CancelOrderResponse,
    CreateOrderRequest, CreateOrderResponse, DetailsRequest, DetailsResponse, Order,
    PaymentComponentState, PaymentsRequest, PaymentsResponse, Session, SetupRequest, SetupResponse,
};
use crate::transport::SessionTransport;

/// Wraps transport calls into non-throwing `Result` outcomes.
#[derive(Debug)]
pub struct SessionRepository<T> {
    transport: T,
}

impl<T: SessionTransport> SessionRepository<T> {
    /// Creates a repository over the given transport.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns a reference to the underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sets up (or refreshes) the session, optionally scoped to an order.
    pub async fn setup_session(
        &self,
        session: &Session,
        order: Option<Order>,
    ) -> Result<SetupResponse, SessionError> {
        debug!(session_id = %session.id, "setting up session");
        let request = SetupRequest {
            session_data: session.session_data.clone(),
            order,
        };
        self.transport
            .setup(&session.id, request)
            .await
            .map_err(SessionError::from_transport)
    }

    /// Submits a payment, attaching the active order when one is in progress.
    ///
    /// An order already present in the component payload wins over the
    /// `order` argument, so hosts that manage orders themselves are not
    /// overridden.
    pub async fn submit_payment(
        &self,
        session: &Session,
        state: &PaymentComponentState,
        order: Option<&Order>,
    ) -> Result<PaymentsResponse, SessionError> {
        debug!(session_id = %session.id, "submitting payment");
        let mut data = state.data.clone();
        if data.order.is_none() {
            data.order = order.cloned();
        }
        let request = PaymentsRequest {
            session_data: session.session_data.clone(),
            payment_component_data: data,
        };
        self.transport
            .submit_payment(&session.id, request)
            .await
            .map_err(SessionError::from_transport)
    }

    /// Submits the result of a resolved action.
    pub async fn submit_details(
        &self,
        session: &Session,
        action_data: &ActionComponentData,
    ) -> Result<DetailsResponse, SessionError> {
        debug!(session_id = %session.id, "submitting details");
        let request = DetailsRequest {
            session_data: session.session_data.clone(),
            payment_data: action_data.payment_data.clone(),
            details: action_data.details.clone(),
        };
        self.transport
            .submit_details(&session.id, request)
            .await
            .map_err(SessionError::from_transport)
    }

    /// Checks the balance of a partial payment method.
    pub async fn check_balance(
        &self,
        session: &Session,
        state: &PaymentComponentState,
    ) -> Result<BalanceResponse, SessionError> {
        debug!(session_id = %session.id, "checking payment method balance");
        let request = BalanceRequest {
            session_data: session.session_data.clone(),
            payment_method: state.data.payment_method.clone(),
        };
        self.transport
            .check_balance(&session.id, request)
            .await
            .map_err(SessionError::from_transport)
    }

    /// Creates a partial-payment order.
    pub async fn create_order(&self, session: &Session) -> Result<CreateOrderResponse, SessionError> {
        debug!(session_id = %session.id, "creating order");
        let request = CreateOrderRequest {
            session_data: session.session_data.clone(),
        };
        self.transport
            .create_order(&session.id, request)
            .await
            .map_err(SessionError::from_transport)
    }

    /// Cancels an order, releasing its server-side reservation.
    pub async fn cancel_order(
        &self,
        session: &Session,
        order: &Order,
    ) -> Result<CancelOrderResponse, SessionError> {
        debug!(session_id = %session.id, "cancelling order");
        let request = CancelOrderRequest {
            session_data: session.session_data.clone(),
            order: order.clone(),
        };
        self.transport
            .cancel_order(&session.id, request)
            .await
            .map_err(SessionError::from_transport)
    }
}
