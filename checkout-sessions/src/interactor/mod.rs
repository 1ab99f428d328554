//! Session-owning call sequencer and response mapping.
//!
//! [`SessionInteractor`] is the only component that reads or writes the
//! rotating `sessionData` credential. It serializes all session-mutating
//! calls on a [`tokio::sync::Mutex`]: the lock is held across the network
//! call, so a second call can never observe (or clobber) a credential that is
//! about to be replaced, and responses are applied in the order their
//! requests were issued.
//!
//! After the transport call resolves, credential rotation and result mapping
//! happen synchronously with no intermediate await point. Cancelling the
//! future at any suspension point therefore either applies the whole success
//! path or none of it.

pub mod call_result;

use tokio::sync::Mutex;

use crate::error::SessionError;
use crate::proto::{
    ActionComponentData, BalanceResult, DetailsResponse, Order, PaymentComponentState,
    PaymentsResponse, Session,
};
use crate::repository::SessionRepository;
use crate::transport::SessionTransport;
use call_result::{
    Balance, CancelOrder, CreateOrder, Details, PaymentResult, Payments, UpdatePaymentMethods,
};

/// Owns the current [`Session`] value, sequences repository calls, and maps
/// raw responses into the [`call_result`] vocabularies.
///
/// Beyond the session credential the interactor holds no mutable state; it is
/// otherwise a pure request/response mapper.
#[derive(Debug)]
pub struct SessionInteractor<T> {
    repository: SessionRepository<T>,
    session: Mutex<Session>,
}

impl<T: SessionTransport> SessionInteractor<T> {
    /// Creates an interactor for the given session.
    pub fn new(repository: SessionRepository<T>, session: Session) -> Self {
        Self {
            repository,
            session: Mutex::new(session),
        }
    }

    /// Returns a snapshot of the current session, including the most recently
    /// rotated credential. Hosts can persist this across process restarts.
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Submits a payment and maps the response.
    ///
    /// `order` is attached to the outgoing payload when a partial payment is
    /// in progress.
    pub async fn submit_payment(
        &self,
        state: &PaymentComponentState,
        order: Option<&Order>,
    ) -> Payments {
        let mut session = self.session.lock().await;
        match self.repository.submit_payment(&session, state, order).await {
            Ok(response) => {
                session.session_data = response.session_data.clone();
                Self::map_payments(&session, response)
            }
            Err(err) => Payments::Error(err),
        }
    }

    fn map_payments(session: &Session, response: PaymentsResponse) -> Payments {
        let refused = response.result_code.as_ref().is_some_and(|c| c.is_refused());
        let non_fully_paid = response.order.as_ref().is_some_and(|o| o.is_non_fully_paid());

        if refused && non_fully_paid {
            return Payments::RefusedPartialPayment(Self::payment_result(
                session,
                response.session_result,
                response.session_data,
                response.result_code,
                response.order,
            ));
        }
        if let Some(action) = response.action {
            return Payments::Action(action);
        }
        let result = Self::payment_result(
            session,
            response.session_result,
            response.session_data,
            response.result_code,
            response.order,
        );
        if non_fully_paid {
            Payments::NotFullyPaidOrder(result)
        } else {
            Payments::Finished(result)
        }
    }

    /// Submits the result of a resolved action and maps the response.
    pub async fn submit_details(&self, action_data: &ActionComponentData) -> Details {
        let mut session = self.session.lock().await;
        match self.repository.submit_details(&session, action_data).await {
            Ok(response) => {
                session.session_data = response.session_data.clone();
                Self::map_details(&session, response)
            }
            Err(err) => Details::Error(err),
        }
    }

    fn map_details(session: &Session, response: DetailsResponse) -> Details {
        match response.action {
            Some(action) => Details::Action(action),
            None => Details::Finished(Self::payment_result(
                session,
                response.session_result,
                response.session_data,
                response.result_code,
                response.order,
            )),
        }
    }

    /// Checks the balance of a partial payment method.
    ///
    /// A balance of zero or less is reported as
    /// [`SessionError::InsufficientBalance`]: such a method cannot contribute
    /// to the purchase at all.
    pub async fn check_balance(&self, state: &PaymentComponentState) -> Balance {
        let mut session = self.session.lock().await;
        match self.repository.check_balance(&session, state).await {
            Ok(response) => {
                session.session_data = response.session_data;
                if response.balance.value <= 0 {
                    Balance::Error(SessionError::InsufficientBalance)
                } else {
                    Balance::Successful(BalanceResult {
                        balance: response.balance,
                        transaction_limit: response.transaction_limit,
                    })
                }
            }
            Err(err) => Balance::Error(err),
        }
    }

    /// Creates a partial-payment order.
    pub async fn create_order(&self) -> CreateOrder {
        let mut session = self.session.lock().await;
        match self.repository.create_order(&session).await {
            Ok(response) => {
                session.session_data = response.session_data;
                CreateOrder::Successful(Order {
                    psp_reference: response.psp_reference,
                    order_data: response.order_data,
                })
            }
            Err(err) => CreateOrder::Error(err),
        }
    }

    /// Cancels an order, releasing its server-side reservation.
    pub async fn cancel_order(&self, order: &Order) -> CancelOrder {
        let mut session = self.session.lock().await;
        match self.repository.cancel_order(&session, order).await {
            Ok(response) => {
                session.session_data = response.session_data;
                CancelOrder::Successful
            }
            Err(err) => CancelOrder::Error(err),
        }
    }

    /// Re-runs session setup to fetch the payment methods usable for the
    /// given order's remaining amount (or for the full session when `None`).
    pub async fn update_payment_methods(&self, order: Option<&Order>) -> UpdatePaymentMethods {
        let mut session = self.session.lock().await;
        match self
            .repository
            .setup_session(&session, order.cloned())
            .await
        {
            Ok(response) => {
                session.session_data = response.session_data;
                match response.payment_methods {
                    Some(payment_methods) => UpdatePaymentMethods::Successful {
                        payment_methods,
                        order: order.cloned(),
                    },
                    None => UpdatePaymentMethods::Error(SessionError::Protocol {
                        context: "POST /setup",
                        message: "payment methods missing from setup response".to_owned(),
                    }),
                }
            }
            Err(err) => UpdatePaymentMethods::Error(err),
        }
    }

    fn payment_result(
        session: &Session,
        session_result: Option<String>,
        session_data: String,
        result_code: Option<crate::proto::ResultCode>,
        order: Option<crate::proto::OrderDetails>,
    ) -> PaymentResult {
        PaymentResult {
            session_id: session.id.clone(),
            session_result,
            session_data: Some(session_data),
            result_code,
            order,
        }
    }
}
