//! Shared test fixtures: a scripted transport and payload builders.
#![allow(dead_code)] // not every test binary uses every fixture

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::json;

use checkout_sessions::proto::{
    Amount, BalanceResponse, CancelOrderResponse, CreateOrderResponse, DetailsResponse, Order,
    OrderDetails, PaymentComponentData, PaymentComponentState, PaymentsResponse, ResultCode,
    Session, SetupResponse,
};
use checkout_sessions::transport::{SessionTransport, TransportError};

/// One transport call as observed by the mock, with the credential the
/// request carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Setup { session_data: String },
    Payments { session_data: String, order: Option<Order> },
    Details { session_data: String },
    Balance { session_data: String },
    CreateOrder { session_data: String },
    CancelOrder { session_data: String, psp_reference: String },
}

#[derive(Debug, Default)]
struct Script {
    setups: Mutex<VecDeque<Result<SetupResponse, TransportError>>>,
    payments: Mutex<VecDeque<Result<PaymentsResponse, TransportError>>>,
    details: Mutex<VecDeque<Result<DetailsResponse, TransportError>>>,
    balances: Mutex<VecDeque<Result<BalanceResponse, TransportError>>>,
    orders: Mutex<VecDeque<Result<CreateOrderResponse, TransportError>>>,
    cancellations: Mutex<VecDeque<Result<CancelOrderResponse, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Transport double that pops scripted responses in FIFO order and records
/// every call it receives. Clones share the same script and call log.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    script: Arc<Script>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_setup(&self, response: Result<SetupResponse, TransportError>) {
        self.script.setups.lock().expect("lock").push_back(response);
    }

    pub fn script_payments(&self, response: Result<PaymentsResponse, TransportError>) {
        self.script.payments.lock().expect("lock").push_back(response);
    }

    pub fn script_details(&self, response: Result<DetailsResponse, TransportError>) {
        self.script.details.lock().expect("lock").push_back(response);
    }

    pub fn script_balance(&self, response: Result<BalanceResponse, TransportError>) {
        self.script.balances.lock().expect("lock").push_back(response);
    }

    pub fn script_create_order(&self, response: Result<CreateOrderResponse, TransportError>) {
        self.script.orders.lock().expect("lock").push_back(response);
    }

    pub fn script_cancel_order(&self, response: Result<CancelOrderResponse, TransportError>) {
        self.script
            .cancellations
            .lock()
            .expect("lock")
            .push_back(response);
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.script.calls.lock().expect("lock").push(call);
    }
}

impl SessionTransport for MockTransport {
    fn setup(
        &self,
        _session_id: &str,
        request: checkout_sessions::proto::SetupRequest,
    ) -> impl Future<Output = Result<SetupResponse, TransportError>> + Send {
        self.record(RecordedCall::Setup {
            session_data: request.session_data,
        });
        let result = self
            .script
            .setups
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no scripted setup response");
        async move { result }
    }

    fn submit_payment(
        &self,
        _session_id: &str,
        request: checkout_sessions::proto::PaymentsRequest,
    ) -> impl Future<Output = Result<PaymentsResponse, TransportError>> + Send {
        self.record(RecordedCall::Payments {
            session_data: request.session_data,
            order: request.payment_component_data.order,
        });
        let result = self
            .script
            .payments
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no scripted payments response");
        async move { result }
    }

    fn submit_details(
        &self,
        _session_id: &str,
        request: checkout_sessions::proto::DetailsRequest,
    ) -> impl Future<Output = Result<DetailsResponse, TransportError>> + Send {
        self.record(RecordedCall::Details {
            session_data: request.session_data,
        });
        let result = self
            .script
            .details
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no scripted details response");
        async move { result }
    }

    fn check_balance(
        &self,
        _session_id: &str,
        request: checkout_sessions::proto::BalanceRequest,
    ) -> impl Future<Output = Result<BalanceResponse, TransportError>> + Send {
        self.record(RecordedCall::Balance {
            session_data: request.session_data,
        });
        let result = self
            .script
            .balances
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no scripted balance response");
        async move { result }
    }

    fn create_order(
        &self,
        _session_id: &str,
        request: checkout_sessions::proto::CreateOrderRequest,
    ) -> impl Future<Output = Result<CreateOrderResponse, TransportError>> + Send {
        self.record(RecordedCall::CreateOrder {
            session_data: request.session_data,
        });
        let result = self
            .script
            .orders
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no scripted create-order response");
        async move { result }
    }

    fn cancel_order(
        &self,
        _session_id: &str,
        request: checkout_sessions::proto::CancelOrderRequest,
    ) -> impl Future<Output = Result<CancelOrderResponse, TransportError>> + Send {
        self.record(RecordedCall::CancelOrder {
            session_data: request.session_data,
            psp_reference: request.order.psp_reference,
        });
        let result = self
            .script
            .cancellations
            .lock()
            .expect("lock")
            .pop_front()
            .expect("no scripted cancel-order response");
        async move { result }
    }
}

pub fn session() -> Session {
    Session::new("CS616D08FD", "token-0")
}

pub fn eur(value: i64) -> Amount {
    Amount::new("EUR", value)
}

pub fn payment_state() -> PaymentComponentState {
    PaymentComponentState {
        data: PaymentComponentData {
            payment_method: json!({ "type": "scheme" }),
            order: None,
            amount: None,
        },
        is_valid: true,
    }
}

pub fn giftcard_state() -> PaymentComponentState {
    PaymentComponentState {
        data: PaymentComponentData {
            payment_method: json!({ "type": "giftcard", "brand": "genericgiftcard" }),
            order: None,
            amount: None,
        },
        is_valid: true,
    }
}

pub fn order_details(psp_reference: &str, remaining: i64) -> OrderDetails {
    OrderDetails {
        psp_reference: psp_reference.to_owned(),
        order_data: "order-data".to_owned(),
        amount: Some(eur(10_000)),
        remaining_amount: Some(eur(remaining)),
        expires_at: None,
    }
}

pub fn payments_response(session_data: &str, result_code: ResultCode) -> PaymentsResponse {
    PaymentsResponse {
        session_data: session_data.to_owned(),
        session_result: Some("result-blob".to_owned()),
        result_code: Some(result_code),
        action: None,
        order: None,
        amount: None,
    }
}

pub fn details_response(session_data: &str, result_code: ResultCode) -> DetailsResponse {
    DetailsResponse {
        session_data: session_data.to_owned(),
        session_result: Some("result-blob".to_owned()),
        result_code: Some(result_code),
        action: None,
        order: None,
    }
}

pub fn balance_response(session_data: &str, balance: i64) -> BalanceResponse {
    BalanceResponse {
        session_data: session_data.to_owned(),
        balance: eur(balance),
        transaction_limit: None,
    }
}

pub fn create_order_response(session_data: &str, psp_reference: &str) -> CreateOrderResponse {
    CreateOrderResponse {
        session_data: session_data.to_owned(),
        psp_reference: psp_reference.to_owned(),
        order_data: "order-data".to_owned(),
    }
}

pub fn cancel_order_response(session_data: &str) -> CancelOrderResponse {
    CancelOrderResponse {
        session_data: session_data.to_owned(),
        status: Some("received".to_owned()),
    }
}

pub fn setup_response(session_data: &str) -> SetupResponse {
    SetupResponse {
        session_data: session_data.to_owned(),
        amount: Some(eur(10_000)),
        expires_at: None,
        payment_methods: Some(json!({ "paymentMethods": [{ "type": "scheme" }] })),
        return_url: None,
        country_code: Some("NL".to_owned()),
        shopper_locale: None,
        configuration: None,
    }
}
