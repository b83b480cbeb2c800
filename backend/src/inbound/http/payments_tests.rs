//! Tests for payment HTTP handlers.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};
use tracing_subscriber::fmt::MakeWriter;

use super::*;
use crate::domain::ParticipantId;
use crate::domain::ports::{
    FixturePaymentCommand, FixturePaymentQuery, MockPaymentCommand, MockPaymentQuery,
};
use crate::inbound::http::validation::{json_config, path_config};
use crate::test_support::clock::fixture_timestamp;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .service(find_payment)
        .service(create_payment)
}

fn command_state(command: MockPaymentCommand) -> HttpState {
    HttpState::new(Arc::new(command), Arc::new(FixturePaymentQuery))
}

fn query_state(query: MockPaymentQuery) -> HttpState {
    HttpState::new(Arc::new(FixturePaymentCommand), Arc::new(query))
}

fn sample_payload() -> Value {
    json!({ "payerId": "p1", "payeeId": "p2", "amount": 10.0 })
}

fn sample_draft() -> NewPayment {
    NewPayment::new(
        ParticipantId::new("p1").expect("payer"),
        ParticipantId::new("p2").expect("payee"),
        10.0,
    )
}

async fn post_payment(state: HttpState, payload: Value) -> (StatusCode, web::Bytes) {
    let app = actix_test::init_service(test_app(state)).await;
    let req = actix_test::TestRequest::post()
        .uri("/payments")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    let status = res.status();
    (status, actix_test::read_body(res).await)
}

async fn post_with_failure(failure: PaymentRepositoryError) -> (StatusCode, web::Bytes) {
    let mut command = MockPaymentCommand::new();
    command
        .expect_create()
        .times(1)
        .return_once(move |_| Err(failure));
    post_payment(command_state(command), sample_payload()).await
}

#[actix_web::test]
async fn create_payment_reports_success() {
    let mut command = MockPaymentCommand::new();
    command
        .expect_create()
        .with(eq(sample_draft()))
        .times(1)
        .return_once(|_| Ok(()));

    let (status, body) = post_payment(command_state(command), sample_payload()).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value, json!({ "status": "ok" }));
}

#[rstest]
#[case(PaymentRepositoryError::StorageFault)]
#[case(PaymentRepositoryError::TimeoutError)]
#[actix_web::test]
async fn create_payment_failure_is_opaque(#[case] failure: PaymentRepositoryError) {
    let (status, body) = post_with_failure(failure).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        value,
        json!({ "code": "internal_error", "message": INTERNAL_ERROR_MESSAGE })
    );
}

#[actix_web::test]
async fn storage_fault_and_timeout_are_indistinguishable_to_clients() {
    let storage = post_with_failure(PaymentRepositoryError::StorageFault).await;
    let timeout = post_with_failure(PaymentRepositoryError::TimeoutError).await;

    assert_eq!(storage, timeout);
}

#[rstest]
#[case(json!({ "payerId": "", "payeeId": "p2", "amount": 1.0 }), "payerId")]
#[case(json!({ "payerId": "p1", "payeeId": "   ", "amount": 1.0 }), "payeeId")]
#[actix_web::test]
async fn blank_participant_is_rejected_before_the_service(
    #[case] payload: Value,
    #[case] field: &str,
) {
    let mut command = MockPaymentCommand::new();
    command.expect_create().times(0);

    let (status, body) = post_payment(command_state(command), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value["code"], json!("invalid_request"));
    assert_eq!(value["details"]["field"], json!(field));
}

#[rstest]
#[case(json!({ "payerId": "p1", "payeeId": "p2" }))]
#[case(json!({ "payerId": "p1", "payeeId": "p2", "amount": "ten" }))]
#[actix_web::test]
async fn malformed_body_is_invalid_request(#[case] payload: Value) {
    let mut command = MockPaymentCommand::new();
    command.expect_create().times(0);

    let (status, body) = post_payment(command_state(command), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value["code"], json!("invalid_request"));
    assert_eq!(value["details"]["code"], json!("malformed_body"));
}

#[actix_web::test]
async fn find_payment_returns_stored_record() {
    let stored = Payment::persisted(PaymentId::new(1), sample_draft(), fixture_timestamp());
    let mut query = MockPaymentQuery::new();
    query
        .expect_find_by_id()
        .with(eq(PaymentId::new(1)))
        .times(1)
        .return_once(move |_| Some(stored));

    let app = actix_test::init_service(test_app(query_state(query))).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/payments/1").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: PaymentResponseBody = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        PaymentResponseBody {
            id: 1,
            payer_id: "p1".to_owned(),
            payee_id: "p2".to_owned(),
            amount: 10.0,
            created_at: fixture_timestamp().to_rfc3339(),
        }
    );
}

#[actix_web::test]
async fn find_payment_reports_absence_as_not_found() {
    let mut query = MockPaymentQuery::new();
    query
        .expect_find_by_id()
        .with(eq(PaymentId::new(999_999)))
        .times(1)
        .return_once(|_| None);

    let app = actix_test::init_service(test_app(query_state(query))).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/payments/999999")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({ "code": "not_found", "message": PAYMENT_NOT_FOUND_MESSAGE })
    );
}

#[actix_web::test]
async fn non_numeric_identity_is_invalid_request() {
    let mut query = MockPaymentQuery::new();
    query.expect_find_by_id().times(0);

    let app = actix_test::init_service(test_app(query_state(query))).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/payments/abc").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], json!("malformed_path"));
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

async fn post_with_failure_logged(
    failure: PaymentRepositoryError,
) -> ((StatusCode, web::Bytes), String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::ERROR)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let response = post_with_failure(failure).await;
    (response, logs.contents())
}

#[actix_web::test]
async fn failure_class_is_logged_but_not_returned() {
    let (storage_response, storage_log) =
        post_with_failure_logged(PaymentRepositoryError::StorageFault).await;
    let (timeout_response, timeout_log) =
        post_with_failure_logged(PaymentRepositoryError::TimeoutError).await;

    assert!(storage_log.contains(r#""fault":"storage_fault""#), "{storage_log}");
    assert!(storage_log.contains(r#""transient":false"#), "{storage_log}");
    assert!(!storage_log.contains("timeout_error"), "{storage_log}");
    assert!(timeout_log.contains(r#""fault":"timeout_error""#), "{timeout_log}");
    assert!(timeout_log.contains(r#""transient":true"#), "{timeout_log}");
    assert!(!timeout_log.contains("storage_fault"), "{timeout_log}");

    assert_eq!(storage_response, timeout_response);
    let body = String::from_utf8_lossy(&storage_response.1).into_owned();
    assert!(!body.contains("storage_fault"));
    assert!(!body.contains("timeout_error"));
}

#[rstest]
#[case(PaymentRepositoryError::StorageFault)]
#[case(PaymentRepositoryError::TimeoutError)]
fn creation_failure_error_carries_only_the_generic_message(
    #[case] failure: PaymentRepositoryError,
) {
    let error = creation_failed(failure);

    assert_eq!(error.code(), crate::domain::ErrorCode::InternalError);
    assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
    assert!(error.details().is_none());
}
