//! Payment HTTP handlers.
//!
//! ```text
//! GET /payments/{id}
//! POST /payments
//! ```
//!
//! This is the only place where payment outcomes are interpreted. Every
//! repository failure class is named explicitly and logged with its kind,
//! then projected onto the same opaque internal error for the client.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::PaymentRepositoryError;
use crate::domain::{Error, NewPayment, Payment, PaymentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::INTERNAL_ERROR_MESSAGE;
use crate::inbound::http::health::StatusResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_participant_id};
use crate::middleware::TraceId;

/// Message returned when no payment has the requested identity.
pub const PAYMENT_NOT_FOUND_MESSAGE: &str = "Payment not found";

/// Request payload for creating a payment.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequestBody {
    #[schema(example = "p1")]
    pub payer_id: String,
    #[schema(example = "p2")]
    pub payee_id: String,
    #[schema(example = 10.0)]
    pub amount: f64,
}

/// Response payload describing a stored payment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponseBody {
    #[schema(example = 1)]
    pub id: i64,
    pub payer_id: String,
    pub payee_id: String,
    pub amount: f64,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Payment> for PaymentResponseBody {
    fn from(value: Payment) -> Self {
        Self {
            id: value.id().get(),
            payer_id: value.payer_id().to_string(),
            payee_id: value.payee_id().to_string(),
            amount: value.amount(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

fn parse_new_payment(payload: CreatePaymentRequestBody) -> Result<NewPayment, Error> {
    Ok(NewPayment::new(
        parse_participant_id(payload.payer_id, FieldName::new("payerId"))?,
        parse_participant_id(payload.payee_id, FieldName::new("payeeId"))?,
        payload.amount,
    ))
}

fn creation_failed(fault: PaymentRepositoryError) -> Error {
    let trace_id = TraceId::current().map(|id| id.to_string());
    error!(
        fault = fault.kind(),
        transient = fault.is_transient(),
        trace_id = trace_id.as_deref().unwrap_or("-"),
        "payment creation failed"
    );
    Error::internal(INTERNAL_ERROR_MESSAGE)
}

/// Fetch a payment by identity.
#[utoipa::path(
    get,
    path = "/payments/{id}",
    params(("id" = i64, Path, description = "Payment identity")),
    responses(
        (status = 200, description = "Payment found", body = PaymentResponseBody),
        (status = 400, description = "Malformed identity", body = ErrorSchema),
        (status = 404, description = "Payment not found", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "findPayment"
)]
#[get("/payments/{id}")]
pub async fn find_payment(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<PaymentResponseBody>> {
    let id = PaymentId::new(path.into_inner());
    match state.payments_query.find_by_id(id).await {
        Some(payment) => Ok(web::Json(PaymentResponseBody::from(payment))),
        None => Err(Error::not_found(PAYMENT_NOT_FOUND_MESSAGE)),
    }
}

/// Make a single attempt at creating a payment.
///
/// Both storage failure classes produce the same response; only the server
/// log says which one occurred.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use payments::inbound::http::payments::create_payment;
/// use payments::inbound::http::state::HttpState;
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(create_payment);
/// ```
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentRequestBody,
    responses(
        (status = 200, description = "Payment created", body = StatusResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Payment creation failed", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "createPayment"
)]
#[post("/payments")]
pub async fn create_payment(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePaymentRequestBody>,
) -> ApiResult<web::Json<StatusResponse>> {
    let draft = parse_new_payment(payload.into_inner())?;
    match state.payments.create(draft).await {
        Ok(()) => Ok(web::Json(StatusResponse::default())),
        Err(PaymentRepositoryError::StorageFault) => {
            Err(creation_failed(PaymentRepositoryError::StorageFault))
        }
        Err(PaymentRepositoryError::TimeoutError) => {
            Err(creation_failed(PaymentRepositoryError::TimeoutError))
        }
    }
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
