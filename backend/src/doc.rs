//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the payment endpoints, the status probe, and the
//! error schema wrappers from [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and is printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::health::StatusResponse;
use crate::inbound::http::payments::{CreatePaymentRequestBody, PaymentResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payments API",
        description = "Create and look up payments. Storage failures are reported opaquely."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::payments::find_payment,
        crate::inbound::http::payments::create_payment,
        crate::inbound::http::health::status,
    ),
    components(schemas(
        CreatePaymentRequestBody,
        PaymentResponseBody,
        StatusResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "payments", description = "Payment creation and lookup"),
        (name = "health", description = "Status probe")
    )
)]
pub struct ApiDoc;
