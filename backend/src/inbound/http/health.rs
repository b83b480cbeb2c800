//! Status probe for orchestration and load balancers.

use actix_web::{HttpResponse, get, http::header};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by the status probe.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}

/// Stateless status probe. Always returns `{"status": "ok"}`.
#[utoipa::path(
    get,
    path = "/status",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    )
)]
#[get("/status")]
pub async fn status() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(StatusResponse::default())
}
