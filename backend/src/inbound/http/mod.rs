//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod payments;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register extractor configuration and every REST route.
///
/// Callers supply [`state::HttpState`] through `app_data`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use payments::inbound::http::{configure, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(payments::find_payment)
        .service(payments::create_payment)
        .service(health::status);
}
