//! Builders wiring the simulated store into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use payments::domain::PaymentService;
use payments::inbound::http::state::HttpState;
use payments::outbound::persistence::{FaultPolicy, SimulatedPaymentRepository};

/// Build handler state around one shared payment service.
///
/// The command and query ports are the same service instance, so payments
/// created through one are visible through the other.
pub(super) fn build_http_state(faults: Arc<dyn FaultPolicy>) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let repo = Arc::new(SimulatedPaymentRepository::new(faults, clock));
    let service = Arc::new(PaymentService::new(repo));
    web::Data::new(HttpState::new(service.clone(), service))
}
