//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixturePaymentCommand, FixturePaymentQuery, PaymentCommand, PaymentQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub payments: Arc<dyn PaymentCommand>,
    pub payments_query: Arc<dyn PaymentQuery>,
}

impl HttpState {
    /// Construct state from the payment driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use payments::domain::PaymentService;
    /// use payments::inbound::http::state::HttpState;
    /// use payments::outbound::persistence::{NoFaults, SimulatedPaymentRepository};
    ///
    /// let repo = Arc::new(SimulatedPaymentRepository::new(
    ///     Arc::new(NoFaults),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let service = Arc::new(PaymentService::new(repo));
    /// let state = HttpState::new(service.clone(), service);
    /// let _payments = state.payments.clone();
    /// ```
    pub fn new(payments: Arc<dyn PaymentCommand>, payments_query: Arc<dyn PaymentQuery>) -> Self {
        Self {
            payments,
            payments_query,
        }
    }
}

impl Default for HttpState {
    /// State backed by fixtures: creates succeed and lookups always miss.
    fn default() -> Self {
        Self::new(Arc::new(FixturePaymentCommand), Arc::new(FixturePaymentQuery))
    }
}
