//! Payment domain service.
//!
//! Implements the payment driving ports on top of a [`PaymentRepository`].
//! The repository's `Result` and `Option` are forwarded untouched, with no
//! retry, mapping, or logging. Outcomes are interpreted only by inbound
//! adapters.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{PaymentCommand, PaymentQuery, PaymentRepository, PaymentRepositoryError};
use crate::domain::{NewPayment, Payment, PaymentId};

/// Payment service implementing both command and query driving ports.
#[derive(Clone)]
pub struct PaymentService<R> {
    payment_repo: Arc<R>,
}

impl<R> PaymentService<R> {
    /// Create a new service backed by the payment repository.
    pub const fn new(payment_repo: Arc<R>) -> Self {
        Self { payment_repo }
    }
}

#[async_trait]
impl<R> PaymentCommand for PaymentService<R>
where
    R: PaymentRepository,
{
    async fn create(&self, payment: NewPayment) -> Result<(), PaymentRepositoryError> {
        self.payment_repo.create(payment).await
    }
}

#[async_trait]
impl<R> PaymentQuery for PaymentService<R>
where
    R: PaymentRepository,
{
    async fn find_by_id(&self, id: PaymentId) -> Option<Payment> {
        self.payment_repo.find_by_id(id).await
    }
}

#[cfg(test)]
#[path = "payment_service_tests.rs"]
mod tests;
