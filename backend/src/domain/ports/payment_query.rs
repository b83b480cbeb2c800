//! Driving port for payment lookups.

use async_trait::async_trait;

use crate::domain::{Payment, PaymentId};

/// Driving port for reading payments.
///
/// Absence is an ordinary outcome: lookups return `None` rather than an
/// error when no payment has the requested identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentQuery: Send + Sync {
    /// Fetch one payment by identity.
    async fn find_by_id(&self, id: PaymentId) -> Option<Payment>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentQuery;

#[async_trait]
impl PaymentQuery for FixturePaymentQuery {
    async fn find_by_id(&self, _id: PaymentId) -> Option<Payment> {
        None
    }
}
