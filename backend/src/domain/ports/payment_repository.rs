//! Driven port for payment persistence.
//!
//! Writes can fail in exactly two ways, captured by the closed
//! [`PaymentRepositoryError`] taxonomy. Reads have no failure channel: a
//! missing payment is reported as `None`, never as an error.

use async_trait::async_trait;

use crate::domain::{NewPayment, Payment, PaymentId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by payment repository writes.
    ///
    /// Both variants carry no payload. Consumers match each one explicitly;
    /// introducing a third variant is a breaking change by construction.
    #[derive(Copy, Hash)]
    pub enum PaymentRepositoryError {
        /// Durable storage rejected the write. Not worth retrying.
        StorageFault => "payment storage fault",
        /// Storage did not acknowledge the write in time. Transient.
        TimeoutError => "payment storage timed out",
    }
}

impl PaymentRepositoryError {
    /// Whether the failure belongs to the transient class.
    ///
    /// # Examples
    /// ```
    /// use payments::domain::ports::PaymentRepositoryError;
    ///
    /// assert!(PaymentRepositoryError::TimeoutError.is_transient());
    /// assert!(!PaymentRepositoryError::StorageFault.is_transient());
    /// ```
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::StorageFault => false,
            Self::TimeoutError => true,
        }
    }
}

/// Port for creating and looking up payments.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() {
/// use payments::domain::ports::{FixturePaymentRepository, PaymentRepository};
/// use payments::domain::PaymentId;
///
/// let repo = FixturePaymentRepository;
/// assert!(repo.find_by_id(PaymentId::new(1)).await.is_none());
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Persist a new payment, assigning its identity and timestamp.
    ///
    /// Either the full record is stored and `Ok(())` is returned, or nothing
    /// is stored and the failure class is returned.
    async fn create(&self, payment: NewPayment) -> Result<(), PaymentRepositoryError>;

    /// Look up a payment by identity.
    async fn find_by_id(&self, id: PaymentId) -> Option<Payment>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Accepts every write without storing it, so lookups always miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentRepository;

#[async_trait]
impl PaymentRepository for FixturePaymentRepository {
    async fn create(&self, _payment: NewPayment) -> Result<(), PaymentRepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: PaymentId) -> Option<Payment> {
        None
    }
}
