//! Driving port for payment creation.
//!
//! Inbound adapters call this port to create payments. The outcome is the
//! repository's own `Result`, so the adapter sees exactly which failure class
//! occurred and decides how much of it to reveal.

use async_trait::async_trait;

use crate::domain::NewPayment;

use super::PaymentRepositoryError;

/// Driving port for creating payments.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), payments::domain::ports::PaymentRepositoryError> {
/// use payments::domain::ports::{FixturePaymentCommand, PaymentCommand};
/// use payments::domain::{NewPayment, ParticipantId};
///
/// let command = FixturePaymentCommand;
/// let draft = NewPayment::new(
///     ParticipantId::new("p1").expect("payer"),
///     ParticipantId::new("p2").expect("payee"),
///     10.0,
/// );
/// command.create(draft).await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentCommand: Send + Sync {
    /// Make a single attempt at persisting the payment.
    async fn create(&self, payment: NewPayment) -> Result<(), PaymentRepositoryError>;
}

/// Fixture command implementation that accepts every payment.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentCommand;

#[async_trait]
impl PaymentCommand for FixturePaymentCommand {
    async fn create(&self, _payment: NewPayment) -> Result<(), PaymentRepositoryError> {
        Ok(())
    }
}
