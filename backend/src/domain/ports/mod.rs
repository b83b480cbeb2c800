//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod payment_command;
mod payment_query;
mod payment_repository;

#[cfg(test)]
pub use payment_command::MockPaymentCommand;
pub use payment_command::{FixturePaymentCommand, PaymentCommand};
#[cfg(test)]
pub use payment_query::MockPaymentQuery;
pub use payment_query::{FixturePaymentQuery, PaymentQuery};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::{
    FixturePaymentRepository, PaymentRepository, PaymentRepositoryError,
};
