//! Simulated persistence adapters.
//!
//! The payment store keeps records in memory and fails writes on purpose,
//! standing in for a durable backend whose failure modes the rest of the
//! service must handle.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use payments::outbound::persistence::{
//!     FailureRate, SeededFaults, SimulatedPaymentRepository,
//! };
//!
//! let faults = SeededFaults::new(FailureRate::default(), 7);
//! let repo = SimulatedPaymentRepository::new(Arc::new(faults), Arc::new(DefaultClock));
//! assert!(repo.is_empty());
//! ```

mod fault_policy;
mod simulated_payment_repository;

#[cfg(test)]
pub use fault_policy::MockFaultPolicy;
pub use fault_policy::{
    DEFAULT_FAILURE_RATE, EntropyFaults, FailureRate, FaultPolicy, InvalidFailureRate, NoFaults,
    SeededFaults,
};
pub use simulated_payment_repository::SimulatedPaymentRepository;
