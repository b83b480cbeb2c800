//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: the simulated payment store and its fault policies.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod persistence;
