//! Domain primitives, ports, and services.
//!
//! Purpose: define the payment model, the closed repository error taxonomy,
//! and the pass-through service that inbound adapters drive. Nothing here
//! depends on HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: client-facing error payload.
//! - Payment, NewPayment, PaymentId, ParticipantId: payment record model.
//! - PaymentService: implements the payment driving ports.
//! - ports: driving and driven port traits.

pub mod error;
pub mod payment;
pub mod payment_service;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::payment::{NewPayment, ParticipantId, Payment, PaymentId, PaymentValidationError};
pub use self::payment_service::PaymentService;
