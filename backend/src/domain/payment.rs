//! Payment record model.
//!
//! A [`Payment`] only comes into existence inside a repository adapter: the
//! identity and creation timestamp are assigned by storage and never by the
//! caller. Callers describe what they want persisted with a [`NewPayment`].
//! Payments are immutable once created; there is no update operation.

use std::fmt;

use chrono::{DateTime, Utc};

/// Validation errors returned by the payment field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentValidationError {
    EmptyParticipantId,
}

impl fmt::Display for PaymentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyParticipantId => write!(f, "participant id must not be empty"),
        }
    }
}

impl std::error::Error for PaymentValidationError {}

/// Storage-assigned payment identity.
///
/// # Examples
/// ```
/// use payments::domain::PaymentId;
///
/// let id = PaymentId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaymentId(i64);

impl PaymentId {
    /// Wrap a raw numeric identity.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw numeric identity.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PaymentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a payer or payee.
///
/// No format is imposed beyond being non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Validate and construct a [`ParticipantId`].
    ///
    /// # Examples
    /// ```
    /// use payments::domain::{ParticipantId, PaymentValidationError};
    ///
    /// assert!(ParticipantId::new("p1").is_ok());
    /// assert_eq!(
    ///     ParticipantId::new("   "),
    ///     Err(PaymentValidationError::EmptyParticipantId)
    /// );
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, PaymentValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PaymentValidationError::EmptyParticipantId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ParticipantId> for String {
    fn from(value: ParticipantId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = PaymentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Caller-supplied fields of a payment awaiting persistence.
///
/// `amount` is carried as given: sign and precision are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub payer_id: ParticipantId,
    pub payee_id: ParticipantId,
    pub amount: f64,
}

impl NewPayment {
    /// Bundle the fields of a payment to create.
    #[must_use]
    pub const fn new(payer_id: ParticipantId, payee_id: ParticipantId, amount: f64) -> Self {
        Self {
            payer_id,
            payee_id,
            amount,
        }
    }
}

/// A persisted payment.
///
/// ## Invariants
/// - `id` and `created_at` were assigned by the store that persisted it.
/// - All fields are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    id: PaymentId,
    payer_id: ParticipantId,
    payee_id: ParticipantId,
    amount: f64,
    created_at: DateTime<Utc>,
}

impl Payment {
    /// Materialise a stored payment from its draft and storage-assigned fields.
    ///
    /// Intended for repository adapters; callers never choose `id` or
    /// `created_at` themselves.
    #[must_use]
    pub fn persisted(id: PaymentId, draft: NewPayment, created_at: DateTime<Utc>) -> Self {
        let NewPayment {
            payer_id,
            payee_id,
            amount,
        } = draft;
        Self {
            id,
            payer_id,
            payee_id,
            amount,
            created_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PaymentId {
        self.id
    }

    #[must_use]
    pub const fn payer_id(&self) -> &ParticipantId {
        &self.payer_id
    }

    #[must_use]
    pub const fn payee_id(&self) -> &ParticipantId {
        &self.payee_id
    }

    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
