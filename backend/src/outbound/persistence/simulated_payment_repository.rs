//! In-memory payment store with injected write failures.
//!
//! Stands in for a durable backend. A single mutex around the record map
//! provides single-record atomic commits: a write either inserts one fully
//! formed [`Payment`] or leaves the map untouched. Before touching the map,
//! each write consults a [`FaultPolicy`], which may reject it with a
//! repository failure class.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{PaymentRepository, PaymentRepositoryError};
use crate::domain::{NewPayment, Payment, PaymentId};

use super::FaultPolicy;

const FIRST_PAYMENT_ID: i64 = 1;

#[derive(Debug)]
struct StoreState {
    next_id: i64,
    payments: BTreeMap<PaymentId, Payment>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: FIRST_PAYMENT_ID,
            payments: BTreeMap::new(),
        }
    }
}

/// Simulated payment repository.
///
/// Identities are sequential from 1 and timestamps come from the injected
/// clock, so neither is ever chosen by the caller.
pub struct SimulatedPaymentRepository {
    faults: Arc<dyn FaultPolicy>,
    clock: Arc<dyn Clock>,
    state: Mutex<StoreState>,
}

impl SimulatedPaymentRepository {
    /// Create an empty store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use payments::outbound::persistence::{NoFaults, SimulatedPaymentRepository};
    ///
    /// let repo = SimulatedPaymentRepository::new(Arc::new(NoFaults), Arc::new(DefaultClock));
    /// assert!(repo.is_empty());
    /// ```
    #[must_use]
    pub fn new(faults: Arc<dyn FaultPolicy>, clock: Arc<dyn Clock>) -> Self {
        Self {
            faults,
            clock,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Number of persisted payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_state().payments.len()
    }

    /// Whether no payment has been persisted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_state().payments.is_empty()
    }

    /// Identities of all persisted payments, in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<PaymentId> {
        self.lock_state().payments.keys().copied().collect()
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PaymentRepository for SimulatedPaymentRepository {
    async fn create(&self, payment: NewPayment) -> Result<(), PaymentRepositoryError> {
        if let Some(fault) = self.faults.next_fault() {
            return Err(fault);
        }

        let created_at = self.clock.utc();
        let mut state = self.lock_state();
        let id = PaymentId::new(state.next_id);
        // Running out of identities is a durable condition.
        let next_id = state
            .next_id
            .checked_add(1)
            .ok_or(PaymentRepositoryError::StorageFault)?;
        state.next_id = next_id;
        state
            .payments
            .insert(id, Payment::persisted(id, payment, created_at));
        drop(state);

        debug!(payment_id = %id, "payment persisted");
        Ok(())
    }

    async fn find_by_id(&self, id: PaymentId) -> Option<Payment> {
        self.lock_state().payments.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ParticipantId;
    use crate::outbound::persistence::{MockFaultPolicy, NoFaults};
    use crate::test_support::clock::{FixtureClock, fixture_timestamp};

    fn repo_with(faults: impl FaultPolicy + 'static) -> SimulatedPaymentRepository {
        SimulatedPaymentRepository::new(
            Arc::new(faults),
            Arc::new(FixtureClock::default()),
        )
    }

    #[fixture]
    fn draft() -> NewPayment {
        NewPayment::new(
            ParticipantId::new("p1").expect("payer"),
            ParticipantId::new("p2").expect("payee"),
            10.0,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn successful_create_persists_one_full_record(draft: NewPayment) {
        let repo = repo_with(NoFaults);

        repo.create(draft.clone()).await.expect("create succeeds");

        assert_eq!(repo.ids(), vec![PaymentId::new(1)]);
        let stored = repo
            .find_by_id(PaymentId::new(1))
            .await
            .expect("stored payment");
        assert_eq!(stored.payer_id(), &draft.payer_id);
        assert_eq!(stored.payee_id(), &draft.payee_id);
        assert_eq!(stored.amount().to_bits(), draft.amount.to_bits());
        assert_eq!(stored.created_at(), fixture_timestamp());
    }

    #[rstest]
    #[case(PaymentRepositoryError::StorageFault)]
    #[case(PaymentRepositoryError::TimeoutError)]
    #[tokio::test]
    async fn failed_create_persists_nothing(
        draft: NewPayment,
        #[case] fault: PaymentRepositoryError,
    ) {
        let mut faults = MockFaultPolicy::new();
        faults.expect_next_fault().times(1).return_const(Some(fault));
        let repo = repo_with(faults);

        assert_eq!(repo.create(draft).await, Err(fault));
        assert!(repo.is_empty());
        assert!(repo.find_by_id(PaymentId::new(1)).await.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn identities_are_sequential_and_skip_failed_writes(draft: NewPayment) {
        let mut faults = MockFaultPolicy::new();
        let mut outcomes = vec![None, Some(PaymentRepositoryError::TimeoutError), None].into_iter();
        faults
            .expect_next_fault()
            .times(3)
            .returning(move || outcomes.next().flatten());
        let repo = repo_with(faults);

        let mut results = Vec::new();
        for _ in 0..3 {
            results.push(repo.create(draft.clone()).await);
        }

        assert_eq!(
            results,
            vec![Ok(()), Err(PaymentRepositoryError::TimeoutError), Ok(())]
        );
        assert_eq!(repo.ids(), vec![PaymentId::new(1), PaymentId::new(2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_of_unknown_identity_is_none() {
        let repo = repo_with(NoFaults);
        assert!(repo.find_by_id(PaymentId::new(999_999)).await.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn exhausted_identities_report_storage_fault(draft: NewPayment) {
        let repo = repo_with(NoFaults);
        repo.lock_state().next_id = i64::MAX;

        assert_eq!(
            repo.create(draft).await,
            Err(PaymentRepositoryError::StorageFault)
        );
        assert!(repo.is_empty());
    }
}
