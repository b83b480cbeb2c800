//! Test utilities for the payments crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Only compiled for tests or with the `test-support` feature.

pub mod clock {
    //! Deterministic clock for persistence tests.

    use chrono::{DateTime, Local, TimeZone, Utc};
    use mockable::Clock;

    /// Clock frozen at a fixed instant.
    #[derive(Debug, Clone, Copy)]
    pub struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl FixtureClock {
        /// Freeze the clock at `utc_now`.
        #[must_use]
        pub const fn at(utc_now: DateTime<Utc>) -> Self {
            Self { utc_now }
        }
    }

    impl Default for FixtureClock {
        fn default() -> Self {
            Self::at(fixture_timestamp())
        }
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    /// Instant used by [`FixtureClock::default`].
    ///
    /// # Panics
    /// Never in practice; the literal date is valid.
    #[must_use]
    pub fn fixture_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 15, 0)
            .single()
            .unwrap_or_else(|| panic!("fixture timestamp must be unambiguous"))
    }
}

pub mod faults {
    //! Fault policies with predetermined outcomes.

    use std::collections::VecDeque;
    use std::sync::{Mutex, PoisonError};

    use crate::domain::ports::PaymentRepositoryError;
    use crate::outbound::persistence::FaultPolicy;

    /// Replays a fixed sequence of outcomes, then lets every write through.
    ///
    /// # Examples
    /// ```
    /// use payments::domain::ports::PaymentRepositoryError;
    /// use payments::outbound::persistence::FaultPolicy;
    /// use payments::test_support::faults::ScriptedFaults;
    ///
    /// let faults = ScriptedFaults::new([Some(PaymentRepositoryError::StorageFault), None]);
    /// assert_eq!(faults.next_fault(), Some(PaymentRepositoryError::StorageFault));
    /// assert_eq!(faults.next_fault(), None);
    /// assert_eq!(faults.next_fault(), None);
    /// ```
    #[derive(Debug, Default)]
    pub struct ScriptedFaults {
        script: Mutex<VecDeque<Option<PaymentRepositoryError>>>,
    }

    impl ScriptedFaults {
        /// Build a policy from the outcomes to replay, in order.
        pub fn new(script: impl IntoIterator<Item = Option<PaymentRepositoryError>>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
            }
        }

        /// Append an outcome to the end of the script.
        pub fn push(&self, outcome: Option<PaymentRepositoryError>) {
            self.script
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(outcome);
        }
    }

    impl FaultPolicy for ScriptedFaults {
        fn next_fault(&self) -> Option<PaymentRepositoryError> {
            self.script
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .flatten()
        }
    }
}
