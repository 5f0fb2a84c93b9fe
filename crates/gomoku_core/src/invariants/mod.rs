//! First-class invariants for five-in-a-row.
//!
//! Invariants are logical properties that must hold after every mutation.
//! They are asserted in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_consistent;
pub mod outcome_consistent;

pub use history_consistent::{HistoryMatchesGrid, HistoryUniqueCells};
pub use outcome_consistent::{FinishedMeansDecided, TurnIsPlayer};

/// Invariants every board must satisfy.
pub type BoardInvariants = (HistoryMatchesGrid, HistoryUniqueCells);

/// Invariants every game must satisfy.
pub type GameInvariants = (FinishedMeansDecided, TurnIsPlayer);

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysHolds;
    struct NeverHolds;

    impl Invariant<()> for AlwaysHolds {
        fn holds(_: &()) -> bool {
            true
        }
        fn description() -> &'static str {
            "always"
        }
    }

    impl Invariant<()> for NeverHolds {
        fn holds(_: &()) -> bool {
            false
        }
        fn description() -> &'static str {
            "never"
        }
    }

    #[test]
    fn test_set_collects_violations() {
        assert!(<(AlwaysHolds, AlwaysHolds)>::check_all(&()).is_ok());
        let violations = <(AlwaysHolds, NeverHolds)>::check_all(&()).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("never")]);
    }
}
