//! State invariants for ultimate tic-tac-toe.
//!
//! Each invariant is a unit type with a pure predicate over [`GameState`].
//! They are grouped into tuples so a whole set is checked in one call,
//! which the move contract does after every move in debug builds.
//!
//! [`GameState`]: crate::GameState

/// A predicate every reachable state satisfies.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the invariant.
    fn holds(state: &S) -> bool;

    /// Short statement of the invariant, used in violation reports.
    fn description() -> &'static str;
}

/// An invariant that failed, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// What should have held.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Reports a failed invariant.
    pub fn new(description: &'static str) -> Self {
        Self { description }
    }
}

/// Several invariants checked as one.
///
/// Implemented for tuples of two to six invariants; every member is
/// checked, so the error lists each failure rather than the first.
pub trait InvariantSet<S> {
    /// Checks every member against `state`.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod routing;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use routing::RoutingInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// The full set checked after each move.
pub type UltimateInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
    RoutingInvariant,
);
