//! Checkable invariants over live match sessions.
//!
//! Every check here reads a session's move transcript: the board must
//! equal the history replayed from empty, marks must alternate starting
//! with the human, and every recorded move must land on a playable cell.
//! The checks run independently of normal play and double as executable
//! documentation of what a well-formed session looks like.

#[cfg(kani)]
mod verification;

/// A property of session state that correct play never breaks.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// One failed invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description into a violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as one step.
///
/// Implemented for tuples so a whole family of checks collapses into a
/// single type alias at the call site.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set.
    ///
    /// # Errors
    ///
    /// Returns one [`InvariantViolation`] per failed check; an empty
    /// result means the state is well formed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Three-invariant sets
impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !A::holds(state) {
            violations.push(InvariantViolation::new(A::description()));
        }
        if !B::holds(state) {
            violations.push(InvariantViolation::new(B::description()));
        }
        if !C::holds(state) {
            violations.push(InvariantViolation::new(C::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Two-invariant sets
impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !A::holds(state) {
            violations.push(InvariantViolation::new(A::description()));
        }
        if !B::holds(state) {
            violations.push(InvariantViolation::new(B::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod monotonic_board;
pub mod playable_cells;

pub use alternating_marks::AlternatingMarksInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use playable_cells::PlayableCellsInvariant;

/// All match-session invariants as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    AlternatingMarksInvariant,
    PlayableCellsInvariant,
);
