use super::Iteration;

/// Iteration event emitted by the bisection solver.
///
/// Events fire after the record is appended to the trace and before the
/// convergence check, so an observer sees exactly the records the caller
/// will receive.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record appended for this iteration.
    pub record: &'a Iteration,
}
