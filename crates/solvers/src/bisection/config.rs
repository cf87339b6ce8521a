/// Configuration for the bisection solver.
///
/// A run converges once the interval width drops below `tolerance`, and
/// gives up after `max_iters` iterations. A tolerance of zero (or below)
/// never converges and simply runs the full budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum acceptable interval width at termination.
    pub tolerance: f64,
    /// Iteration budget.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iters: 100,
        }
    }
}
