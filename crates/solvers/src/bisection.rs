//! Bisection root finding with per-iteration tracing.
//!
//! # Algorithm
//!
//! Bisection finds a root of a continuous function on an interval whose
//! endpoint values have opposite signs. Each iteration evaluates the
//! interval midpoint and keeps the half that still brackets the sign
//! change, halving the interval width every step. Convergence is linear
//! with rate 0.5 and guaranteed for continuous functions on a valid
//! bracket.
//!
//! # Iteration Records
//!
//! Every iteration is captured as an [`Iteration`] in a [`Trace`] before
//! the bracket narrows. The recorded `error` is therefore the interval
//! width *entering* the iteration, not the width it leaves behind; the
//! value lags the narrowing by one step. The full trace is returned in the
//! [`Solution`] along with the root estimate, which is always the last
//! computed midpoint.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the record is
//! appended and before the convergence check. Observers can return
//! [`Action::StopEarly`] to halt immediately with the trace collected so
//! far.

mod action;
mod bracket;
mod config;
mod event;
mod solution;
mod trace;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::Config;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trace::{Iteration, Trace};

use dichotomy_core::{Function, Observer};

/// Finds a root of `f` on `bracket` using the bisection method.
///
/// The observer sees each iteration's record as it is appended. See the
/// [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns a [`BracketError`] if an endpoint is non-finite, the interval
/// has zero width, or `f` does not change sign across it. No records are
/// produced on error.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, BracketError>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut bracket = Bracket::new(f, bracket)?;
    let mut trace = Trace::new();
    let mut root = bracket.midpoint();

    for iter in 1..=config.max_iters {
        let midpoint = bracket.midpoint();
        let f_a = f.eval(bracket.a());
        let f_b = f.eval(bracket.b());
        let f_midpoint = f.eval(midpoint);
        let error = bracket.width();
        root = midpoint;

        let record = Iteration {
            iter,
            a: bracket.a(),
            b: bracket.b(),
            midpoint,
            f_a,
            f_b,
            f_midpoint,
            error,
        };
        trace.push(record);

        if let Some(Action::StopEarly) = observer.observe(&Event { record: &record }) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root,
                iters: iter,
                trace,
            });
        }

        if error < config.tolerance {
            return Ok(Solution {
                status: Status::Converged,
                root,
                iters: iter,
                trace,
            });
        }

        bracket.narrow(midpoint, f_a, f_midpoint);
    }

    Ok(Solution {
        status: Status::MaxIters,
        root,
        iters: config.max_iters,
        trace,
    })
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns a [`BracketError`] if the initial interval is invalid.
pub fn solve_unobserved<F>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, BracketError>
where
    F: Function,
{
    solve(f, bracket, config, ())
}
