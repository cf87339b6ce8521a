//! Numerical solvers for the dichotomy workspace.
//!
//! A single solver lives here today: [`bisection`], which finds a root of a
//! continuous function on a sign-changing interval and records every
//! iteration it takes.

pub mod bisection;
