//! Core traits for the dichotomy workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a real-valued function of one real variable
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
