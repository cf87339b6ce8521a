//! Consumers of the bisection solver's iteration records.
//!
//! The solver reports what it did; this crate turns those records into
//! something a person can read:
//!
//! - [`TraceTable`] — fixed-width console rendering of a solve's trace,
//!   with an optional row cap
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing solver behavior via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.

mod table;

#[cfg(feature = "plot")]
mod plot;

pub use table::TraceTable;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
