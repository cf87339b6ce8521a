use std::fmt::{self, Display, Formatter};

use dichotomy_solvers::bisection::Trace;

/// Fixed-width console rendering of a [`Trace`].
///
/// Positions print with 10 decimal places; function values and widths
/// print with two significant figures in scientific notation. A row cap
/// set with [`limit`][TraceTable::limit] truncates long traces and notes
/// how many rows were left out.
///
/// Rendering goes through `Display`, so the table can be built into a
/// `String` or printed directly:
///
/// ```ignore
/// print!("{}", TraceTable::new(&solution.trace).limit(10));
/// ```
pub struct TraceTable<'a> {
    trace: &'a Trace,
    limit: Option<usize>,
}

impl<'a> TraceTable<'a> {
    /// Creates a table over the full trace.
    #[must_use]
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace, limit: None }
    }

    /// Caps the output at the first `rows` rows.
    #[must_use]
    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }
}

impl Display for TraceTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:>13}  {:>13}  {:>13}  {:>9}  {:>9}  {:>9}  {:>9}",
            "iter", "a", "b", "midpoint", "f(a)", "f(b)", "f(c)", "error",
        )?;

        let shown = self.limit.unwrap_or(usize::MAX).min(self.trace.len());
        for record in self.trace.iter().take(shown) {
            writeln!(
                f,
                "{:>4}  {:>13.10}  {:>13.10}  {:>13.10}  {:>9.2e}  {:>9.2e}  {:>9.2e}  {:>9.2e}",
                record.iter,
                record.a,
                record.b,
                record.midpoint,
                record.f_a,
                record.f_b,
                record.f_midpoint,
                record.error,
            )?;
        }

        let hidden = self.trace.len() - shown;
        if hidden > 0 {
            writeln!(f, "      ... {hidden} more rows")?;
        }

        Ok(())
    }
}
