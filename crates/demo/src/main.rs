//! Finds both roots of f(x) = 0.5·eˣ − 5x + 2 with the bisection solver.
//!
//! The function crosses zero twice, once near 0.5783 and once near 3.4018.
//! This program searches the two bracketing intervals, prints an iteration
//! table for each run, and finishes with a summary of both roots.
//!
//! # Usage
//!
//! ```text
//! cargo run -p dichotomy-demo
//! cargo run -p dichotomy-demo --features plot
//! ```
//!
//! With the `plot` feature, each run additionally opens two interactive
//! windows: the function over the widened bracket with the root marked,
//! and a semilog chart of the interval width per iteration.

use dichotomy_observers::TraceTable;
use dichotomy_solvers::bisection::{self, Config, Solution, Status};

const BANNER_WIDTH: usize = 60;
const TABLE_ROWS: usize = 10;

/// The target function: f(x) = 0.5·eˣ − 5x + 2.
fn f(x: f64) -> f64 {
    0.5 * x.exp() - 5.0 * x + 2.0
}

fn main() {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("BISECTION METHOD - ROOT FINDING");
    println!("Function: f(x) = 0.5*e^x - 5x + 2");
    println!("{rule}");

    let config = Config::default();
    let first = find_root("Root 1", [0.0, 1.0], &config);

    println!("\n{rule}");
    let second = find_root("Root 2", [3.0, 4.0], &config);

    println!("\n{rule}");
    println!("SUMMARY");
    println!("{rule}");
    print_summary("Root 1", first.as_ref());
    print_summary("Root 2", second.as_ref());
    println!("Tolerance: {}", config.tolerance);
    println!("{rule}");
}

/// Runs one bracketed search and reports it to the console.
///
/// An interval that does not bracket a sign change prints the error and
/// returns `None`; the other search is unaffected.
fn find_root(label: &str, bracket: [f64; 2], config: &Config) -> Option<Solution> {
    let [a, b] = bracket;
    println!("\nFinding {label} (initial bracket: [{a}, {b}])...");

    let solution = match bisection::solve_unobserved(&f, bracket, config) {
        Ok(solution) => solution,
        Err(error) => {
            eprintln!("Error: {error}");
            return None;
        }
    };

    match solution.status {
        Status::Converged => println!("Converged in {} iterations!", solution.iters),
        Status::MaxIters => println!("No convergence after {} iterations.", solution.iters),
        Status::StoppedByObserver => println!("Stopped early after {} iterations.", solution.iters),
    }

    println!("\n{label} = {:.10}", solution.root);
    println!("f(root) = {:.2e}", f(solution.root));
    println!("\nIteration table (first {TABLE_ROWS} rows):");
    print!("{}", TraceTable::new(&solution.trace).limit(TABLE_ROWS));

    #[cfg(feature = "plot")]
    if let Err(error) = plot::show(label, &solution, bracket) {
        eprintln!("Plotting failed: {error}");
    }

    Some(solution)
}

fn print_summary(label: &str, solution: Option<&Solution>) {
    match solution {
        Some(solution) => println!("{label}: {:.10}", solution.root),
        None => println!("{label}: not found"),
    }
}

#[cfg(feature = "plot")]
mod plot {
    use std::error::Error;

    use dichotomy_observers::{PlotObserver, ShowConfig};
    use dichotomy_solvers::bisection::Solution;

    use super::f;

    const CURVE_SAMPLES: u32 = 1000;

    /// Shows the function chart and then the convergence chart for one
    /// run. Each window blocks until closed.
    pub fn show(label: &str, solution: &Solution, bracket: [f64; 2]) -> Result<(), Box<dyn Error>> {
        let [a, b] = bracket;
        let root = solution.root;

        // The function over the widened bracket, a zero line for
        // reference, and the root as a labeled marker.
        let mut curve = PlotObserver::<2>::new(["f(x) = 0.5*e^x - 5x + 2", "zero"]);
        let (lo, hi) = (a - 1.0, b + 1.0);
        for i in 0..=CURVE_SAMPLES {
            let x = lo + (hi - lo) * f64::from(i) / f64::from(CURVE_SAMPLES);
            curve.record(x, [Some(f(x)), Some(0.0)]);
        }
        curve.mark(root, f(root), format!("{label} ≈ {root:.6}"));
        curve.show(
            ShowConfig::new()
                .title(format!("Bisection root finding — {label}"))
                .legend(),
        )?;

        // Interval width per iteration on a log scale.
        let mut convergence = PlotObserver::<1>::new(["error"]);
        #[allow(clippy::cast_precision_loss)]
        for record in &solution.trace {
            convergence.record(record.iter as f64, [Some(record.error)]);
        }
        convergence.show(
            ShowConfig::new()
                .title(format!("Bisection convergence — {label}"))
                .legend()
                .log_y(),
        )?;

        Ok(())
    }
}
