use approx::assert_relative_eq;

use super::{Action, BracketError, Config, Event, Status, solve, solve_unobserved};

/// The demo function: f(x) = 0.5·eˣ − 5x + 2.
///
/// It has two simple roots, near 0.5783 and near 3.4018.
fn f(x: f64) -> f64 {
    0.5 * x.exp() - 5.0 * x + 2.0
}

#[test]
fn finds_first_root() {
    let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 30);
    assert_eq!(solution.trace.len(), solution.iters);
    assert_relative_eq!(solution.root, 0.578_304_290_771_484_4, epsilon = 1e-12);
    assert!(f(solution.root).abs() < 1e-4);
}

#[test]
fn finds_second_root() {
    let solution = solve_unobserved(&f, [3.0, 4.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 3.401_798_248_291_015_6, epsilon = 1e-12);
    assert!(f(solution.root).abs() < 1e-4);
}

#[test]
fn records_pre_narrowing_widths() {
    let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should converge");

    // The first record reports the initial interval untouched.
    let first = solution.trace.get(0).expect("non-empty trace");
    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.a, 0.0);
    assert_relative_eq!(first.b, 1.0);
    assert_relative_eq!(first.midpoint, 0.5);
    assert_relative_eq!(first.error, 1.0);
    assert_relative_eq!(first.f_a, f(0.0));
    assert_relative_eq!(first.f_b, f(1.0));
    assert_relative_eq!(first.f_midpoint, f(0.5));
}

#[test]
fn widths_halve_each_iteration() {
    let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should converge");

    let errors: Vec<f64> = solution.trace.errors().collect();
    for pair in errors.windows(2) {
        assert_relative_eq!(pair[1], 0.5 * pair[0], epsilon = 1e-15);
    }
}

#[test]
fn widths_are_non_increasing() {
    let solution = solve_unobserved(&f, [3.0, 4.0], &Config::default()).expect("should converge");

    let errors: Vec<f64> = solution.trace.errors().collect();
    assert!(errors.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn identical_calls_yield_identical_solutions() {
    let config = Config::default();
    let first = solve_unobserved(&f, [0.0, 1.0], &config).expect("should converge");
    let second = solve_unobserved(&f, [0.0, 1.0], &config).expect("should converge");

    assert_eq!(first, second);
}

#[test]
fn rejects_bracket_without_sign_change() {
    // f is positive at both 0 and 0.1.
    let result = solve_unobserved(&f, [0.0, 0.1], &Config::default());

    assert!(matches!(result, Err(BracketError::NoSignChange { .. })));
}

#[test]
fn rejects_degenerate_brackets() {
    let result = solve_unobserved(&f, [f64::NAN, 1.0], &Config::default());
    assert!(matches!(result, Err(BracketError::NonFinite { .. })));

    let result = solve_unobserved(&f, [1.0, 1.0], &Config::default());
    assert!(matches!(result, Err(BracketError::ZeroWidth { .. })));
}

#[test]
fn exhausted_budget_returns_last_midpoint() {
    let config = Config {
        tolerance: 1e-12,
        max_iters: 5,
    };

    let solution = solve_unobserved(&f, [0.0, 1.0], &config).expect("should run out of budget");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.trace.len(), 5);

    let last = solution.trace.last().expect("five records");
    assert_relative_eq!(solution.root, last.midpoint);
    assert_relative_eq!(solution.root, 0.593_75);
}

#[test]
fn zero_budget_returns_initial_midpoint() {
    let config = Config {
        tolerance: 1e-12,
        max_iters: 0,
    };

    let solution = solve_unobserved(&f, [0.0, 1.0], &config).expect("valid bracket");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert!(solution.trace.is_empty());
    assert_relative_eq!(solution.root, 0.5);
}

#[test]
fn converges_immediately_on_tiny_bracket() {
    // The initial width is already below the tolerance, so the first
    // iteration records once and stops.
    let g = |x: f64| x;
    let config = Config::default();

    let solution = solve_unobserved(&g, [-1e-7, 2e-7], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.trace.len(), 1);
    assert_relative_eq!(solution.root, 5e-8, epsilon = 1e-20);
}

#[test]
fn observer_sees_every_record() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push((event.record.iter, event.record.error));
        None
    };

    let solution = solve(&f, [0.0, 1.0], &Config::default(), observer).expect("should converge");

    let recorded: Vec<(usize, f64)> = solution
        .trace
        .iter()
        .map(|record| (record.iter, record.error))
        .collect();
    assert_eq!(seen, recorded);
}

#[test]
fn observer_can_stop_iteration() {
    let observer = |event: &Event<'_>| {
        if event.record.iter >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&f, [0.0, 1.0], &Config::default(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.trace.len(), 3);
    assert_relative_eq!(
        solution.root,
        solution.trace.last().expect("three records").midpoint
    );
}
