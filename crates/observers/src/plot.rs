//! Plotting observer for visualizing solver behavior.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use dichotomy_core::Observer;
use dichotomy_solvers::bisection;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Bisection").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend,
    /// linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to use [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the
/// event entirely; return `None` in a trace slot to skip that trace for
/// the event.
///
/// The bisection solver's [`Event`][bisection::Event] implements
/// `Plottable<1>` with the iteration index on the x-axis and the recorded
/// interval width as the single trace, so a `PlotObserver<1>` passed
/// straight to `solve` captures convergence live.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording
    /// entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving
    /// others unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for bisection::Event<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.record.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.record.error)]
    }
}

/// An observer that collects trace data during solving and displays it
/// via egui.
///
/// The const generic `N` is the number of line traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path** — Pass `&mut PlotObserver` as the solver observer for
///   an event type implementing [`Plottable<N>`][Plottable].
/// - **Manual path** — Call [`record`][PlotObserver::record] with whatever
///   data is at hand, e.g. to pre-load a background curve or to replay a
///   finished solve's trace.
///
/// Individual points of interest (a root, say) become labeled markers via
/// [`mark`][PlotObserver::mark]. Call [`show`][PlotObserver::show] with a
/// [`ShowConfig`] to render the result.
///
/// # Example — background curve plus a marker
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["f(x)"]);
/// for i in 0..=1000 {
///     let x = lo + (hi - lo) * f64::from(i) / 1000.0;
///     obs.record(x, [Some(f(x))]);
/// }
/// obs.mark(root, f(root), format!("Root ≈ {root:.6}"));
/// obs.show(ShowConfig::new().title("f and its root").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
    markers: Vec<Marker>,
}

struct Marker {
    label: String,
    at: [f64; 2],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
            markers: Vec::new(),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Adds a labeled point marker drawn on top of the line traces.
    pub fn mark(&mut self, x: f64, y: f64, label: impl Into<String>) {
        self.markers.push(Marker {
            label: label.into(),
            at: [x, y],
        });
    }

    /// Opens a blocking egui window displaying all collected traces and
    /// markers.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    markers: self.markers,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an
/// observer by value, so [`PlotObserver::show`] can be called after the
/// solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces and markers.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    markers: Vec<Marker>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }

                for marker in &self.markers {
                    let at = if log_y {
                        if marker.at[1] <= 0.0 {
                            continue;
                        }
                        [marker.at[0], marker.at[1].log10()]
                    } else {
                        marker.at
                    };
                    plot_ui.points(Points::new(vec![at]).name(&marker.label).radius(4.0));
                }
            });
        });
    }
}
