//! This file contains the deafult values and other value choices used trough the library.
//!
//! All of them can be overriden when calling [crate::engine::compute_statistics]
//! or [crate::report::compute_report], or when building the axes of a chart.

/// Default values for the statistics bundle.
pub mod statistics {

    /// The moments are computed up to this order (both initial and central).
    ///
    /// `4` is the minimum that allows to compute the excess kurtosis.
    pub const DEFAULT_MAX_ORDER: usize = 4;

    /// The minimum order accepted by [crate::engine::compute_statistics].
    /// The variance needs order 2, the skewness 3 and the kurtosis 4.
    pub const MINIMUM_MAX_ORDER: usize = 4;

    /// The deafult threshold `x0` used to compute `P(X <= x0)`.
    pub const DEFAULT_CUMULATIVE_THRESHOLD: f64 = -1.0;

    /// If the total weight of a distribution differs from `1.0` by more than
    /// this value, a warning is emitted. The statistics are still computed.
    pub static NORMALIZATION_TOLERANCE: f64 = 1.0e-9;
}

/// Axis ranges used to chart the series of a distribution.
///
/// The ranges are fixed (they do not adapt to the data). They were chosen
/// for distributions with outcomes in `[-4, 5]`.
pub mod plot {

    /// Range of the x axis for both PMF and CDF charts.
    pub const X_RANGE: (f64, f64) = (-4.0, 5.0);

    /// Range of the y axis of a PMF chart.
    pub const PMF_Y_RANGE: (f64, f64) = (0.0, 0.5);

    /// Range of the y axis of a CDF chart.
    ///
    /// A bit over `1.0` so the last step of the CDF is visible.
    pub const CDF_Y_RANGE: (f64, f64) = (0.0, 1.2);
}
