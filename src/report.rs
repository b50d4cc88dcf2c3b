//! # Report
//!
//! Everything a presentation layer needs to show a [Distribution] after the
//! user asks for it: the statistics, and (if a display mode was selected) the
//! series to chart with its axes.
//!
//! A [Report] is computed from scratch for every request, no state is kept
//! between calls.
//!

use core::fmt;

use crate::{
    configuration::statistics::{DEFAULT_CUMULATIVE_THRESHOLD, DEFAULT_MAX_ORDER},
    distribution::Distribution,
    engine::{StatisticsResult, compute_statistics},
    errors::StatError,
    series::{DisplayMode, PlotAxes, Series, build_series},
};

/// The result of [compute_report].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub statistics: StatisticsResult,
    /// [None] if no display mode was selected.
    pub series: Option<Series>,
    /// [None] if no display mode was selected.
    pub axes: Option<PlotAxes>,
}

/// Computes the statistics of `distribution` and the series for `mode`.
///
/// ## Inputs:
///
/// 1. `distribution`: the points.
/// 2. `mode`: (optional) what should be charted. If it is not set, no series
///     is built (this is not an error).
/// 3. `max_order`: (optional) see [compute_statistics]. Default `4`.
/// 4. `threshold`: (optional) see [compute_statistics]. Default `-1.0`.
///
/// ## Results
///
/// Same errors as [compute_statistics].
///
#[bon::builder]
pub fn compute_report(
    distribution: &Distribution,
    mode: Option<DisplayMode>,
    #[builder(default = DEFAULT_MAX_ORDER)] max_order: usize,
    #[builder(default = DEFAULT_CUMULATIVE_THRESHOLD)] threshold: f64,
) -> Result<Report, StatError> {
    let statistics: StatisticsResult = compute_statistics()
        .distribution(distribution)
        .max_order(max_order)
        .threshold(threshold)
        .call()?;

    let series: Option<Series> = mode.map(|m| build_series(distribution, m));
    let axes: Option<PlotAxes> = mode.map(PlotAxes::for_mode);

    if mode.is_none() {
        tracing::debug!("no display mode selected, skipping the series");
    }

    return Ok(Report {
        statistics,
        series,
        axes,
    });
}

/// Writes `Some(x)` as `x` and [None] as `undefined`.
fn write_optional(f: &mut fmt::Formatter<'_>, value: Option<f64>) -> fmt::Result {
    return match value {
        Some(v) => write!(f, "{v}"),
        None => write!(f, "undefined"),
    };
}

impl fmt::Display for StatisticsResult {
    /// One labeled line for every statistic. The moments are listed one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initial moments:")?;
        for (i, m) in self.initial_moments.iter().enumerate() {
            writeln!(f, "  {}: {m}", i + 1)?;
        }

        writeln!(f, "central moments:")?;
        for (i, m) in self.central_moments.iter().enumerate() {
            writeln!(f, "  {}: {m}", i + 1)?;
        }

        writeln!(f, "mean: {}", self.mean)?;
        writeln!(f, "variance: {}", self.variance)?;
        writeln!(f, "standard deviation: {}", self.std_dev)?;

        write!(f, "skewness: ")?;
        write_optional(f, self.skewness)?;
        writeln!(f)?;

        write!(f, "excess kurtosis: ")?;
        write_optional(f, self.excess_kurtosis)?;
        writeln!(f)?;

        writeln!(f, "mode: {} (probability {})", self.mode, self.max_weight)?;
        writeln!(f, "median: {}", self.median)?;
        write!(
            f,
            "P(X <= {}): {}",
            self.threshold, self.cumulative_probability
        )?;

        return Ok(());
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(series) = &self.series {
            writeln!(f, "series ({} points):", series.len())?;
            for (x, y) in series.pairs() {
                writeln!(f, "  {x}\t{y}")?;
            }
            writeln!(f)?;
        }

        return write!(f, "{}", self.statistics);
    }
}
