//! # Series
//!
//! The x/y points used to chart a [Distribution], either as its
//! [PMF](https://en.wikipedia.org/wiki/Probability_mass_function) or its
//! [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function),
//! and the axis ranges of the chart.
//!

use core::fmt;
use std::str::FromStr;

use crate::{configuration::plot, distribution::Distribution, errors::StatError};

/// What is charted. Both modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Probability mass function: the weight of every outcome.
    #[default]
    Pmf,
    /// Cumulative distribution function: the running sum of the weights.
    Cdf,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            DisplayMode::Pmf => write!(f, "PMF"),
            DisplayMode::Cdf => write!(f, "CDF"),
        };
    }
}

impl FromStr for DisplayMode {
    type Err = StatError;

    /// Accepts `pmf` or `cdf` (case insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("pmf") {
            return Ok(DisplayMode::Pmf);
        }
        if trimmed.eq_ignore_ascii_case("cdf") {
            return Ok(DisplayMode::Cdf);
        }

        return Err(StatError::UnknownDisplayMode(s.to_string()));
    }
}

/// The points of a chart. `x[i]` is paired with `y[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    /// The number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        return self.x.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.x.is_empty();
    }

    /// Iterates over the `(x, y)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        return self.x.iter().copied().zip(self.y.iter().copied());
    }
}

/// Builds the series of `distribution` for the given `mode`.
///
///  - [DisplayMode::Pmf]: `x` are the values and `y` the weights.
///  - [DisplayMode::Cdf]: `x` are the values and `y[k]` is the sum of
///     the weights `0..=k`.
///
/// The points keep the insertion order of the distribution (they are
/// **not** sorted). The series is built from scratch on every call.
#[must_use]
pub fn build_series(distribution: &Distribution, mode: DisplayMode) -> Series {
    let x: Vec<f64> = distribution.values();

    let y: Vec<f64> = match mode {
        DisplayMode::Pmf => distribution.weights(),
        DisplayMode::Cdf => {
            let mut cumulative: f64 = 0.0;
            distribution
                .iter()
                .map(|p| {
                    cumulative += p.weight;
                    cumulative
                })
                .collect::<Vec<f64>>()
        }
    };

    return Series { x, y };
}

/// A closed interval `[min, max]` of an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> AxisRange {
        return AxisRange { min, max };
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        return self.min <= x && x <= self.max;
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        return AxisRange { min, max };
    }
}

/// The ranges of both axes of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotAxes {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotAxes {
    /// The default axes for the given `mode` (see [crate::configuration::plot]).
    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> PlotAxes {
        let y: (f64, f64) = match mode {
            DisplayMode::Pmf => plot::PMF_Y_RANGE,
            DisplayMode::Cdf => plot::CDF_Y_RANGE,
        };

        return PlotAxes {
            x: AxisRange::from(plot::X_RANGE),
            y: AxisRange::from(y),
        };
    }
}
