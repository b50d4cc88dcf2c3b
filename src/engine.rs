//! # Statistics engine
//!
//! Pure functions that compute the descriptive statistics of a
//! [Distribution]. None of them keeps any state between calls.
//!
//! The individual functions (`compute_*`) do not validate their input: with
//! invalid weights they just return whatever the formulas yield. If you want
//! everything at once (and validated), use [compute_statistics].
//!

use tracing::{debug, warn};

use crate::{
    configuration::statistics::{
        DEFAULT_CUMULATIVE_THRESHOLD, DEFAULT_MAX_ORDER, MINIMUM_MAX_ORDER,
        NORMALIZATION_TOLERANCE,
    },
    distribution::{Distribution, DistributionPoint},
    errors::StatError,
};

/// Selects the kind of [moment](https://en.wikipedia.org/wiki/Moment_(mathematics))
/// computed by [compute_moments].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Moments {
    /// Moments about zero: `E[X^k]`. Also called initial moments.
    #[default]
    Raw,
    /// Moments about the mean: `E[(X - mean)^k]`.
    Central,
    /// Central moments divided by `std_dev^k`.
    Standardized,
}

/// Every statistic of a [Distribution] computed by [compute_statistics].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsResult {
    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value).
    pub mean: f64,
    /// Moments about zero. `initial_moments[0]` is the moment of order 1.
    pub initial_moments: Vec<f64>,
    /// Moments about the mean. `central_moments[0]` is the moment of order 1.
    pub central_moments: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
    /// [None] if the variance is `0.0`.
    pub skewness: Option<f64>,
    /// The [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
    /// (`kurtosis - 3`). [None] if the variance is `0.0`.
    pub excess_kurtosis: Option<f64>,
    /// The outcome with the greatest weight.
    pub mode: f64,
    /// The greatest weight (the probability of [StatisticsResult::mode]).
    pub max_weight: f64,
    /// The median of the outcomes (not weighted).
    pub median: f64,
    /// The threshold `x0` used for [StatisticsResult::cumulative_probability].
    pub threshold: f64,
    /// `P(X <= threshold)`
    pub cumulative_probability: f64,
}

/// Computes the [expected value](https://en.wikipedia.org/wiki/Expected_value):
/// `sumatory[ value_i * weight_i ]`.
///
/// Returns `0.0` for an empty distribution.
#[must_use]
pub fn compute_mean(distribution: &Distribution) -> f64 {
    let mut mean: f64 = 0.0;
    for point in distribution {
        mean += point.value * point.weight;
    }

    return mean;
}

/// Computes the raw moments `sumatory[ value_i^j * weight_i ]` for every
/// order `j` in `1..=max_order`.
///
/// The returned vector has `max_order` elements and `ret[0]` is the
/// moment of order 1. It is filled with `0.0` for an empty distribution.
#[must_use]
pub fn compute_initial_moments(distribution: &Distribution, max_order: usize) -> Vec<f64> {
    return accumulate_powers(distribution, 0.0, max_order);
}

/// Computes the central moments `sumatory[ (value_i - mean)^j * weight_i ]`
/// for every order `j` in `1..=max_order`.
///
/// Same layout as [compute_initial_moments]. The moment of order 1 (`ret[0]`)
/// is `~0.0` for a normalized distribution and the one of order 2 (`ret[1]`)
/// is the variance.
#[must_use]
pub fn compute_central_moments(distribution: &Distribution, mean: f64, max_order: usize) -> Vec<f64> {
    return accumulate_powers(distribution, mean, max_order);
}

/// Computes the moments of order `1..=max_order` of the given kind.
///
/// For [Moments::Standardized], a distribution with `0.0` variance returns
/// NaNs (`0/0`), like the standardized moments of a
/// [degenerate distribution](https://en.wikipedia.org/wiki/Degenerate_distribution).
#[must_use]
pub fn compute_moments(distribution: &Distribution, max_order: usize, mode: Moments) -> Vec<f64> {
    return match mode {
        Moments::Raw => compute_initial_moments(distribution, max_order),
        Moments::Central => {
            let mean: f64 = compute_mean(distribution);
            compute_central_moments(distribution, mean, max_order)
        }
        Moments::Standardized => {
            let mean: f64 = compute_mean(distribution);
            let central: Vec<f64> = compute_central_moments(distribution, mean, max_order.max(2));
            let std_dev: f64 = central[1].sqrt();

            let mut std_power: f64 = 1.0;
            central
                .iter()
                .take(max_order)
                .map(|&m| {
                    std_power *= std_dev;
                    m / std_power
                })
                .collect::<Vec<f64>>()
        }
    };
}

/// `ret[j] = sumatory[ (value_i - center)^(j + 1) * weight_i ]`
///
/// The powers are accumulated by repeated multiplication instead of calling
/// `powi` for every order.
fn accumulate_powers(distribution: &Distribution, center: f64, max_order: usize) -> Vec<f64> {
    let mut moments: Vec<f64> = vec![0.0; max_order];

    for point in distribution {
        let diff: f64 = point.value - center;
        let mut power: f64 = 1.0;
        for moment in &mut moments {
            power *= diff;
            *moment += power * point.weight;
        }
    }

    return moments;
}

/// Returns `(variance, std_dev)` given the central moments (as returned by
/// [compute_central_moments]).
///
///  - [StatError::NotEnoughMoments] if there is no moment of order 2.
///  - [StatError::NegativeVariance] if the variance is negative (only possible
///     with negative weights).
pub fn compute_variance_and_std_dev(central_moments: &[f64]) -> Result<(f64, f64), StatError> {
    let variance: f64 = *central_moments.get(1).ok_or(StatError::NotEnoughMoments)?;

    if variance < 0.0 {
        return Err(StatError::NegativeVariance(variance));
    }

    return Ok((variance, variance.sqrt()));
}

/// Computes the [skewness](https://en.wikipedia.org/wiki/Skewness):
/// `central_moments[order 3] / std_dev^3`.
///
/// Returns [None] if `std_dev` is `0.0` (the skewness is undefined) or if
/// `central_moments` does not contain the moment of order 3.
#[must_use]
pub fn compute_skewness(central_moments: &[f64], std_dev: f64) -> Option<f64> {
    if std_dev == 0.0 {
        return None;
    }

    let third: f64 = *central_moments.get(2)?;
    return Some(third / std_dev.powi(3));
}

/// Computes the [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
/// directly from the distribution:
///
/// ```text
/// Ex_k = sumatory[ weight_i * (value_i - mean)^4 ] / std_dev^4 - 3
/// ```
///
/// The result is the same as `central_moments[order 4] / std_dev^4 - 3`.
/// Returns [None] if `std_dev` is `0.0`.
#[must_use]
pub fn compute_excess_kurtosis(distribution: &Distribution, mean: f64, std_dev: f64) -> Option<f64> {
    if std_dev == 0.0 {
        return None;
    }

    let minus_mean: f64 = -mean;
    let mut fourth: f64 = 0.0;
    for point in distribution {
        let d: f64 = point.value + minus_mean;
        // same multiplication order as `accumulate_powers`
        fourth += d * d * d * d * point.weight;
    }

    return Some(fourth / std_dev.powi(4) - 3.0);
}

/// Computes `P(X <= threshold)`: the sum of the weights of every point with
/// `value <= threshold`.
#[must_use]
pub fn compute_cumulative_probability(distribution: &Distribution, threshold: f64) -> f64 {
    let mut cumulative: f64 = 0.0;
    for point in distribution {
        if point.value <= threshold {
            cumulative += point.weight;
        }
    }

    return cumulative;
}

/// Returns the [mode](https://en.wikipedia.org/wiki/Mode_(statistics)): the
/// outcome with the greatest weight.
///
/// If several points share the greatest weight, the first one (in insertion
/// order) is returned. Returns [None] if the distribution is empty.
#[must_use]
pub fn compute_mode(distribution: &Distribution) -> Option<f64> {
    return first_maximum(distribution).map(|p| p.value);
}

/// Returns the greatest weight of the distribution (the probability of the
/// [mode](compute_mode)). Returns [None] if the distribution is empty.
#[must_use]
pub fn compute_max_weight(distribution: &Distribution) -> Option<f64> {
    return first_maximum(distribution).map(|p| p.weight);
}

fn first_maximum(distribution: &Distribution) -> Option<&DistributionPoint> {
    let mut iter: std::slice::Iter<'_, DistributionPoint> = distribution.iter();
    let mut max: &DistributionPoint = iter.next()?;

    for point in iter {
        // strict: ties keep the first one
        if max.weight < point.weight {
            max = point;
        }
    }

    return Some(max);
}

/// Returns the [median](https://en.wikipedia.org/wiki/Median) of `values`.
///
/// The values do not need to be sorted (a sorted copy is used). If there is
/// an even number of values, the mean of the 2 central ones is returned.
///
/// Returns [StatError::NotEnoughSamples] if `values` is empty.
pub fn compute_median(values: &[f64]) -> Result<f64, StatError> {
    let n: usize = values.len();
    if n == 0 {
        return Err(StatError::NotEnoughSamples);
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let median: f64 = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) * 0.5
    } else {
        sorted[n / 2]
    };

    return Ok(median);
}

/// Computes every statistic of `distribution` and returns them in a
/// [StatisticsResult].
///
/// ## Inputs:
///
/// 1. `distribution`: the points. It is validated with [Distribution::validate].
/// 2. `max_order`: (optional) the moments are computed up to this order.
///      - The default is [DEFAULT_MAX_ORDER] (`4`).
///      - Must be at least [MINIMUM_MAX_ORDER], since the kurtosis needs
///         the moment of order 4.
/// 3. `threshold`: (optional) the `x0` in `P(X <= x0)`.
///      - The default is [DEFAULT_CUMULATIVE_THRESHOLD] (`-1.0`).
///
/// ## Results
///
///  - Any error of [Distribution::validate].
///  - [StatError::InvalidOrder] if `max_order < 4`.
///  - [StatError::NotEnoughSamples] if the distribution is empty.
///
/// If the distribution has `0.0` variance, the skewness and kurtosis are [None].
/// If the weights do not add up to `1.0` a warning is logged, but the result
/// is still computed with the given weights.
///
#[bon::builder]
pub fn compute_statistics(
    distribution: &Distribution,
    #[builder(default = DEFAULT_MAX_ORDER)] max_order: usize,
    #[builder(default = DEFAULT_CUMULATIVE_THRESHOLD)] threshold: f64,
) -> Result<StatisticsResult, StatError> {
    distribution.validate()?;

    if max_order < MINIMUM_MAX_ORDER {
        return Err(StatError::InvalidOrder(max_order));
    }

    if distribution.is_empty() {
        return Err(StatError::NotEnoughSamples);
    }

    if !distribution.is_normalized(NORMALIZATION_TOLERANCE) {
        warn!(
            total_weight = distribution.total_weight(),
            "the weights of the distribution do not add up to 1"
        );
    }

    let mean: f64 = compute_mean(distribution);
    let initial_moments: Vec<f64> = compute_initial_moments(distribution, max_order);
    let central_moments: Vec<f64> = compute_central_moments(distribution, mean, max_order);

    let (variance, std_dev) = compute_variance_and_std_dev(&central_moments)?;
    let skewness: Option<f64> = compute_skewness(&central_moments, std_dev);
    let excess_kurtosis: Option<f64> = compute_excess_kurtosis(distribution, mean, std_dev);

    if skewness.is_none() {
        debug!("variance is 0, skewness and kurtosis are undefined");
    }

    let cumulative_probability: f64 = compute_cumulative_probability(distribution, threshold);

    // the distribution is not empty, so there is a mode
    let mode: f64 = compute_mode(distribution).ok_or(StatError::NotEnoughSamples)?;
    let max_weight: f64 = compute_max_weight(distribution).ok_or(StatError::NotEnoughSamples)?;

    // Fresh x series for every call
    let median: f64 = compute_median(&distribution.values())?;

    debug!(
        points = distribution.len(),
        mean,
        std_dev,
        median,
        "computed distribution statistics"
    );

    return Ok(StatisticsResult {
        mean,
        initial_moments,
        central_moments,
        variance,
        std_dev,
        skewness,
        excess_kurtosis,
        mode,
        max_weight,
        median,
        threshold,
        cumulative_probability,
    });
}
