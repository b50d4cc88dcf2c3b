//! # Discrete distribution
//!
//! A [Distribution] is a finite, ordered list of outcomes (`value`) with their
//! probability mass (`weight`). For example, the distribution of a fair coin
//! where heads is `1.0` and tails is `0.0` would be `[(0.0, 0.5), (1.0, 0.5)]`.
//!
//! The insertion order of the points is preserved. It does not change any
//! statistic, but it decides which point wins when 2 points share the maximum
//! weight (see [crate::engine::compute_mode]) and the order of the series
//! returned by [crate::series::build_series].
//!
//! Creating a [Distribution] does **not** validate it. Empty distributions,
//! negative weights or weights that do not add up to `1.0` are all allowed, and
//! the functions in [crate::engine] will just compute whatever the formulas
//! yield. Use [Distribution::validate] to check the input (this is done
//! automatically by [crate::engine::compute_statistics]).
//!

use rand::Rng;

use crate::errors::StatError;

/// A single outcome of a [Distribution] and its probability mass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionPoint {
    /// The outcome.
    pub value: f64,
    /// The probability of the outcome. Should be in `[0.0, 1.0]`.
    pub weight: f64,
}

impl DistributionPoint {
    #[must_use]
    pub const fn new(value: f64, weight: f64) -> DistributionPoint {
        return DistributionPoint { value, weight };
    }
}

impl From<(f64, f64)> for DistributionPoint {
    fn from((value, weight): (f64, f64)) -> Self {
        return DistributionPoint { value, weight };
    }
}

/// An ordered collection of [DistributionPoint].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    points: Vec<DistributionPoint>,
}

impl Distribution {
    /// Creates a new [Distribution] with the given `points` (in that order).
    ///
    /// No validation is performed, see [Distribution::validate].
    #[must_use]
    pub const fn new(points: Vec<DistributionPoint>) -> Distribution {
        return Distribution { points };
    }

    /// Creates a new [Distribution] from `(value, weight)` pairs.
    ///
    /// No validation is performed, see [Distribution::validate].
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Distribution {
        return pairs.iter().copied().collect::<Distribution>();
    }

    /// Gives a reference to the contained points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[DistributionPoint] {
        return &self.points;
    }

    /// The number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        return self.points.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.points.is_empty();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistributionPoint> {
        return self.points.iter();
    }

    /// Returns the outcomes in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        return self.points.iter().map(|p| p.value).collect::<Vec<f64>>();
    }

    /// Returns the weights in insertion order.
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        return self.points.iter().map(|p| p.weight).collect::<Vec<f64>>();
    }

    /// The sum of all the weights. Should be `1.0` for a valid distribution.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        return self.points.iter().map(|p| p.weight).sum::<f64>();
    }

    /// Determines if the weights add up to `1.0` (within `tolerance`).
    #[must_use]
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        return (self.total_weight() - 1.0).abs() <= tolerance;
    }

    /// Checks that the distribution can be safely used to compute statistics:
    ///  - No NaNs nor infinities (`+-inf`), neither in values nor weights.
    ///     Otherwise returns [StatError::NanErr].
    ///  - No negative weights. Otherwise returns [StatError::NegativeWeight]
    ///     for the first offending point.
    ///
    /// Note that an empty distribution or one whose weights do not add up
    /// to `1.0` is still considered valid.
    pub fn validate(&self) -> Result<(), StatError> {
        for (index, point) in self.points.iter().enumerate() {
            if !point.value.is_finite() || !point.weight.is_finite() {
                return Err(StatError::NanErr);
            }

            if point.weight < 0.0 {
                return Err(StatError::NegativeWeight {
                    index,
                    weight: point.weight,
                });
            }
        }

        return Ok(());
    }

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// at `x`: `P(X <= x)`.
    ///
    /// Same as [crate::engine::compute_cumulative_probability].
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        return crate::engine::compute_cumulative_probability(self, x);
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// (the inverse of [Distribution::cdf]).
    ///
    /// Returns the smallest value whose cumulative weight reaches `p` (relative
    /// to [Distribution::total_weight]). `p` is clamped to `[0.0, 1.0]`, so if
    /// `p <= 0.0` the smallest value is returned and if `1.0 <= p` the greatest
    /// one with non-zero weight.
    ///
    /// Returns [None] if the distribution is empty or if the total weight is not
    /// positive (no outcome can happen). **Panicks** if `p` is a NaN.
    #[must_use]
    pub fn quantile(&self, p: f64) -> Option<f64> {
        assert!(
            !p.is_nan(),
            "Tried to evaluate the quantile function with a NaN value. \n"
        );

        let table: Vec<(f64, f64)> = self.cumulative_table();
        return quantile_from_table(&table, p);
    }

    /// Samples the distribution at random.
    ///
    /// Uses [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling).
    /// Returns [None] if the distribution is empty or all the weights are `0.0`.
    ///
    /// The method [Distribution::sample_multiple] is more effitient for
    /// multiple sampling.
    #[must_use]
    pub fn sample(&self) -> Option<f64> {
        return self.sample_multiple(1).first().copied();
    }

    /// Returns `n` random samples of the distribution, using the thread rng.
    ///
    /// Returns an empty vector if the distribution is empty or all the
    /// weights are `0.0`.
    #[must_use]
    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_multiple_with(&mut rng, n);
    }

    /// Same as [Distribution::sample_multiple] but with a user provided `rng`,
    /// wich allows reproducible results with a seeded generator.
    pub fn sample_multiple_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        let table: Vec<(f64, f64)> = self.cumulative_table();
        let total: f64 = table.last().map_or(0.0, |&(_, c)| c);
        if total <= 0.0 {
            return Vec::new();
        }

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            // in (0, 1], so leading points with 0 weight are never chosen
            let u: f64 = 1.0 - rng.random::<f64>();
            // the table is non-empty, so there is always a quantile
            if let Some(x) = quantile_from_table(&table, u) {
                ret.push(x);
            }
        }

        return ret;
    }

    /// Pairs `(value, cumulative weight)` sorted by value.
    fn cumulative_table(&self) -> Vec<(f64, f64)> {
        let mut sorted: Vec<DistributionPoint> = self.points.clone();
        sorted.sort_by(|a, b| a.value.total_cmp(&b.value));

        let mut cumulative: f64 = 0.0;
        return sorted
            .iter()
            .map(|p| {
                cumulative += p.weight;
                (p.value, cumulative)
            })
            .collect::<Vec<(f64, f64)>>();
    }
}

/// `table` must be sorted by value and contain the running sum of weights.
fn quantile_from_table(table: &[(f64, f64)], p: f64) -> Option<f64> {
    let (_, total) = *table.last()?;
    if total <= 0.0 {
        // no outcome has positive probability
        return None;
    }

    let target: f64 = p.clamp(0.0, 1.0) * total;

    if target <= 0.0 {
        return table.first().map(|(x, _)| *x);
    }

    for &(x, cumulative) in table {
        if target <= cumulative {
            return Some(x);
        }
    }

    // Rounding errors may leave `cumulative` slightly below `target`
    return table.last().map(|(x, _)| *x);
}

impl FromIterator<DistributionPoint> for Distribution {
    fn from_iter<I: IntoIterator<Item = DistributionPoint>>(iter: I) -> Self {
        return Distribution {
            points: iter.into_iter().collect::<Vec<DistributionPoint>>(),
        };
    }
}

impl FromIterator<(f64, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        return iter.into_iter().map(DistributionPoint::from).collect::<Distribution>();
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a DistributionPoint;
    type IntoIter = std::slice::Iter<'a, DistributionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        return self.points.iter();
    }
}
