use thiserror::Error;

/// An enum that indicates what went wrong while computing the statistics
/// of a [Distribution](crate::distribution::Distribution).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    /// A NaN (Not a Number) or an infinity was found in the input.
    #[error("A NaN (Not a Number) or an infinity was found in the input. ")]
    NanErr,
    /// A point of the distribution has a negative weight. Weights are probabilities,
    /// so they must be `0.0 <= weight`.
    #[error("The point at index {index} has a negative weight ({weight}). Weights must be non-negative. ")]
    NegativeWeight { index: usize, weight: f64 },
    /// There were not enough samples to do the operation.
    #[error("There were not enough samples to do the operation. ")]
    NotEnoughSamples,
    /// The variance needs the central moment of order 2, but less moments were given.
    #[error("At least the first 2 central moments are needed to compute the variance. ")]
    NotEnoughMoments,
    /// The variance was negative, so the standard deviation does not exist.
    /// Only happens with invalid (negative) weights.
    #[error("The variance is negative ({0}), the standard deviation is undefined. ")]
    NegativeVariance(f64),
    /// The requested moment order is too small to compute every statistic.
    #[error("Moments up to order {0} are not enough. At least order 4 is needed for the kurtosis. ")]
    InvalidOrder(usize),
    /// The display mode could not be parsed (expected `pmf` or `cdf`).
    #[error("Unknown display mode `{0}`. Expected `pmf` or `cdf`. ")]
    UnknownDisplayMode(String),
}
