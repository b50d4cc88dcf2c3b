#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `DiscreteStatistics` should have a snake case name convert the identifier to snake case: `discrete_statistics`"
// The rest of the names will follow the snake_case convention.

//! # Discrete Statistics
//!
//!
//! This library computes the descriptive statistics of a small
//! [discrete probability distribution](https://en.wikipedia.org/wiki/Probability_distribution#Discrete_probability_distribution)
//! given as `(value, probability)` pairs:
//!
//! - [x] [Mean](engine::compute_mean) ([Wiki](https://en.wikipedia.org/wiki/Expected_value))
//! - [x] [Initial](engine::compute_initial_moments) and [central](engine::compute_central_moments) moments ([Wiki](https://en.wikipedia.org/wiki/Moment_(mathematics)))
//! - [x] [Variance and standard deviation](engine::compute_variance_and_std_dev) ([Wiki](https://en.wikipedia.org/wiki/Variance))
//! - [x] [Skewness](engine::compute_skewness) ([Wiki](https://en.wikipedia.org/wiki/Skewness))
//! - [x] [Excess kurtosis](engine::compute_excess_kurtosis) ([Wiki](https://en.wikipedia.org/wiki/Kurtosis))
//! - [x] [Mode](engine::compute_mode) ([Wiki](https://en.wikipedia.org/wiki/Mode_(statistics)))
//! - [x] [Median](engine::compute_median) ([Wiki](https://en.wikipedia.org/wiki/Median))
//! - [x] [Cumulative probability](engine::compute_cumulative_probability) ([Wiki](https://en.wikipedia.org/wiki/Cumulative_distribution_function))
//! - [x] [Quantiles](distribution::Distribution::quantile) and [sampling](distribution::Distribution::sample_multiple)
//!
//! It also builds the [series](series::build_series) needed to chart the
//! PMF or the CDF of the distribution.
//!
//! ## Usage
//!
//! Create a [Distribution](distribution::Distribution) and call
//! [compute_statistics](engine::compute_statistics) (or
//! [compute_report](report::compute_report) if you also want the series
//! to chart):
//!
//! ```
//! use DiscreteStatistics::{distribution::Distribution, engine::compute_statistics};
//!
//! let coin: Distribution = Distribution::from_pairs(&[(0.0, 0.5), (1.0, 0.5)]);
//! let stats = compute_statistics().distribution(&coin).threshold(0.0).call().unwrap();
//!
//! assert_eq!(stats.mean, 0.5);
//! assert_eq!(stats.cumulative_probability, 0.5);
//! ```
//!
//! Every function is pure: the distribution is passed explicitly and nothing
//! is stored between calls.
//!
//! ***
//!

pub mod configuration;
pub mod distribution;
pub mod engine;
pub mod errors;
pub mod report;
pub mod series;
