use rand::{SeedableRng, rngs::StdRng};
use DiscreteStatistics::{distribution::*, errors::StatError};

fn reference_distribution() -> Distribution {
    return Distribution::from_pairs(&[
        (-2.0, 0.1),
        (-1.0, 0.12),
        (0.0, 0.2),
        (1.0, 0.25),
        (2.0, 0.18),
        (3.0, 0.1),
        (4.0, 0.05),
    ]);
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let d: Distribution = Distribution::from_pairs(&[(3.0, 0.2), (-1.0, 0.5), (2.0, 0.3)]);
        assert_eq!(d.len(), 3);
        assert_eq!(d.values(), vec![3.0, -1.0, 2.0]);
        assert_eq!(d.weights(), vec![0.2, 0.5, 0.3]);
        assert_eq!(d.points()[1], DistributionPoint::new(-1.0, 0.5));
    }

    #[test]
    fn collects_points_and_pairs() {
        let from_points: Distribution = vec![DistributionPoint::new(1.0, 0.5), DistributionPoint::new(2.0, 0.5)]
            .into_iter()
            .collect();
        let from_pairs: Distribution = [(1.0, 0.5), (2.0, 0.5)].into_iter().collect();
        assert_eq!(from_points, from_pairs);
    }

    #[test]
    fn total_weight() {
        let d: Distribution = reference_distribution();
        assert!(d.is_normalized(1.0e-12));
        assert!((d.total_weight() - 1.0).abs() < 1.0e-12);

        let half: Distribution = Distribution::from_pairs(&[(0.0, 0.25), (1.0, 0.25)]);
        assert!(!half.is_normalized(1.0e-9));
        assert_eq!(half.total_weight(), 0.5);
    }

    #[test]
    fn empty_is_allowed() {
        let d: Distribution = Distribution::new(Vec::new());
        assert!(d.is_empty());
        assert_eq!(d.validate(), Ok(()));
        assert_eq!(d.quantile(0.5), None);
        assert_eq!(d.sample(), None);
        assert!(d.sample_multiple(10).is_empty());
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn valid_distribution() {
        assert_eq!(reference_distribution().validate(), Ok(()));
        // not normalized, but still valid
        assert_eq!(Distribution::from_pairs(&[(0.0, 3.0)]).validate(), Ok(()));
    }

    #[test]
    fn first_negative_weight_is_reported() {
        let d: Distribution = Distribution::from_pairs(&[(0.0, 0.5), (1.0, -0.2), (2.0, -0.3)]);
        assert_eq!(
            d.validate(),
            Err(StatError::NegativeWeight {
                index: 1,
                weight: -0.2
            })
        );
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(Distribution::from_pairs(&[(f64::INFINITY, 0.5)]).validate(), Err(StatError::NanErr));
        assert_eq!(Distribution::from_pairs(&[(0.0, f64::NAN)]).validate(), Err(StatError::NanErr));
    }
}

#[cfg(test)]
mod quantile_tests {
    use super::*;

    #[test]
    fn cdf_matches_cumulative_probability() {
        let d: Distribution = reference_distribution();
        assert_eq!(d.cdf(-1.0), 0.22);
        assert_eq!(d.cdf(-3.0), 0.0);
    }

    #[test]
    fn quantiles() {
        let d: Distribution = reference_distribution();
        assert_eq!(d.quantile(0.0), Some(-2.0));
        assert_eq!(d.quantile(0.05), Some(-2.0));
        assert_eq!(d.quantile(0.5), Some(1.0));
        assert_eq!(d.quantile(0.9), Some(3.0));
        assert_eq!(d.quantile(1.0), Some(4.0));
        // clamped
        assert_eq!(d.quantile(-3.0), Some(-2.0));
        assert_eq!(d.quantile(7.0), Some(4.0));
    }

    #[test]
    fn quantiles_ignore_insertion_order() {
        let d: Distribution = Distribution::from_pairs(&[(3.0, 0.5), (1.0, 0.5)]);
        assert_eq!(d.quantile(0.25), Some(1.0));
        assert_eq!(d.quantile(0.75), Some(3.0));
    }

    #[test]
    #[should_panic]
    fn quantile_of_nan() {
        let _ = reference_distribution().quantile(f64::NAN);
    }
}

#[cfg(test)]
mod sampling_tests {
    use super::*;

    #[test]
    fn samples_are_outcomes() {
        let d: Distribution = reference_distribution();
        let samples: Vec<f64> = d.sample_multiple(1000);
        assert_eq!(samples.len(), 1000);

        let values: Vec<f64> = d.values();
        assert!(samples.iter().all(|s| values.contains(s)));
    }

    #[test]
    fn zero_weight_outcomes_are_never_sampled() {
        let d: Distribution = Distribution::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let samples: Vec<f64> = d.sample_multiple_with(&mut rng, 500);
        assert!(samples.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn all_zero_weights_give_nothing() {
        let d: Distribution = Distribution::from_pairs(&[(5.0, 0.0), (6.0, 0.0)]);
        let mut rng: StdRng = StdRng::seed_from_u64(5);

        assert!(d.sample_multiple_with(&mut rng, 3).is_empty());
        assert!(d.sample_multiple(3).is_empty());
        assert_eq!(d.sample(), None);
        assert_eq!(d.quantile(0.0), None);
        assert_eq!(d.quantile(0.5), None);
    }

    #[test]
    fn frequencies_approach_weights() {
        let d: Distribution = reference_distribution();
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let n: usize = 50_000;
        let samples: Vec<f64> = d.sample_multiple_with(&mut rng, n);

        for point in &d {
            let count: usize = samples.iter().filter(|&&s| s == point.value).count();
            let frequency: f64 = count as f64 / n as f64;
            assert!(
                (frequency - point.weight).abs() < 0.02,
                "value {} has frequency {frequency} but weight {}",
                point.value,
                point.weight
            );
        }
    }
}
