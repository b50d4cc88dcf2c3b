use DiscreteStatistics::{
    distribution::Distribution,
    errors::StatError,
    report::*,
    series::{DisplayMode, PlotAxes},
};

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
mod report_tests {
    use super::*;

    #[test]
    fn report_with_mode() {
        let d: Distribution = reference_distribution();
        let report: Report = compute_report()
            .distribution(&d)
            .mode(DisplayMode::Cdf)
            .call()
            .unwrap();

        let series = report.series.expect("a mode was selected");
        assert_eq!(series.len(), 7);
        assert_eq!(series.y.last().copied(), Some(1.0));
        assert_eq!(report.axes, Some(PlotAxes::for_mode(DisplayMode::Cdf)));
        assert_eq!(report.statistics.median, 1.0);
    }

    #[test]
    fn report_without_mode_is_not_an_error() {
        let d: Distribution = reference_distribution();
        let report: Report = compute_report().distribution(&d).call().unwrap();

        assert_eq!(report.series, None);
        assert_eq!(report.axes, None);
        assert_eq!(report.statistics.mode, 1.0);
    }

    #[test]
    fn repeated_requests_are_identical() {
        let d: Distribution = reference_distribution();

        let first: Report = compute_report()
            .distribution(&d)
            .mode(DisplayMode::Cdf)
            .call()
            .unwrap();
        let _pmf: Report = compute_report()
            .distribution(&d)
            .mode(DisplayMode::Pmf)
            .call()
            .unwrap();
        let again: Report = compute_report()
            .distribution(&d)
            .mode(DisplayMode::Cdf)
            .call()
            .unwrap();

        assert_eq!(first, again);
        assert_eq!(again.statistics.median, 1.0);
    }

    #[test]
    fn report_errors() {
        let d: Distribution = Distribution::from_pairs(&[(0.0, -1.0)]);
        let result: Result<Report, StatError> = compute_report().distribution(&d).maybe_mode(None).call();
        assert_eq!(
            result,
            Err(StatError::NegativeWeight {
                index: 0,
                weight: -1.0
            })
        );
    }
}

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn statistics_text() {
        let d: Distribution = reference_distribution();
        let report: Report = compute_report()
            .distribution(&d)
            .mode(DisplayMode::Pmf)
            .call()
            .unwrap();
        let text: String = report.statistics.to_string();

        assert!(text.starts_with("initial moments:\n  1: "));
        assert!(text.contains("central moments:\n"));
        assert!(text.contains("mean: 0.79\n"));
        assert!(text.contains("median: 1\n"));
        assert!(text.contains("mode: 1 (probability 0.25)\n"));
        assert!(text.contains("P(X <= -1): 0.22"));
        assert!(!text.contains("undefined"));

        let full: String = report.to_string();
        assert!(full.starts_with("series (7 points):\n  -2\t0.1\n"));
        assert!(full.ends_with(&text));
    }

    #[test]
    fn undefined_shape_text() {
        let d: Distribution = Distribution::from_pairs(&[(2.0, 1.0)]);
        let report: Report = compute_report().distribution(&d).threshold(5.0).call().unwrap();
        let text: String = report.statistics.to_string();

        assert!(text.contains("skewness: undefined\n"));
        assert!(text.contains("excess kurtosis: undefined\n"));
        assert!(text.contains("P(X <= 5): 1"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let d: Distribution = reference_distribution();
        let report: Report = compute_report()
            .distribution(&d)
            .mode(DisplayMode::Pmf)
            .call()
            .unwrap();

        let json: String = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"median\":1.0"));

        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
