use DiscreteStatistics::{
    distribution::Distribution,
    report::{Report, compute_report},
    series::DisplayMode,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug to see what the engine computes
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let points: Distribution = Distribution::from_pairs(&[
        (-2.0, 0.1),
        (-1.0, 0.12),
        (0.0, 0.2),
        (1.0, 0.25),
        (2.0, 0.18),
        (3.0, 0.1),
        (4.0, 0.05),
    ]);

    println!("*****************************************************************\n\
    This script computes the statistics of a small discrete distribution and \
    the series needed to chart it, first as a PMF and then as a CDF. \n");

    for mode in [DisplayMode::Pmf, DisplayMode::Cdf] {
        let report: Report = match compute_report().distribution(&points).mode(mode).call() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Could not compute the report: {e}");
                return;
            }
        };

        if let Some(axes) = report.axes {
            println!(
                "{mode} | x in [{}, {}], y in [{}, {}]",
                axes.x.min, axes.x.max, axes.y.min, axes.y.max
            );
        }
        println!("{report}");
        println!("***********************************************************");
    }

    let samples: Vec<f64> = points.sample_multiple(10);
    println!("10 random samples: {samples:?}");
}
