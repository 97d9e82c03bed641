//! Walks through the four sampling designs and the estimator comparison.
//!
//! Usage: `sampling-demo [config.toml]`. Without a path the built-in
//! classroom examples run with seed 0. Set `RUST_LOG=debug` to see the
//! parameters of every draw.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stratum::{
    DemoConfig, EstimatorStudy, Method, Population, Rng, compare_estimators, entropy_rng, labeled,
    seeded_rng,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "sampling demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> stratum::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let seed = config.seed;
    info!(?seed, demos = config.demos.len(), "starting sampling demo");

    let mut rng = match seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };

    for case in &config.demos {
        let population = case.population.build(&mut rng)?;
        let (clusters, sample) = case.plan.draw_labeled(&population, &mut rng)?;
        if case.plan.method() == Method::Cluster {
            println!("{}", labeled(&case.label, format!("{clusters:?}")));
            println!("{}", labeled("  units", &sample));
        } else {
            println!("{}", labeled(&case.label, &sample));
            println!("{}", labeled("  sample size", sample.len()));
        }
    }

    if let Some(comparison) = &config.comparison {
        let population: Population<i64> = comparison.population.build(&mut rng)?;
        let result = compare_estimators(&population, comparison.n, &mut rng)?;
        println!();
        for line in result.lines() {
            println!("{line}");
        }
        println!("{result}");

        if let Some(study) = config.study {
            let study_seed = seed.unwrap_or_else(|| rng.r#gen());
            let report = EstimatorStudy::new(study.replications, study_seed).run(&population, comparison.n)?;
            println!("{report}");
        }
    }

    Ok(())
}
