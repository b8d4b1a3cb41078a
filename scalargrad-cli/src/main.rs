//! `scalargrad`: trains a small MLP binary classifier on two-moons or JSON
//! data and reports loss and accuracy per step.
//!
//! Verbosity follows `RUST_LOG` (default `info`).

mod config;
mod train;

use anyhow::{Context, Result};
use clap::Parser;
use config::TrainConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::Mlp;
use scalargrad_data::{make_moons, LabeledDataset};
use std::fs;

fn load_dataset(config: &TrainConfig) -> Result<LabeledDataset> {
    let dataset = match &config.data {
        Some(path) => LabeledDataset::from_json_file(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => make_moons(config.samples, config.noise, config.seed).context("failed to generate moons")?,
    };
    // Labels {0, 1} become hinge targets {-1, +1}.
    Ok(dataset.to_signed_labels())
}

fn run(config: TrainConfig) -> Result<()> {
    config.validate()?;
    log::debug!("{:?}", config);

    let dataset = load_dataset(&config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let model = Mlp::new(dataset.n_features(), &config.layer_sizes(), &mut rng)?;
    log::info!("{}", model);

    let report = train::train(&model, &dataset, &config)?;
    log::info!(
        "Finished {} steps: loss {:.6}, accuracy {:.1}%",
        report.history.len(),
        report.final_loss(),
        report.final_accuracy()
    );

    if let Some(path) = &config.dot_out {
        fs::write(path, report.final_graph.to_dot())
            .with_context(|| format!("failed to write graph to {}", path.display()))?;
        log::info!("Wrote loss graph to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(TrainConfig::parse())
}
