use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected combinations of command-line settings.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("--steps must be at least 1")]
    NoSteps,

    #[error("--hidden needs at least one layer and every size must be positive, got {0:?}")]
    InvalidHidden(Vec<usize>),

    #[error("--{name} must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { name: &'static str, value: f64 },

    #[error("--batch-size must be positive")]
    ZeroBatchSize,

    #[error("--samples must be at least 2 when generating moons")]
    TooFewSamples,
}

/// Trains a small MLP binary classifier with hinge loss and SGD.
///
/// Without `--data`, a two-moons dataset is generated.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "scalargrad", version, about)]
pub struct TrainConfig {
    /// Number of optimization steps.
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Hidden layer sizes, comma separated. The output layer (1 unit) is appended.
    #[arg(long, value_delimiter = ',', default_values_t = [16, 16])]
    pub hidden: Vec<usize>,

    /// Initial learning rate.
    #[arg(long, default_value_t = 1.0)]
    pub lr: f64,

    /// Learning rate factor reached at the end of the decay.
    #[arg(long, default_value_t = 0.1)]
    pub final_lr_factor: f64,

    /// Steps over which the learning rate decays linearly.
    #[arg(long, default_value_t = 100)]
    pub decay_steps: usize,

    #[arg(long, default_value_t = 0.0)]
    pub momentum: f64,

    #[arg(long, default_value_t = 0.0)]
    pub weight_decay: f64,

    /// Strength of the L2 penalty added to the loss.
    #[arg(long, default_value_t = 1e-4)]
    pub alpha: f64,

    /// Minibatch size. The whole dataset is used per step when omitted.
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Seed for weight init, data generation and batch order.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON dataset `{"x": [[..]], "y": [..]}` with labels in {0, 1}.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Generated points, when no --data is given.
    #[arg(long, default_value_t = 100)]
    pub samples: usize,

    /// Standard deviation of the noise of generated points.
    #[arg(long, default_value_t = 0.1)]
    pub noise: f64,

    /// Writes the graph of the final loss as Graphviz DOT.
    #[arg(long)]
    pub dot_out: Option<PathBuf>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 100,
            hidden: vec![16, 16],
            lr: 1.0,
            final_lr_factor: 0.1,
            decay_steps: 100,
            momentum: 0.0,
            weight_decay: 0.0,
            alpha: 1e-4,
            batch_size: None,
            seed: None,
            data: None,
            samples: 100,
            noise: 0.1,
            dot_out: None,
        }
    }
}

impl TrainConfig {
    /// Checks the settings before any work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::NoSteps);
        }
        if self.hidden.is_empty() || self.hidden.contains(&0) {
            return Err(ConfigError::InvalidHidden(self.hidden.clone()));
        }
        for (name, value) in [
            ("lr", self.lr),
            ("final-lr-factor", self.final_lr_factor),
            ("momentum", self.momentum),
            ("weight-decay", self.weight_decay),
            ("alpha", self.alpha),
            ("noise", self.noise),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeOrNonFinite { name, value });
            }
        }
        if self.batch_size == Some(0) {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.data.is_none() && self.samples < 2 {
            return Err(ConfigError::TooFewSamples);
        }
        Ok(())
    }

    /// Layer sizes after the input: the hidden sizes plus one output unit.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = self.hidden.clone();
        sizes.push(1);
        sizes
    }
}
