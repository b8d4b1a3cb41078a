use crate::config::TrainConfig;
use anyhow::{ensure, Context, Result};
use scalargrad_core::nn::{l2_penalty, HingeLoss, Mlp, Module};
use scalargrad_core::optim::{LRScheduler, LinearLR, Optimizer, SgdOptimizer};
use scalargrad_core::Value;
use scalargrad_data::{DataLoader, Dataset, LabeledDataset, RandomSampler, Sample, Sampler, SequentialSampler};

/// Metrics of one optimization step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub step: usize,
    pub loss: f64,
    /// Percentage of the batch classified correctly.
    pub accuracy: f64,
    /// Learning rate used for this step's update.
    pub learning_rate: f64,
}

/// Outcome of a training run.
#[derive(Debug)]
pub struct TrainReport {
    pub history: Vec<StepRecord>,
    /// Loss node of the last step, with its graph and gradients still attached.
    pub final_graph: Value,
}

impl TrainReport {
    pub fn final_loss(&self) -> f64 {
        self.history.last().map_or(f64::NAN, |r| r.loss)
    }

    pub fn final_accuracy(&self) -> f64 {
        self.history.last().map_or(0.0, |r| r.accuracy)
    }
}

/// Builds the loss of `model` on `batch` (labels in `{-1, +1}`) and the
/// share of correctly signed scores, in percent.
pub fn evaluate(model: &Mlp, batch: &[Sample], alpha: f64) -> Result<(Value, f64)> {
    ensure!(!batch.is_empty(), "cannot evaluate an empty batch");
    let scores = batch
        .iter()
        .map(|sample| model.forward(&sample.to_values()).map(|out| out[0].clone()))
        .collect::<Result<Vec<_>, _>>()?;
    let labels: Vec<f64> = batch.iter().map(|s| s.label).collect();

    let data_loss = HingeLoss::new().calculate(&scores, &labels)?;
    let loss = data_loss + l2_penalty(&model.parameters(), alpha);

    let correct = scores
        .iter()
        .zip(&labels)
        .filter(|(score, y)| (**y > 0.0) == (score.data() > 0.0))
        .count();
    let accuracy = 100.0 * correct as f64 / batch.len() as f64;
    Ok((loss.with_label("loss"), accuracy))
}

/// Source of one batch per step: the whole dataset in order, or minibatches
/// cycling through shuffled passes.
enum Batches {
    Full(DataLoader<LabeledDataset, SequentialSampler>),
    Mini(DataLoader<LabeledDataset, RandomSampler>),
}

impl Batches {
    fn new(dataset: &LabeledDataset, config: &TrainConfig) -> Self {
        match config.batch_size {
            None => Batches::Full(DataLoader::new(
                dataset.clone(),
                dataset.len(),
                SequentialSampler::new(),
                false,
            )),
            Some(batch_size) => {
                let mut sampler = RandomSampler::new(false, None);
                if let Some(seed) = config.seed {
                    sampler = sampler.with_seed(seed);
                }
                Batches::Mini(DataLoader::new(dataset.clone(), batch_size, sampler, false))
            }
        }
    }

    fn next_batch(&mut self) -> Result<Vec<Sample>> {
        match self {
            Batches::Full(loader) => next_cycling(loader),
            Batches::Mini(loader) => next_cycling(loader),
        }
    }
}

/// Next batch of the current pass, starting a new pass when it is exhausted.
fn next_cycling<S: Sampler>(loader: &mut DataLoader<LabeledDataset, S>) -> Result<Vec<Sample>> {
    let batch = match loader.next() {
        Some(batch) => batch,
        None => {
            loader.reset();
            loader.next().context("data loader produced no batch")?
        }
    };
    Ok(batch?)
}

/// Runs `config.steps` steps of SGD on `model`.
///
/// Each step builds the hinge loss plus the L2 penalty, zeroes the
/// gradients, backpropagates, updates the parameters and advances the
/// linear learning-rate decay.
pub fn train(model: &Mlp, dataset: &LabeledDataset, config: &TrainConfig) -> Result<TrainReport> {
    ensure!(!dataset.is_empty(), "the training set is empty");
    ensure!(
        dataset.n_features() == model.nin(),
        "the model expects {} features, the data has {}",
        model.nin(),
        dataset.n_features()
    );

    let sgd = SgdOptimizer::new(model.parameters(), config.lr, config.momentum, config.weight_decay, false)?;
    let mut scheduler = LinearLR::new(sgd, 1.0, config.final_lr_factor, config.decay_steps)?;
    let mut batches = Batches::new(dataset, config);

    log::info!(
        "Training {} parameters on {} for {} steps",
        model.num_parameters(),
        dataset,
        config.steps
    );

    let mut history = Vec::with_capacity(config.steps);
    let mut final_graph = None;
    for step in 0..config.steps {
        let batch = batches.next_batch()?;
        let (loss, accuracy) = evaluate(model, &batch, config.alpha)?;

        scheduler.optimizer_mut().zero_grad();
        loss.backward();
        let learning_rate = scheduler.get_last_lr().first().copied().unwrap_or(config.lr);
        scheduler.optimizer_mut().step()?;
        scheduler.step()?;

        log::info!(
            "Step: {} loss: {:.6} accuracy: {:.1}% learningRate: {:.4}",
            step,
            loss.data(),
            accuracy,
            learning_rate
        );
        history.push(StepRecord {
            step,
            loss: loss.data(),
            accuracy,
            learning_rate,
        });
        final_graph = Some(loss);
    }

    let final_graph = final_graph.context("training ran no steps")?;
    Ok(TrainReport { history, final_graph })
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
