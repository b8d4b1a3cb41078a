use crate::error::ScalarGradError;
use crate::optim::check_non_negative;
use crate::optim::optimizer_trait::Optimizer;

/// Defines the interface of learning rate schedulers.
///
/// A scheduler owns (or mutably borrows, through `&mut O`) an optimizer and
/// rewrites the learning rate of its parameter groups.
pub trait LRScheduler<O: Optimizer> {
    /// Advances the schedule by one step and updates the learning rates.
    ///
    /// Call it once per optimizer step, after `Optimizer::step`.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Returns the current learning rate of each parameter group, in group order.
    fn get_last_lr(&self) -> Vec<f64>;

    /// Returns a reference to the wrapped optimizer.
    fn optimizer(&self) -> &O;

    /// Returns a mutable reference to the wrapped optimizer.
    fn optimizer_mut(&mut self) -> &mut O;
}

/// Scales every group's initial learning rate by a factor that moves
/// linearly from `start_factor` to `end_factor` over `total_iters` steps,
/// then stays at `end_factor`.
///
/// `LinearLR::new(opt, 1.0, 0.1, 100)` on a base rate of `1.0` gives
/// `lr_k = 1 - 0.9 * k / 100` for `k <= 100`.
#[derive(Debug)]
pub struct LinearLR<O: Optimizer> {
    optimizer: O,
    start_factor: f64,
    end_factor: f64,
    total_iters: usize,
    last_epoch: usize,
    base_lrs: Vec<f64>,
}

impl<O: Optimizer> LinearLR<O> {
    /// Wraps `optimizer` and immediately sets each group's learning rate to
    /// `base_lr * start_factor`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if a factor is negative or not finite.
    pub fn new(
        optimizer: O,
        start_factor: f64,
        end_factor: f64,
        total_iters: usize,
    ) -> Result<Self, ScalarGradError> {
        check_non_negative("start_factor", start_factor)?;
        check_non_negative("end_factor", end_factor)?;

        let base_lrs = optimizer.param_groups().iter().map(|pg| pg.lr()).collect();
        let mut scheduler = LinearLR {
            optimizer,
            start_factor,
            end_factor,
            total_iters,
            last_epoch: 0,
            base_lrs,
        };
        scheduler.apply();
        Ok(scheduler)
    }

    /// Number of `step` calls so far.
    pub fn last_epoch(&self) -> usize {
        self.last_epoch
    }

    /// The multiplicative factor for the current step.
    pub fn factor(&self) -> f64 {
        if self.total_iters == 0 {
            return self.end_factor;
        }
        let progress = self.last_epoch.min(self.total_iters) as f64 / self.total_iters as f64;
        self.start_factor + (self.end_factor - self.start_factor) * progress
    }

    fn apply(&mut self) {
        let factor = self.factor();
        let groups = self.optimizer.param_groups_mut();
        // Groups added after construction start from their current rate.
        for pg in groups.iter().skip(self.base_lrs.len()) {
            self.base_lrs.push(pg.lr());
        }
        for (pg, base) in groups.iter_mut().zip(&self.base_lrs) {
            pg.set_lr(base * factor);
        }
    }
}

impl<O: Optimizer> LRScheduler<O> for LinearLR<O> {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        self.last_epoch += 1;
        self.apply();
        log::trace!("LinearLR step {}: factor {}", self.last_epoch, self.factor());
        Ok(())
    }

    fn get_last_lr(&self) -> Vec<f64> {
        self.optimizer.param_groups().iter().map(|pg| pg.lr()).collect()
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }
}

#[cfg(test)]
#[path = "lr_scheduler_tests.rs"]
mod tests;
