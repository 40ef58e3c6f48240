//! Epoch loop with callback dispatch

use crate::error::Result;
use crate::train::callback::CallbackAction;
use crate::train::metrics::EpochMetrics;
use crate::train::trainer::core::Trainer;
use crate::train::trainer::result::TrainResult;
use crate::train::trainer::runner::EpochRunner;
use std::time::Instant;

impl Trainer {
    /// Train for up to `max_epochs` epochs
    ///
    /// Each epoch:
    /// 1. callbacks may set the learning rate (`schedule_lr`)
    /// 2. `on_epoch_begin` may stop training or skip the epoch
    /// 3. `runner` trains the epoch with the optimizer
    /// 4. `on_epoch_end` sees the reported metrics and may stop training
    ///
    /// An error from the runner aborts training and is returned as is.
    pub fn fit<R: EpochRunner + ?Sized>(&mut self, runner: &mut R) -> Result<TrainResult> {
        self.start_time = Some(Instant::now());
        let max_epochs = self.config.max_epochs;
        let mut result = TrainResult::default();

        tracing::info!(
            max_epochs,
            optimizer = self.optimizer.name(),
            lr = self.optimizer.lr(),
            callbacks = ?self.callbacks.names(),
            "training started"
        );

        let ctx = self.build_context(0, EpochMetrics::new());
        if self.callbacks.on_train_begin(&ctx) == CallbackAction::Stop {
            result.stopped_early = true;
            return Ok(self.finalize(result, ctx.epoch, EpochMetrics::new()));
        }

        let mut last_epoch = 0;
        let mut last_metrics = EpochMetrics::new();

        for epoch in 0..max_epochs {
            last_epoch = epoch;

            let ctx = self.build_context(epoch, EpochMetrics::new());
            if let Some(lr) = self.callbacks.schedule_lr(&ctx) {
                self.optimizer.set_lr(lr);
            }

            let ctx = self.build_context(epoch, EpochMetrics::new());
            match self.callbacks.on_epoch_begin(&ctx) {
                CallbackAction::Stop => {
                    result.stopped_early = true;
                    break;
                }
                CallbackAction::SkipEpoch => {
                    tracing::debug!(epoch, "epoch skipped by callback");
                    continue;
                }
                CallbackAction::Continue => {}
            }

            let lr = self.optimizer.lr();
            let metrics = runner.run_epoch(epoch, self.optimizer.as_mut())?;
            tracing::debug!(epoch, lr, metrics = ?metrics, "epoch finished");
            result.record_epoch(epoch, lr, metrics.clone(), &self.config.monitor, self.config.mode);

            let ctx = self.build_context(epoch, metrics);
            let action = self.callbacks.on_epoch_end(&ctx);
            last_metrics = ctx.metrics;
            if action == CallbackAction::Stop {
                result.stopped_early = true;
                break;
            }
        }

        Ok(self.finalize(result, last_epoch, last_metrics))
    }

    fn finalize(&mut self, mut result: TrainResult, epoch: usize, metrics: EpochMetrics) -> TrainResult {
        let ctx = self.build_context(epoch, metrics);
        self.callbacks.on_train_end(&ctx);

        result.final_lr = self.optimizer.lr();
        result.elapsed_secs = self.elapsed_secs();
        tracing::info!(
            epochs_run = result.epochs_run,
            stopped_early = result.stopped_early,
            best = ?result.best,
            "training finished"
        );
        result
    }
}
