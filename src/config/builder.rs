//! Build training components from a run specification

use super::schema::RunSpec;
use super::validate::{AVAILABLE_OPTIMIZERS, PARAM_BETA1, PARAM_BETA2, PARAM_EPSILON};
use crate::error::{Error, Result};
use crate::optim::{cosine_schedule, Adam, Optimizer, ScheduleConfig};
use crate::train::{
    EarlyStopping, LRSchedulerCallback, LrHistory, LrMonitor, SmoothedCrossEntropy, TrainConfig,
    Trainer,
};

/// Build the warmup + cosine schedule, one step per epoch
pub fn build_schedule(spec: &RunSpec) -> Result<ScheduleConfig> {
    Ok(ScheduleConfig::from_signed(spec.learning_rate, spec.epochs, spec.warmup_steps)?)
}

/// Build the optimizer named by the specification
///
/// The initial learning rate is the specification's `learning_rate`; the
/// scheduler callback overrides it from the first epoch on.
pub fn build_optimizer(spec: &RunSpec) -> Result<Box<dyn Optimizer>> {
    let param = |name: &str, default: f64| {
        spec.optimizer_params.get(name).and_then(serde_json::Value::as_f64).unwrap_or(default)
    };

    match spec.optimizer.to_lowercase().as_str() {
        "adam" => {
            let adam = Adam::new(
                spec.learning_rate,
                param(PARAM_BETA1, 0.9),
                param(PARAM_BETA2, 0.999),
                param(PARAM_EPSILON, 1e-7),
            )
            .with_amsgrad(spec.amsgrad)
            .with_global_clipnorm(spec.global_clipnorm);
            Ok(Box::new(adam))
        }
        _ => Err(Error::UnknownOptimizer {
            name: spec.optimizer.clone(),
            available: AVAILABLE_OPTIMIZERS.join(", "),
        }),
    }
}

/// Build the early stopping callback, if enabled
pub fn build_early_stopping(spec: &RunSpec) -> Option<EarlyStopping> {
    let es = &spec.early_stopping;
    es.enabled.then(|| {
        EarlyStopping::new(es.patience, es.min_delta).monitor(es.monitor.clone(), es.mode)
    })
}

/// Build the label-smoothed loss
pub fn build_loss(spec: &RunSpec) -> Result<SmoothedCrossEntropy> {
    SmoothedCrossEntropy::new(spec.label_smoothing)
}

/// Build a trainer with the scheduler, learning rate monitor and early stopping attached
///
/// Returns the trainer and a handle to the per-epoch learning rate history.
pub fn build_trainer(spec: &RunSpec) -> Result<(Trainer, LrHistory)> {
    super::validate::validate_config(spec)?;

    let schedule = build_schedule(spec)?;
    let optimizer = build_optimizer(spec)?;
    let max_epochs = schedule.total_steps();
    let config = TrainConfig::new(max_epochs)
        .with_monitor(spec.early_stopping.monitor.clone(), spec.early_stopping.mode);

    let monitor = LrMonitor::new();
    let history = monitor.history();

    let mut trainer = Trainer::new(optimizer, config);
    trainer.add_callback(LRSchedulerCallback::new(cosine_schedule(schedule)));
    trainer.add_callback(monitor);
    if let Some(early_stopping) = build_early_stopping(spec) {
        trainer.add_callback(early_stopping);
    }

    tracing::info!(
        lr = spec.learning_rate,
        epochs = max_epochs,
        warmup = schedule.warmup_steps(),
        optimizer = %spec.optimizer,
        "built trainer"
    );
    Ok((trainer, history))
}
