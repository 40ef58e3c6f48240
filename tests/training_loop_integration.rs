//! A run built from a YAML specification: the scheduler sets each epoch's
//! learning rate and early stopping ends the run on a plateau

use approx::assert_abs_diff_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use warmcos::config::{build_schedule, build_trainer, load_and_validate};
use warmcos::optim::Optimizer;
use warmcos::train::{EpochMetrics, LOSS, VAL_ACCURACY};

const SPEC_YAML: &str = r#"
learning_rate: 0.01
epochs: 20
warmup_steps: 2
optimizer: adam
early_stopping:
  monitor: val_accuracy
  mode: max
  min_delta: 0.001
  patience: 3
model:
  num_layers: 1
  embed_layer_size: 16
  fc_layer_size: 32
  num_heads: 2
"#;

const VAL_ACCURACIES: [f64; 20] = [
    0.30, 0.45, 0.60, 0.70, 0.75, 0.7505, 0.74, 0.7502, 0.76, 0.77, 0.78, 0.79, 0.80, 0.81, 0.82,
    0.83, 0.84, 0.85, 0.86, 0.87,
];

fn write_spec(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_scheduled_run_stops_on_plateau() {
    let file = write_spec(SPEC_YAML);
    let spec = load_and_validate(file.path()).unwrap();
    let schedule = build_schedule(&spec).unwrap();
    let (mut trainer, lr_history) = build_trainer(&spec).unwrap();

    let mut seen_lrs = Vec::new();
    let mut runner = |epoch: usize, optimizer: &mut dyn Optimizer| {
        seen_lrs.push(optimizer.lr());
        let metrics = EpochMetrics::new()
            .with(LOSS, 1.0 / (epoch as f64 + 1.0))
            .with(VAL_ACCURACY, VAL_ACCURACIES[epoch]);
        Ok::<_, warmcos::Error>(metrics)
    };

    let result = trainer.fit(&mut runner).unwrap();

    // 0.7505 and 0.7502 are within min_delta of 0.75, so epochs 5 to 7 count as waits
    assert!(result.stopped_early);
    assert_eq!(result.epochs_run, 8);
    let best = result.best.unwrap();
    assert_eq!(best.epoch, 5);
    assert_abs_diff_eq!(best.value, 0.7505, epsilon = 1e-12);

    assert_eq!(seen_lrs.len(), 8);
    for (epoch, lr) in seen_lrs.iter().enumerate() {
        assert_abs_diff_eq!(*lr, schedule.lr_at(epoch), epsilon = 1e-15);
    }
    assert_eq!(seen_lrs[0], 0.0);
    assert_abs_diff_eq!(seen_lrs[2], 0.01, epsilon = 1e-15);

    let monitored = lr_history.snapshot();
    assert_eq!(monitored, result.lr_history);
    assert_abs_diff_eq!(result.final_lr, schedule.lr_at(7), epsilon = 1e-15);
}

#[test]
fn test_run_without_early_stopping_covers_every_epoch() {
    let yaml = SPEC_YAML.replace("  monitor: val_accuracy", "  enabled: false\n  monitor: val_accuracy");
    let file = write_spec(&yaml);
    let spec = load_and_validate(file.path()).unwrap();
    let (mut trainer, lr_history) = build_trainer(&spec).unwrap();

    let mut runner = |epoch: usize, _optimizer: &mut dyn Optimizer| {
        Ok::<_, warmcos::Error>(EpochMetrics::new().with(VAL_ACCURACY, VAL_ACCURACIES[epoch]))
    };
    let result = trainer.fit(&mut runner).unwrap();

    assert!(!result.stopped_early);
    assert_eq!(result.epochs_run, 20);
    assert_eq!(lr_history.len(), 20);
    assert_eq!(result.best.map(|b| b.epoch), Some(19));
    assert!(result.final_lr < 1e-4);
}

#[test]
fn test_runner_error_aborts_run() {
    let file = write_spec(SPEC_YAML);
    let spec = load_and_validate(file.path()).unwrap();
    let (mut trainer, _) = build_trainer(&spec).unwrap();

    let mut runner = |epoch: usize, _optimizer: &mut dyn Optimizer| {
        if epoch == 3 {
            return Err(warmcos::Error::Shape("logits have 4 rows, labels have 3".to_string()));
        }
        Ok(EpochMetrics::new().with(VAL_ACCURACY, VAL_ACCURACIES[epoch]))
    };

    let err = trainer.fit(&mut runner).unwrap_err();
    assert!(err.to_string().contains("Shape mismatch"));
}

#[test]
fn test_invalid_warmup_rejected_before_training() {
    let yaml = SPEC_YAML.replace("warmup_steps: 2", "warmup_steps: 20");
    let file = write_spec(&yaml);

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(err.to_string().contains("Warmup steps (20) must be less than total steps (20)"));
}
