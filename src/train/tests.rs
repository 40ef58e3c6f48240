//! End-to-end tests for the training module

use super::*;
use crate::error::Result;
use crate::optim::{cosine_schedule, Adam, Optimizer, Parameter, ScheduleConfig};
use ndarray::{array, Array2, Axis};

/// Linear softmax classifier over 2-d points, trained full-batch
struct LinearClassifier {
    weights: Vec<Parameter>,
    features: Array2<f64>,
    labels: Vec<usize>,
    val_features: Array2<f64>,
    val_labels: Vec<usize>,
    loss_fn: SmoothedCrossEntropy,
    classes: usize,
}

impl LinearClassifier {
    fn new(label_smoothing: f64) -> Self {
        let features = array![
            [2.0, 0.1], [1.8, -0.2], [2.2, 0.3],
            [-0.1, 2.0], [0.2, 1.9], [-0.3, 2.1],
            [-2.0, -1.9], [-1.8, -2.2], [-2.1, -2.0],
        ];
        let val_features = array![[1.9, 0.0], [0.0, 2.2], [-1.9, -2.1]];
        Self {
            weights: vec![Parameter::zeros(3 * 2)],
            features,
            labels: vec![0, 0, 0, 1, 1, 1, 2, 2, 2],
            val_features,
            val_labels: vec![0, 1, 2],
            loss_fn: SmoothedCrossEntropy::new(label_smoothing).unwrap(),
            classes: 3,
        }
    }

    fn weight_matrix(&self) -> Array2<f64> {
        self.weights[0].data().clone().into_shape_with_order((self.classes, 2)).unwrap()
    }

    fn logits(&self, x: &Array2<f64>) -> Array2<f64> {
        x.dot(&self.weight_matrix().t())
    }
}

impl EpochRunner for LinearClassifier {
    fn run_epoch(&mut self, _epoch: usize, optimizer: &mut dyn Optimizer) -> Result<EpochMetrics> {
        let logits = self.logits(&self.features);
        let loss = self.loss_fn.forward(logits.view(), &self.labels)?;
        let acc = accuracy(logits.view(), &self.labels)?;

        let grad_logits = self.loss_fn.gradient(logits.view(), &self.labels)?;
        let grad_w = grad_logits.t().dot(&self.features);
        self.weights[0].set_grad(grad_w.into_shape_with_order(self.classes * 2).unwrap());
        optimizer.step(&mut self.weights);
        optimizer.zero_grad(&mut self.weights);

        let val_logits = self.logits(&self.val_features);
        Ok(EpochMetrics::new()
            .with(LOSS, loss)
            .with(ACCURACY, acc)
            .with(VAL_LOSS, self.loss_fn.forward(val_logits.view(), &self.val_labels)?)
            .with(VAL_ACCURACY, accuracy(val_logits.view(), &self.val_labels)?))
    }
}

#[test]
fn test_end_to_end_training() {
    let epochs = 60;
    let schedule = cosine_schedule(ScheduleConfig::new(0.1, epochs, 5).unwrap());
    let lr_monitor = LrMonitor::new();
    let lrs = lr_monitor.history();

    let mut trainer = Trainer::new(Box::new(Adam::default_params(0.001)), TrainConfig::new(epochs));
    trainer.add_callback(LRSchedulerCallback::new(schedule));
    trainer.add_callback(lr_monitor);

    let mut model = LinearClassifier::new(0.1);
    let result = trainer.fit(&mut model).unwrap();

    assert_eq!(result.epochs_run, epochs);
    assert_eq!(lrs.len(), epochs);

    let first = result.history.first().and_then(|(_, m)| m.loss()).unwrap();
    let last = result.last_metrics().and_then(EpochMetrics::loss).unwrap();
    assert!(last < first, "loss should fall: {first} -> {last}");
    assert_eq!(result.last_metrics().and_then(|m| m.get(VAL_ACCURACY)), Some(1.0));
    assert_eq!(result.best.map(|b| b.value), Some(1.0));
}

#[test]
fn test_end_to_end_early_stopping_on_val_accuracy() {
    let epochs = 200;
    let schedule = cosine_schedule(ScheduleConfig::new(0.1, epochs, 5).unwrap());

    let mut trainer = Trainer::new(Box::new(Adam::default_params(0.001)), TrainConfig::new(epochs));
    trainer.add_callback(LRSchedulerCallback::new(schedule));
    trainer.add_callback(EarlyStopping::new(5, 0.001).monitor(VAL_ACCURACY, MonitorMode::Max));

    let mut model = LinearClassifier::new(0.0);
    let result = trainer.fit(&mut model).unwrap();

    // Validation accuracy saturates at 1.0, after which patience runs out
    assert!(result.stopped_early);
    assert!(result.epochs_run < epochs);
    let best = result.best.unwrap();
    assert_eq!(best.value, 1.0);
    assert_eq!(result.epochs_run, best.epoch + 6);
}

#[test]
fn test_trained_classifier_predicts_training_points() {
    let epochs = 60;
    let schedule = cosine_schedule(ScheduleConfig::new(0.1, epochs, 5).unwrap());
    let mut trainer = Trainer::new(Box::new(Adam::default_params(0.001)), TrainConfig::new(epochs));
    trainer.add_callback(LRSchedulerCallback::new(schedule));

    let mut model = LinearClassifier::new(0.1);
    trainer.fit(&mut model).unwrap();

    let logits = model.logits(&model.features);
    assert_eq!(logits.len_of(Axis(0)), 9);
    assert_eq!(accuracy(logits.view(), &model.labels).unwrap(), 1.0);
}
