//! Label-smoothed sparse categorical cross-entropy

use super::LossFn;
use crate::config::ValidationError;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Cross-entropy over integer class labels with label smoothing
///
/// The target for a row with label `y` is `(1 - s) * onehot(y) + s / C`, and
/// the loss is the batch mean of `-sum(target * log_softmax(logits))`.
/// With `s = 0` this is plain sparse categorical cross-entropy.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use warmcos::train::{LossFn, SmoothedCrossEntropy};
///
/// let loss_fn = SmoothedCrossEntropy::new(0.1).unwrap();
/// let logits = array![[2.0, 1.0, 0.5], [0.1, 0.2, 3.0]];
///
/// let loss = loss_fn.forward(logits.view(), &[0, 2]).unwrap();
/// assert!(loss > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedCrossEntropy {
    label_smoothing: f64,
}

impl SmoothedCrossEntropy {
    /// Create the loss; `label_smoothing` must lie in `[0, 1)`
    pub fn new(label_smoothing: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&label_smoothing) {
            return Err(ValidationError::LabelSmoothing(label_smoothing).into());
        }
        Ok(Self { label_smoothing })
    }

    pub fn label_smoothing(&self) -> f64 {
        self.label_smoothing
    }

    /// Numerically stable log(softmax(x))
    pub(crate) fn log_softmax(x: ArrayView1<'_, f64>) -> Array1<f64> {
        let max = x.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let log_sum = x.iter().map(|&v| (v - max).exp()).sum::<f64>().ln();
        x.mapv(|v| v - max - log_sum)
    }

    fn smoothed_target(&self, label: usize, num_classes: usize) -> Array1<f64> {
        let off = self.label_smoothing / num_classes as f64;
        let mut target = Array1::from_elem(num_classes, off);
        target[label] += 1.0 - self.label_smoothing;
        target
    }

    /// Gradient of the mean loss with respect to the logits
    ///
    /// Row `i` is `(softmax(logits_i) - target_i) / batch`.
    pub fn gradient(&self, logits: ArrayView2<'_, f64>, labels: &[usize]) -> Result<Array2<f64>> {
        let (rows, classes) = check_shapes(logits, labels)?;
        let mut grad = Array2::zeros((rows, classes));
        for ((row, &label), mut out) in logits.outer_iter().zip(labels).zip(grad.outer_iter_mut()) {
            let probs = Self::log_softmax(row).mapv(f64::exp);
            let target = self.smoothed_target(label, classes);
            out.assign(&((probs - target) / rows as f64));
        }
        Ok(grad)
    }
}

impl Default for SmoothedCrossEntropy {
    fn default() -> Self {
        Self { label_smoothing: 0.0 }
    }
}

impl LossFn for SmoothedCrossEntropy {
    fn forward(&self, logits: ArrayView2<'_, f64>, labels: &[usize]) -> Result<f64> {
        let (rows, classes) = check_shapes(logits, labels)?;
        if rows == 0 {
            return Ok(0.0);
        }

        let total: f64 = logits
            .outer_iter()
            .zip(labels)
            .map(|(row, &label)| {
                let log_probs = Self::log_softmax(row);
                -self.smoothed_target(label, classes).dot(&log_probs)
            })
            .sum();

        Ok(total / rows as f64)
    }

    fn name(&self) -> &str {
        "SmoothedCrossEntropy"
    }
}

fn check_shapes(logits: ArrayView2<'_, f64>, labels: &[usize]) -> Result<(usize, usize)> {
    let (rows, classes) = logits.dim();
    if rows != labels.len() {
        return Err(Error::Shape(format!("{rows} logit rows but {} labels", labels.len())));
    }
    if classes == 0 && rows > 0 {
        return Err(Error::Shape("logits have no classes".to_string()));
    }
    if let Some(&label) = labels.iter().find(|&&l| l >= classes) {
        return Err(Error::Shape(format!("label {label} out of range for {classes} classes")));
    }
    Ok((rows, classes))
}
