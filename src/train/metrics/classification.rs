//! Classification accuracy over logits

use crate::error::{Error, Result};
use ndarray::ArrayView2;

/// Fraction of rows whose argmax matches the label
///
/// `logits` is `(batch, num_classes)`; `labels` holds one class index per row.
/// An empty batch has accuracy 0.
pub fn accuracy(logits: ArrayView2<'_, f64>, labels: &[usize]) -> Result<f64> {
    let (rows, classes) = logits.dim();
    if rows != labels.len() {
        return Err(Error::Shape(format!("{rows} logit rows but {} labels", labels.len())));
    }
    if rows == 0 {
        return Ok(0.0);
    }

    let mut correct = 0usize;
    for (row, &label) in logits.outer_iter().zip(labels) {
        if label >= classes {
            return Err(Error::Shape(format!("label {label} out of range for {classes} classes")));
        }
        let predicted = row
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
            .0;
        if predicted == label {
            correct += 1;
        }
    }

    Ok(correct as f64 / rows as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accuracy_counts_argmax_hits() {
        let logits = array![[2.0, 1.0, 0.0], [0.0, 3.0, 1.0], [0.0, 0.1, 0.2], [5.0, 0.0, 0.0]];
        let acc = accuracy(logits.view(), &[0, 1, 0, 0]).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_empty_batch() {
        let logits = ndarray::Array2::<f64>::zeros((0, 3));
        assert_eq!(accuracy(logits.view(), &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_shape_errors() {
        let logits = array![[1.0, 0.0]];
        assert!(matches!(accuracy(logits.view(), &[0, 1]), Err(Error::Shape(_))));
        assert!(matches!(accuracy(logits.view(), &[2]), Err(Error::Shape(_))));
    }
}
