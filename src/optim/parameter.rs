//! Trainable parameter with an optional gradient

use ndarray::Array1;

/// A flat trainable parameter and the gradient the external model computed for it
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    data: Array1<f64>,
    grad: Option<Array1<f64>>,
}

impl Parameter {
    /// Wrap existing values
    pub fn new(data: Array1<f64>) -> Self {
        Self { data, grad: None }
    }

    /// Parameter from a plain vector
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::new(Array1::from_vec(values))
    }

    /// Zero-initialized parameter of length `len`
    pub fn zeros(len: usize) -> Self {
        Self::new(Array1::zeros(len))
    }

    /// Number of scalar values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the parameter holds no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current values
    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    /// Mutable access to the values
    pub fn data_mut(&mut self) -> &mut Array1<f64> {
        &mut self.data
    }

    /// Gradient, if one has been set since the last `zero_grad`
    pub fn grad(&self) -> Option<&Array1<f64>> {
        self.grad.as_ref()
    }

    /// Replace the gradient
    pub fn set_grad(&mut self, grad: Array1<f64>) {
        self.grad = Some(grad);
    }

    /// Drop the gradient
    pub fn zero_grad(&mut self) {
        self.grad = None;
    }
}
