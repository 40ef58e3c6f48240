//! Adam optimizer with optional AMSGrad and global-norm clipping

use super::{clip_grad_norm, Optimizer, Parameter};
use ndarray::{Array1, Zip};

/// Adam optimizer
///
/// m_t = β1 * m_{t-1} + (1 - β1) * g
/// v_t = β2 * v_{t-1} + (1 - β2) * g²
/// θ_t = θ_{t-1} - lr_t * m_t / (√v_t + ε),  lr_t = lr * √(1 - β2^t) / (1 - β1^t)
///
/// With AMSGrad the denominator uses the running maximum of v_t. With a
/// global clip norm, all gradients are clipped jointly before the update.
#[derive(Debug, Clone)]
pub struct Adam {
    lr: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    amsgrad: bool,
    global_clipnorm: Option<f64>,
    t: u64,
    m: Vec<Option<Array1<f64>>>,
    v: Vec<Option<Array1<f64>>>,
    v_max: Vec<Option<Array1<f64>>>,
}

impl Adam {
    /// Create a new Adam optimizer
    pub fn new(lr: f64, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        Self {
            lr,
            beta1,
            beta2,
            epsilon,
            amsgrad: false,
            global_clipnorm: None,
            t: 0,
            m: Vec::new(),
            v: Vec::new(),
            v_max: Vec::new(),
        }
    }

    /// Create Adam with the usual defaults (β1 = 0.9, β2 = 0.999, ε = 1e-7)
    pub fn default_params(lr: f64) -> Self {
        Self::new(lr, 0.9, 0.999, 1e-7)
    }

    /// Enable or disable AMSGrad
    pub fn with_amsgrad(mut self, amsgrad: bool) -> Self {
        self.amsgrad = amsgrad;
        self
    }

    /// Clip all gradients to this joint L2 norm before each update
    pub fn with_global_clipnorm(mut self, max_norm: Option<f64>) -> Self {
        self.global_clipnorm = max_norm;
        self
    }

    /// Whether AMSGrad is enabled
    pub fn amsgrad(&self) -> bool {
        self.amsgrad
    }

    /// Configured global clip norm
    pub fn global_clipnorm(&self) -> Option<f64> {
        self.global_clipnorm
    }

    /// Number of updates applied so far
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.t
    }

    fn ensure_moments(&mut self, params: &[Parameter]) {
        if self.m.len() < params.len() {
            self.m.resize(params.len(), None);
            self.v.resize(params.len(), None);
            self.v_max.resize(params.len(), None);
        }
        for (i, param) in params.iter().enumerate() {
            let stale = self.m[i].as_ref().is_some_and(|m| m.len() != param.len());
            if self.m[i].is_none() || stale {
                self.m[i] = Some(Array1::zeros(param.len()));
                self.v[i] = Some(Array1::zeros(param.len()));
                self.v_max[i] = Some(Array1::zeros(param.len()));
            }
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: &mut [Parameter]) {
        if let Some(max_norm) = self.global_clipnorm {
            clip_grad_norm(params, max_norm);
        }

        self.ensure_moments(params);
        self.t += 1;

        // Bias correction folded into the step size
        let t = i32::try_from(self.t).unwrap_or(i32::MAX);
        let lr_t = self.lr * (1.0 - self.beta2.powi(t)).sqrt() / (1.0 - self.beta1.powi(t));

        let (beta1, beta2, epsilon, amsgrad) = (self.beta1, self.beta2, self.epsilon, self.amsgrad);

        for (i, param) in params.iter_mut().enumerate() {
            let Some(grad) = param.grad().cloned() else {
                continue;
            };
            if grad.len() != param.len() {
                tracing::warn!(
                    index = i,
                    param_len = param.len(),
                    grad_len = grad.len(),
                    "gradient length does not match parameter, skipping update"
                );
                continue;
            }
            let (Some(m), Some(v), Some(v_max)) =
                (self.m[i].as_mut(), self.v[i].as_mut(), self.v_max[i].as_mut())
            else {
                continue;
            };

            Zip::from(&mut *m).and(&grad).for_each(|m, &g| *m = beta1 * *m + (1.0 - beta1) * g);
            Zip::from(&mut *v).and(&grad).for_each(|v, &g| *v = beta2 * *v + (1.0 - beta2) * g * g);

            let denom_source = if amsgrad {
                Zip::from(&mut *v_max).and(&*v).for_each(|vm, &v| *vm = vm.max(v));
                &*v_max
            } else {
                &*v
            };

            Zip::from(param.data_mut())
                .and(&*m)
                .and(denom_source)
                .for_each(|p, &m, &v| *p -= lr_t * m / (v.sqrt() + epsilon));
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    fn name(&self) -> &'static str {
        "adam"
    }
}
