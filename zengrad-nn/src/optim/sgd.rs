use super::optimizer_trait::Optimizer;
use zengrad_core::{Value, ZenGradError};

/// Plain stochastic gradient descent: `p ← p - lr · ∂L/∂p`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over `params`.
    ///
    /// # Errors
    /// [`ZenGradError::InvalidHyperparameter`] if `lr` is negative or not finite.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, ZenGradError> {
        validate_lr(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), ZenGradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

fn validate_lr(lr: f64) -> Result<(), ZenGradError> {
    if lr.is_finite() && lr >= 0.0 {
        Ok(())
    } else {
        Err(ZenGradError::InvalidHyperparameter {
            name: "lr".to_string(),
            value: lr,
        })
    }
}

impl Optimizer for Sgd {
    /// Updates every parameter in place.
    ///
    /// Nothing is updated if any gradient is NaN or infinite; the step fails
    /// with [`ZenGradError::NonFiniteResult`] instead.
    fn step(&mut self) -> Result<(), ZenGradError> {
        if let Some(bad) = self.params.iter().find(|p| !p.grad().is_finite()) {
            log::warn!("Sgd: non-finite gradient on {}, skipping step", bad.id());
            return Err(ZenGradError::NonFiniteResult {
                op: "sgd step".to_string(),
                value: bad.grad(),
            });
        }
        for p in &self.params {
            p.set_data(p.data() - self.lr * p.grad());
        }
        log::trace!("Sgd: updated {} parameters (lr={})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for p in &self.params {
            p.zero_grad();
        }
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
