use crate::array::Array;
use crate::types::Numeric;

/// Step size used by [`Variable::update_default`](crate::Variable::update_default).
pub const DEFAULT_STEP_SIZE: f64 = 1e-3;

/// Options for a backward pass.
#[derive(Debug, Clone)]
pub struct BackwardOptions<T: Numeric> {
    /// Gradient seeded into the starting variable. `None` means a scalar `1`.
    pub initial_grad: Option<Array<T>>,
    /// Log every visited variable and its incoming gradient at `info` level.
    pub verbose: bool,
}

impl<T: Numeric> Default for BackwardOptions<T> {
    fn default() -> Self {
        BackwardOptions {
            initial_grad: None,
            verbose: false,
        }
    }
}

impl<T: Numeric> BackwardOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_grad(mut self, grad: impl Into<Array<T>>) -> Self {
        self.initial_grad = Some(grad.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The gradient the traversal starts from.
    pub(crate) fn seed(&self) -> Array<T> {
        self.initial_grad
            .clone()
            .unwrap_or_else(|| Array::scalar(T::one()))
    }
}
