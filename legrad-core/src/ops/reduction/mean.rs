// src/ops/reduction/mean.rs

use crate::array::{self, Array};
use crate::autograd::BackwardOp;
use crate::error::{LegradError, Result};
use crate::types::Numeric;
use crate::variable::Variable;

/// Mean over the leading axis. Parents: `[input]`.
///
/// A scalar input is accepted here; its rule fails later, during backward.
pub fn mean_op<T: Numeric>(input: &Variable<T>) -> Result<Variable<T>> {
    let (value, name, grad_fn) = {
        let guard = input.read_data();
        let value = guard.value.mean()?;
        let grad_fn = BackwardOp::Mean {
            input_shape: guard.value.shape().to_vec(),
        };
        (value, format!("Mean({})", guard.name), grad_fn)
    };
    Ok(Variable::from_op(name, value, vec![input.clone()], grad_fn))
}

/// `(ones_like(a) / a.shape[0],)`
///
/// The incoming gradient does not take part: the rule behaves as if it were 1.
/// Fails with `LegradError::DimensionMismatch` when the input was a scalar.
pub(crate) fn mean_backward<T: Numeric>(input_shape: &[usize]) -> Result<Vec<Array<T>>> {
    let leading = input_shape
        .first()
        .copied()
        .ok_or_else(|| LegradError::DimensionMismatch {
            expected: 1,
            actual: 0,
            operation: "mean backward".to_string(),
        })?;
    let count = T::from_usize(leading).unwrap_or_else(T::nan);
    let grad = array::ones::<T>(input_shape).div(&Array::scalar(count))?;
    Ok(vec![grad])
}

impl<T: Numeric> Variable<T> {
    pub fn mean(&self) -> Result<Variable<T>> {
        mean_op(self)
    }
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
