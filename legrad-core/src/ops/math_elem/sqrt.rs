// src/ops/math_elem/sqrt.rs

use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::Result;
use crate::types::Numeric;
use crate::variable::Variable;

/// Elementwise square root. Parents: `[input]`.
///
/// Negative elements produce NaN; no check is made.
pub fn sqrt_op<T: Numeric>(input: &Variable<T>) -> Result<Variable<T>> {
    let (value, name) = {
        let guard = input.read_data();
        (guard.value.sqrt(), format!("sqrt({})", guard.name))
    };
    Ok(Variable::from_op(
        name,
        value,
        vec![input.clone()],
        BackwardOp::Sqrt,
    ))
}

/// `(0.5 * g^(-0.5),)`
///
/// Expressed in terms of the incoming gradient rather than the input value.
pub(crate) fn sqrt_backward<T: Numeric>(grad_output: &Array<T>) -> Vec<Array<T>> {
    let half = T::one() / (T::one() + T::one());
    vec![grad_output.powf(-half).scale(half)]
}

impl<T: Numeric> Variable<T> {
    pub fn sqrt(&self) -> Result<Variable<T>> {
        sqrt_op(self)
    }
}

#[cfg(test)]
#[path = "sqrt_test.rs"]
mod tests;
