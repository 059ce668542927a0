// src/ops/arithmetic/pow.rs

use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::Result;
use crate::types::Numeric;
use crate::variable::Variable;

/// Raises each element to the fixed power `exponent`. Parents: `[base]`.
pub fn pow_op<T: Numeric>(base: &Variable<T>, exponent: T) -> Result<Variable<T>> {
    let (value, name, grad_fn) = {
        let guard = base.read_data();
        let value = guard.value.powf(exponent);
        let grad_fn = BackwardOp::Pow {
            base: guard.value.clone(),
            exponent,
        };
        (value, format!("{}^{}", guard.name, exponent), grad_fn)
    };
    Ok(Variable::from_op(name, value, vec![base.clone()], grad_fn))
}

/// `(g * (p * a^(p-1)),)`
pub(crate) fn pow_backward<T: Numeric>(
    grad_output: &Array<T>,
    base: &Array<T>,
    exponent: T,
) -> Result<Vec<Array<T>>> {
    let local = base.powf(exponent - T::one()).scale(exponent);
    Ok(vec![grad_output.mul(&local)?])
}

impl<T: Numeric> Variable<T> {
    pub fn pow(&self, exponent: T) -> Result<Variable<T>> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
