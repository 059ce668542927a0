use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::Result;
use crate::types::Numeric;
use crate::variable::Variable;

// --- Forward Operation ---

/// Elementwise `a * b`. Parents: `[a, b]`.
pub fn mul_op<T: Numeric>(a: &Variable<T>, b: &Variable<T>) -> Result<Variable<T>> {
    let (value, name, grad_fn) = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let value = a_guard.value.mul(&b_guard.value)?;
        let grad_fn = BackwardOp::Mul {
            a: a_guard.value.clone(),
            b: b_guard.value.clone(),
        };
        (value, format!("{}*{}", a_guard.name, b_guard.name), grad_fn)
    };
    Ok(Variable::from_op(
        name,
        value,
        vec![a.clone(), b.clone()],
        grad_fn,
    ))
}

// --- Backward Operation ---

/// `(g * b, g * a)`
pub(crate) fn mul_backward<T: Numeric>(
    grad_output: &Array<T>,
    a: &Array<T>,
    b: &Array<T>,
) -> Result<Vec<Array<T>>> {
    let grad_a = grad_output.mul(b)?;
    let grad_b = grad_output.mul(a)?;
    Ok(vec![grad_a, grad_b])
}

impl<T: Numeric> Variable<T> {
    pub fn mul(&self, other: &Variable<T>) -> Result<Variable<T>> {
        mul_op(self, other)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
