use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::Result;
use crate::types::Numeric;
use crate::variable::Variable;

// --- Forward Operation ---

/// Generalized contraction of `a` and `b` (see [`Array::dot`]). Parents: `[a, b]`.
pub fn dot_op<T: Numeric>(a: &Variable<T>, b: &Variable<T>) -> Result<Variable<T>> {
    let (value, name, grad_fn) = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let value = a_guard.value.dot(&b_guard.value)?;
        let grad_fn = BackwardOp::Dot {
            a: a_guard.value.clone(),
            b: b_guard.value.clone(),
        };
        (value, format!("{}.dot({})", a_guard.name, b_guard.name), grad_fn)
    };
    Ok(Variable::from_op(
        name,
        value,
        vec![a.clone(), b.clone()],
        grad_fn,
    ))
}

// --- Backward Operation ---

/// `(g * b, g * a)`, the elementwise product rule.
///
/// Exact when one side is a scalar. For genuine contractions the shapes of `g`
/// and the operands usually disagree and the numeric layer's shape error is
/// returned.
pub(crate) fn dot_backward<T: Numeric>(
    grad_output: &Array<T>,
    a: &Array<T>,
    b: &Array<T>,
) -> Result<Vec<Array<T>>> {
    let grad_a = grad_output.mul(b)?;
    let grad_b = grad_output.mul(a)?;
    Ok(vec![grad_a, grad_b])
}

impl<T: Numeric> Variable<T> {
    pub fn dot(&self, other: &Variable<T>) -> Result<Variable<T>> {
        dot_op(self, other)
    }
}

#[cfg(test)]
#[path = "dot_test.rs"]
mod tests;
