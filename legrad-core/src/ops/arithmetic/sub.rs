use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::Result;
use crate::types::Numeric;
use crate::variable::Variable;

/// Elementwise `a - b`. Parents: `[a, b]`.
pub fn sub_op<T: Numeric>(a: &Variable<T>, b: &Variable<T>) -> Result<Variable<T>> {
    let (value, name) = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let value = a_guard.value.sub(&b_guard.value)?;
        (value, format!("{}-{}", a_guard.name, b_guard.name))
    };
    Ok(Variable::from_op(
        name,
        value,
        vec![a.clone(), b.clone()],
        BackwardOp::Sub,
    ))
}

/// `(g, -g)`
pub(crate) fn sub_backward<T: Numeric>(grad_output: &Array<T>) -> Vec<Array<T>> {
    vec![grad_output.clone(), grad_output.neg()]
}

impl<T: Numeric> Variable<T> {
    pub fn sub(&self, other: &Variable<T>) -> Result<Variable<T>> {
        sub_op(self, other)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
