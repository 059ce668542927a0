use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::Result;
use crate::types::Numeric;
use crate::variable::Variable;

// --- Forward Operation ---

/// Elementwise `a + b`. Parents: `[a, b]`.
pub fn add_op<T: Numeric>(a: &Variable<T>, b: &Variable<T>) -> Result<Variable<T>> {
    let (value, name) = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let value = a_guard.value.add(&b_guard.value)?;
        (value, format!("{}+{}", a_guard.name, b_guard.name))
    };
    Ok(Variable::from_op(
        name,
        value,
        vec![a.clone(), b.clone()],
        BackwardOp::Add,
    ))
}

// --- Backward Operation ---

/// `(g, g)`
pub(crate) fn add_backward<T: Numeric>(grad_output: &Array<T>) -> Vec<Array<T>> {
    vec![grad_output.clone(), grad_output.clone()]
}

impl<T: Numeric> Variable<T> {
    pub fn add(&self, other: &Variable<T>) -> Result<Variable<T>> {
        add_op(self, other)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
