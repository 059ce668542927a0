use crate::array::Array;
use crate::autograd::BackwardOp;
use crate::error::{LegradError, Result};
use crate::types::Numeric;
use crate::variable::Variable;
use std::any::type_name;

/// Right-hand side of a division.
///
/// A `Constant` divisor is not part of the graph: it contributes no parent
/// and receives no gradient. A raw `Array` is neither a variable nor a plain
/// number and is rejected by [`div_op`].
#[derive(Debug, Clone)]
pub enum Operand<T: Numeric> {
    Constant(T),
    Variable(Variable<T>),
    Array(Array<T>),
}

impl<T: Numeric> From<T> for Operand<T> {
    fn from(value: T) -> Self {
        Operand::Constant(value)
    }
}

impl<T: Numeric> From<Variable<T>> for Operand<T> {
    fn from(variable: Variable<T>) -> Self {
        Operand::Variable(variable)
    }
}

impl<T: Numeric> From<&Variable<T>> for Operand<T> {
    fn from(variable: &Variable<T>) -> Self {
        Operand::Variable(variable.clone())
    }
}

impl<T: Numeric> From<Array<T>> for Operand<T> {
    fn from(array: Array<T>) -> Self {
        Operand::Array(array)
    }
}

// --- Forward Operation ---

/// Elementwise `a / b`.
///
/// Parents are `[a, b]` when `b` is a variable and `[a]` when it is a plain
/// number, whose label is then its numeric value (`a/2`).
///
/// # Errors
/// `LegradError::UnsupportedOperand` when `b` is a raw array; shape errors from
/// the numeric layer are propagated.
pub fn div_op<T: Numeric>(a: &Variable<T>, b: impl Into<Operand<T>>) -> Result<Variable<T>> {
    match b.into() {
        Operand::Constant(b) => {
            let (value, name) = {
                let a_guard = a.read_data();
                let value = a_guard.value.div(&Array::scalar(b))?;
                (value, format!("{}/{}", a_guard.name, b))
            };
            Ok(Variable::from_op(
                name,
                value,
                vec![a.clone()],
                BackwardOp::DivScalar { b },
            ))
        }
        Operand::Variable(b) => {
            let (value, name, grad_fn) = {
                let a_guard = a.read_data();
                let b_guard = b.read_data();
                let value = a_guard.value.div(&b_guard.value)?;
                let grad_fn = BackwardOp::Div {
                    a: a_guard.value.clone(),
                    b: b_guard.value.clone(),
                };
                (value, format!("{}/{}", a_guard.name, b_guard.name), grad_fn)
            };
            Ok(Variable::from_op(name, value, vec![a.clone(), b], grad_fn))
        }
        Operand::Array(_) => Err(LegradError::UnsupportedOperand {
            operation: "div".to_string(),
            type_name: type_name::<Array<T>>(),
        }),
    }
}

// --- Backward Operation ---

/// `(g * (1/b), g * a)`.
///
/// The second slot is `g * a`, not the quotient-rule `-g * a / b^2`; this is
/// the engine's documented behavior and is kept as is.
pub(crate) fn div_backward<T: Numeric>(
    grad_output: &Array<T>,
    a: &Array<T>,
    b: &Array<T>,
) -> Result<Vec<Array<T>>> {
    let grad_a = grad_output.mul(&b.recip())?;
    let grad_b = grad_output.mul(a)?;
    Ok(vec![grad_a, grad_b])
}

/// `(g * (1/b),)`
pub(crate) fn div_scalar_backward<T: Numeric>(grad_output: &Array<T>, b: T) -> Vec<Array<T>> {
    vec![grad_output.scale(T::one() / b)]
}

impl<T: Numeric> Variable<T> {
    pub fn div(&self, other: impl Into<Operand<T>>) -> Result<Variable<T>> {
        div_op(self, other)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
