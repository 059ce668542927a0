use crate::array::Array;
use crate::error::Result;
use crate::ops::{arithmetic, linalg, math_elem, reduction};
use crate::types::Numeric;

/// Local derivative rule of the operation that produced a non-leaf variable.
///
/// Each variant captures, at forward time, exactly the operand values its
/// vector-Jacobian product needs. `backward` maps the gradient flowing into the
/// output onto one gradient per input, in the same order as the variable's
/// parents.
#[derive(Debug, Clone)]
pub enum BackwardOp<T: Numeric> {
    Add,
    Sub,
    Mul { a: Array<T>, b: Array<T> },
    Div { a: Array<T>, b: Array<T> },
    /// Division by a plain number: the divisor is not part of the graph.
    DivScalar { b: T },
    Pow { base: Array<T>, exponent: T },
    Mean { input_shape: Vec<usize> },
    Sqrt,
    Dot { a: Array<T>, b: Array<T> },
}

impl<T: Numeric> BackwardOp<T> {
    /// Number of inputs the operation consumed, i.e. gradients `backward` returns.
    pub fn num_inputs(&self) -> usize {
        match self {
            BackwardOp::Add
            | BackwardOp::Sub
            | BackwardOp::Mul { .. }
            | BackwardOp::Div { .. }
            | BackwardOp::Dot { .. } => 2,
            BackwardOp::DivScalar { .. }
            | BackwardOp::Pow { .. }
            | BackwardOp::Mean { .. }
            | BackwardOp::Sqrt => 1,
        }
    }

    pub fn op_name(&self) -> &'static str {
        match self {
            BackwardOp::Add => "add",
            BackwardOp::Sub => "sub",
            BackwardOp::Mul { .. } => "mul",
            BackwardOp::Div { .. } | BackwardOp::DivScalar { .. } => "div",
            BackwardOp::Pow { .. } => "pow",
            BackwardOp::Mean { .. } => "mean",
            BackwardOp::Sqrt => "sqrt",
            BackwardOp::Dot { .. } => "dot",
        }
    }

    /// Computes the gradient for each input given `grad_output`.
    ///
    /// # Errors
    /// Propagates whatever the numeric layer reports when `grad_output` cannot
    /// be combined with the captured values (e.g. a shape mismatch).
    pub fn backward(&self, grad_output: &Array<T>) -> Result<Vec<Array<T>>> {
        match self {
            BackwardOp::Add => Ok(arithmetic::add::add_backward(grad_output)),
            BackwardOp::Sub => Ok(arithmetic::sub::sub_backward(grad_output)),
            BackwardOp::Mul { a, b } => arithmetic::mul::mul_backward(grad_output, a, b),
            BackwardOp::Div { a, b } => arithmetic::div::div_backward(grad_output, a, b),
            BackwardOp::DivScalar { b } => {
                Ok(arithmetic::div::div_scalar_backward(grad_output, *b))
            }
            BackwardOp::Pow { base, exponent } => {
                arithmetic::pow::pow_backward(grad_output, base, *exponent)
            }
            BackwardOp::Mean { input_shape } => reduction::mean::mean_backward(input_shape),
            BackwardOp::Sqrt => Ok(math_elem::sqrt::sqrt_backward(grad_output)),
            BackwardOp::Dot { a, b } => linalg::dot::dot_backward(grad_output, a, b),
        }
    }
}
