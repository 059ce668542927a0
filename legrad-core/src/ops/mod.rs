//! # Variable Operations Module (`ops`)
//!
//! Every operation lives in its own file and follows the same layout:
//!
//! - an `xxx_op` function computing the forward value through
//!   [`Array`](crate::array::Array), capturing what the derivative rule needs
//!   into a [`BackwardOp`](crate::autograd::BackwardOp) variant, and returning
//!   a new [`Variable`](crate::Variable) whose parents are the operands (left
//!   first),
//! - an `xxx_backward` function holding the local vector-Jacobian product,
//! - the `Variable` method forwarding to `xxx_op`.
//!
//! Labels of the new variables are composed from the operands' labels
//! (`x*W`, `a^3`, `Mean(a)`) and are used for diagnostics only.

pub mod arithmetic;
pub mod linalg;
pub mod math_elem;
pub mod reduction;

pub use arithmetic::{add_op, div_op, mul_op, pow_op, sub_op, Operand};
pub use linalg::dot_op;
pub use math_elem::sqrt_op;
pub use reduction::mean_op;
