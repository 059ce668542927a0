//! Derivative rules and graph traversal.
//!
//! The graph is implicit: each non-leaf [`Variable`](crate::Variable) holds its
//! parents and the [`BackwardOp`] that maps an upstream gradient onto them.

pub mod backward_op;
pub mod graph;

pub use backward_op::BackwardOp;
