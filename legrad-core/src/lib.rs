//! # legrad
//!
//! A naive reverse-mode automatic differentiation engine.
//!
//! Composing [`Variable`]s builds a computation graph; [`Variable::backward`]
//! accumulates the gradient of the output into every upstream variable, and
//! [`Variable::update`] decays every trainable variable reachable from it.
//!
//! ```
//! use legrad_core::Variable;
//!
//! # fn main() -> Result<(), legrad_core::LegradError> {
//! let x = Variable::constant("x", 1.0_f64);
//! let w = Variable::new("W", 3.0);
//! let b = Variable::new("b", 0.0);
//!
//! let y_pred = x.mul(&w)?.add(&b)?;
//! y_pred.backward()?;
//!
//! assert_eq!(y_pred.value().item(), Some(3.0));
//! assert_eq!(w.grad().and_then(|g| g.item()), Some(1.0));
//! # Ok(())
//! # }
//! ```

pub mod array;
pub mod autograd;
pub mod config;
pub mod error;
pub mod ops;
pub mod types;
pub mod utils;
pub mod variable;

pub use array::Array;
pub use config::{BackwardOptions, DEFAULT_STEP_SIZE};
pub use error::LegradError;
pub use ops::Operand;
pub use types::Numeric;
pub use variable::Variable;
// Re-export traits required by public functions/structs
pub use num_traits;
