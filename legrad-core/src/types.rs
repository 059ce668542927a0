use num_traits::{Float, FromPrimitive, NumAssignOps};
use std::fmt::{Debug, Display};

/// Element types usable as the payload of an [`Array`](crate::array::Array).
///
/// Strictly reserved for floating point types (`f32`, `f64`): every rule of the
/// engine needs `powf`, `sqrt` and reciprocals.
pub trait Numeric:
    Float // Includes Num + Copy + Neg etc.
    + NumAssignOps
    + FromPrimitive
    + Debug
    + Display
    + 'static
{
}

impl Numeric for f32 {}
impl Numeric for f64 {}
