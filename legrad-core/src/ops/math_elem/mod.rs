pub mod sqrt;

pub use sqrt::sqrt_op;
