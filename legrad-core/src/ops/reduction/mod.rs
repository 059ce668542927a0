// src/ops/reduction/mod.rs

pub mod mean;

pub use mean::mean_op;
