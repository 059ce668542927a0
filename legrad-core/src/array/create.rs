// src/array/create.rs

use super::Array;
use crate::types::Numeric;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

fn full<T: Numeric>(shape: &[usize], value: T) -> Array<T> {
    let numel = shape.iter().product();
    Array {
        data: vec![value; numel],
        shape: shape.to_vec(),
    }
}

/// Creates a new array filled with ones with the specified shape.
pub fn ones<T: Numeric>(shape: &[usize]) -> Array<T> {
    full(shape, T::one())
}

pub fn ones_like<T: Numeric>(array: &Array<T>) -> Array<T> {
    ones(array.shape())
}

/// Creates an array of uniform samples in `[0, 1)`.
pub fn random<T, R>(shape: &[usize], rng: &mut R) -> Array<T>
where
    T: Numeric,
    Standard: Distribution<T>,
    R: Rng,
{
    let numel = shape.iter().product();
    let data = (0..numel).map(|_| rng.gen::<T>()).collect();
    Array {
        data,
        shape: shape.to_vec(),
    }
}
