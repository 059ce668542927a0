// src/array/mod.rs

use crate::error::{LegradError, Result};
use crate::types::Numeric;

mod arithmetic;
pub mod create;
mod display;
mod dot;
pub mod utils;

pub use create::{ones, ones_like, random};

/// Numeric payload carried by a [`Variable`](crate::Variable).
///
/// An `Array` is either a scalar (empty shape, one element) or an
/// n-dimensional array stored contiguously in row-major order. Arrays are
/// plain values: cloning copies the data.
#[derive(Clone, Debug, PartialEq)]
pub struct Array<T: Numeric> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Vec<usize>,
}

impl<T: Numeric> Array<T> {
    /// Creates a new array from row-major data and a shape.
    ///
    /// # Errors
    /// Returns `LegradError::ArrayCreationError` if `data.len()` does not match the
    /// number of elements implied by `shape`.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(LegradError::ArrayCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Array { data, shape })
    }

    /// Creates a rank-0 array holding `value`.
    pub fn scalar(value: T) -> Self {
        Array {
            data: vec![value],
            shape: vec![],
        }
    }

    /// Creates a 1-d array from a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        let shape = vec![data.len()];
        Array { data, shape }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Returns the single element of a scalar or one-element array.
    pub fn item(&self) -> Option<T> {
        match self.data.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Applies `f` to every element.
    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Array {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Combines two arrays elementwise.
    ///
    /// Shapes must be equal, or one side must be a scalar which is then
    /// combined with every element of the other side.
    pub(crate) fn zip_with<F>(&self, other: &Array<T>, operation: &str, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape == other.shape {
            let data = self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect();
            return Ok(Array {
                data,
                shape: self.shape.clone(),
            });
        }
        if other.is_scalar() {
            let b = other.data[0];
            return Ok(self.map(|a| f(a, b)));
        }
        if self.is_scalar() {
            let a = self.data[0];
            return Ok(other.map(|b| f(a, b)));
        }
        Err(LegradError::ShapeMismatch {
            expected: self.shape.clone(),
            actual: other.shape.clone(),
            operation: operation.to_string(),
        })
    }
}

impl<T: Numeric> From<T> for Array<T> {
    fn from(value: T) -> Self {
        Array::scalar(value)
    }
}

impl<T: Numeric> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Array::from_vec(data)
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod tests;
