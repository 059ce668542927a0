use super::utils::numel;
use super::Array;
use crate::error::{LegradError, Result};
use crate::types::Numeric;

impl<T: Numeric> Array<T> {
    /// Generalized dot product.
    ///
    /// - a scalar on either side is an elementwise product,
    /// - 1-d by 1-d is the inner product (scalar result),
    /// - otherwise the last axis of `self` is contracted with the second-to-last
    ///   axis of `other` (its only axis when `other` is 1-d).
    ///
    /// The result shape is `self.shape[..-1] ++ other.shape[..-2] ++ other.shape[-1..]`.
    ///
    /// # Errors
    /// Returns `LegradError::ShapeMismatch` when the contracted lengths differ.
    pub fn dot(&self, other: &Array<T>) -> Result<Array<T>> {
        if self.is_scalar() || other.is_scalar() {
            return self.mul(other);
        }

        let a_rank = self.rank();
        let b_rank = other.rank();
        let k = self.shape[a_rank - 1];
        let k_other = if b_rank == 1 {
            other.shape[0]
        } else {
            other.shape[b_rank - 2]
        };
        if k != k_other {
            return Err(LegradError::ShapeMismatch {
                expected: vec![k],
                actual: vec![k_other],
                operation: "dot".to_string(),
            });
        }

        let a_outer = &self.shape[..a_rank - 1];
        let (b_batch, n) = if b_rank == 1 {
            (&other.shape[..0], 1)
        } else {
            (&other.shape[..b_rank - 2], other.shape[b_rank - 1])
        };

        let mut out_shape = a_outer.to_vec();
        out_shape.extend_from_slice(b_batch);
        if b_rank > 1 {
            out_shape.push(n);
        }

        let m = numel(a_outer);
        let batches = numel(b_batch);
        let mut data = Vec::with_capacity(m * batches * n);
        for i in 0..m {
            let a_row = &self.data[i * k..(i + 1) * k];
            for batch in 0..batches {
                let b_block = &other.data[batch * k * n..(batch + 1) * k * n];
                for j in 0..n {
                    let mut acc = T::zero();
                    for (l, &a) in a_row.iter().enumerate() {
                        acc += a * b_block[l * n + j];
                    }
                    data.push(acc);
                }
            }
        }

        Array::new(data, out_shape)
    }
}
