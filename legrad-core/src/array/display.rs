use super::utils::calculate_strides;
use super::Array;
use crate::types::Numeric;
use std::fmt;

// Scalars print bare, arrays as nested bracketed rows: `[[1 2] [3 4]]`.
impl<T: Numeric> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            return write!(f, "{}", self.data[0]);
        }
        if self.data.is_empty() {
            return write!(f, "{}", "[".repeat(self.rank()) + &"]".repeat(self.rank()));
        }

        // Size of the block spanned by each axis.
        let blocks: Vec<usize> = calculate_strides(&self.shape)
            .iter()
            .zip(&self.shape)
            .map(|(stride, dim)| stride * dim)
            .collect();

        for (i, value) in self.data.iter().enumerate() {
            let opening = blocks.iter().filter(|&&b| i % b == 0).count();
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", "[".repeat(opening), value)?;
            let closing = blocks.iter().filter(|&&b| (i + 1) % b == 0).count();
            write!(f, "{}", "]".repeat(closing))?;
        }
        Ok(())
    }
}
