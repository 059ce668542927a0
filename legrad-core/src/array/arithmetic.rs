use super::Array;
use crate::error::Result;
use crate::types::Numeric;

// Elementwise primitives used by the forward pass and by the VJP rules.
impl<T: Numeric> Array<T> {
    pub fn add(&self, other: &Array<T>) -> Result<Array<T>> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Array<T>) -> Result<Array<T>> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    pub fn mul(&self, other: &Array<T>) -> Result<Array<T>> {
        self.zip_with(other, "mul", |a, b| a * b)
    }

    pub fn div(&self, other: &Array<T>) -> Result<Array<T>> {
        self.zip_with(other, "div", |a, b| a / b)
    }

    pub fn neg(&self) -> Array<T> {
        self.map(|a| -a)
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: T) -> Array<T> {
        self.map(|a| a * factor)
    }

    /// Elementwise `1 / x`.
    pub fn recip(&self) -> Array<T> {
        self.map(|a| a.recip())
    }

    pub fn powf(&self, exponent: T) -> Array<T> {
        self.map(|a| a.powf(exponent))
    }

    /// Elementwise square root. Negative elements yield NaN.
    pub fn sqrt(&self) -> Array<T> {
        self.map(|a| a.sqrt())
    }

    /// Mean over the leading axis.
    ///
    /// The result has shape `shape[1..]`, so a 1-d array reduces to a scalar.
    /// A scalar has no leading axis and is its own mean.
    pub fn mean(&self) -> Result<Array<T>> {
        let leading = match self.shape.first() {
            Some(&n) => n,
            None => return Ok(self.clone()),
        };
        let out_shape = self.shape[1..].to_vec();
        let inner: usize = out_shape.iter().product();

        let mut sums = vec![T::zero(); inner];
        for row in 0..leading {
            let start = row * inner;
            for (acc, &x) in sums.iter_mut().zip(&self.data[start..start + inner]) {
                *acc += x;
            }
        }
        // An empty leading axis gives 0/0 = NaN.
        let count = T::from_usize(leading).unwrap_or_else(T::nan);
        let data = sums.into_iter().map(|s| s / count).collect();
        Ok(Array {
            data,
            shape: out_shape,
        })
    }
}
