// src/variable/debug.rs
use super::Variable;
use crate::types::Numeric;
use std::fmt;

/// Renders the value and, recursively, every parent:
/// `Variable(value=3, parents=[Variable(value=1, parents=[]), ...])`.
impl<T: Numeric> fmt::Debug for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                write!(f, "Variable(value={}, parents=[", guard.value)?;
                for (i, parent) in guard.parents.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", parent)?;
                }
                write!(f, "])")
            }
            Err(_) => write!(f, "Variable(<mutably borrowed>)"),
        }
    }
}

impl<T: Numeric> fmt::Display for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(f, "{}={}", guard.name, guard.value),
            Err(_) => write!(f, "<mutably borrowed>"),
        }
    }
}
