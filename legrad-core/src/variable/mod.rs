// src/variable/mod.rs

use crate::array::{self, Array};
use crate::autograd::BackwardOp;
use crate::types::Numeric;
use log::debug;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod debug;

/// Internal state of a node in the computation graph.
pub struct VariableData<T: Numeric> {
    /// Label synthesized from the parents' labels and the operator symbol.
    pub(crate) name: String,
    pub(crate) value: Array<T>,
    /// Inputs consumed by the operation that produced this node. Empty for leaves.
    pub(crate) parents: Vec<Variable<T>>,
    /// Derivative rule, present exactly when `parents` is non-empty.
    pub(crate) grad_fn: Option<BackwardOp<T>>,
    /// Accumulated gradient, `None` until the first backward contribution.
    pub(crate) grad: Option<Array<T>>,
    pub(crate) trainable: bool,
}

// Unlinks uniquely owned ancestors one at a time so that dropping a deep chain
// does not recurse once per node.
impl<T: Numeric> Drop for VariableData<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            if Rc::strong_count(&parent.data) == 1 {
                if let Ok(mut data) = parent.data.try_borrow_mut() {
                    pending.append(&mut data.parents);
                }
            }
        }
    }
}

/// A value in the computation graph.
///
/// `Variable` is a cheap handle (`Rc<RefCell<VariableData>>`): clones share the
/// same node, so gradients accumulated through one clone are visible through
/// all of them. Every operation keeps strong handles to its inputs, so holding
/// the output keeps the whole upstream graph alive.
pub struct Variable<T: Numeric> {
    pub(crate) data: Rc<RefCell<VariableData<T>>>,
}

impl<T: Numeric> Clone for Variable<T> {
    fn clone(&self) -> Self {
        Variable {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: Numeric> Variable<T> {
    /// Creates a trainable leaf.
    pub fn new(name: impl Into<String>, value: impl Into<Array<T>>) -> Self {
        Self::with_trainable(name, value, true)
    }

    /// Creates a non-trainable leaf (a fixed input or target).
    pub fn constant(name: impl Into<String>, value: impl Into<Array<T>>) -> Self {
        Self::with_trainable(name, value, false)
    }

    pub fn with_trainable(
        name: impl Into<String>,
        value: impl Into<Array<T>>,
        trainable: bool,
    ) -> Self {
        Self::from_data(VariableData {
            name: name.into(),
            value: value.into(),
            parents: Vec::new(),
            grad_fn: None,
            grad: None,
            trainable,
        })
    }

    /// Creates a trainable leaf initialized with uniform samples in `[0, 1)`.
    pub fn random<R>(name: impl Into<String>, shape: &[usize], rng: &mut R) -> Self
    where
        Standard: Distribution<T>,
        R: Rng,
    {
        Self::new(name, array::random(shape, rng))
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(
        name: String,
        value: Array<T>,
        parents: Vec<Variable<T>>,
        grad_fn: BackwardOp<T>,
    ) -> Self {
        debug_assert_eq!(parents.len(), grad_fn.num_inputs());
        debug!("{}: created '{}' with shape {:?}", grad_fn.op_name(), name, value.shape());
        Self::from_data(VariableData {
            name,
            value,
            parents,
            grad_fn: Some(grad_fn),
            grad: None,
            trainable: false,
        })
    }

    fn from_data(data: VariableData<T>) -> Self {
        Variable {
            data: Rc::new(RefCell::new(data)),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, VariableData<T>> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, VariableData<T>> {
        self.data.borrow_mut()
    }

    pub fn name(&self) -> String {
        self.read_data().name.clone()
    }

    /// Returns a copy of the current value.
    pub fn value(&self) -> Array<T> {
        self.read_data().value.clone()
    }

    /// Returns a copy of the accumulated gradient, if any has arrived.
    pub fn grad(&self) -> Option<Array<T>> {
        self.read_data().grad.clone()
    }

    /// Returns handles to the parents, in operand order.
    pub fn parents(&self) -> Vec<Variable<T>> {
        self.read_data().parents.clone()
    }

    pub fn num_parents(&self) -> usize {
        self.read_data().parents.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    pub fn is_trainable(&self) -> bool {
        self.read_data().trainable
    }

    /// Returns a clone of the derivative rule, `None` for leaves.
    pub fn grad_fn(&self) -> Option<BackwardOp<T>> {
        self.read_data().grad_fn.clone()
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Variable<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "variable_test.rs"]
mod tests;
