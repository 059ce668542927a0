use crate::array::Array;
use crate::error::{LegradError, Result};
use crate::types::Numeric;
use crate::variable::{Variable, VariableData};
use log::{info, trace};
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

/// Identity of a node, stable across clones of its `Variable` handle.
pub type NodeId<T> = *const RefCell<VariableData<T>>;

impl<T: Numeric> Variable<T> {
    pub(crate) fn node_id(&self) -> NodeId<T> {
        Rc::as_ptr(&self.data)
    }
}

/// Walks the graph from `start`, depth-first in parent order, and sums every
/// incoming gradient per node.
///
/// Nothing is written to the graph: each entry of the returned list holds the
/// node and its new total gradient (its previous `grad` plus all contributions
/// of this pass). The traversal is driven by an explicit stack; parents are
/// pushed in reverse so they are visited first to last, exactly as the
/// recursive formulation would.
pub(crate) fn accumulate_gradients<T: Numeric>(
    start: &Variable<T>,
    initial_grad: Array<T>,
    verbose: bool,
) -> Result<Vec<(Variable<T>, Array<T>)>> {
    let mut pending: HashMap<NodeId<T>, (Variable<T>, Array<T>)> = HashMap::new();
    let mut stack = vec![(start.clone(), initial_grad)];
    let mut visits = 0usize;

    while let Some((node, grad)) = stack.pop() {
        visits += 1;
        {
            let data = node.read_data();
            if verbose {
                info!("incoming grad to {} = {}", data.name, grad);
            }
            trace!("[backward] visiting '{}'", data.name);

            if let Some(op) = data.grad_fn.as_ref() {
                let input_grads = op.backward(&grad)?;
                if input_grads.len() != data.parents.len() {
                    return Err(LegradError::BackwardError(format!(
                        "{} returned {} gradients, but '{}' has {} parents",
                        op.op_name(),
                        input_grads.len(),
                        data.name,
                        data.parents.len()
                    )));
                }
                for (parent, parent_grad) in data.parents.iter().zip(input_grads).rev() {
                    stack.push((parent.clone(), parent_grad));
                }
            }
        }

        match pending.entry(node.node_id()) {
            Entry::Occupied(mut entry) => {
                let total = entry.get().1.add(&grad)?;
                entry.get_mut().1 = total;
            }
            Entry::Vacant(entry) => {
                let total = match node.read_data().grad.as_ref() {
                    Some(existing) => existing.add(&grad)?,
                    None => grad,
                };
                entry.insert((node, total));
            }
        }
    }

    trace!("[backward] {} visits over {} nodes", visits, pending.len());
    Ok(pending.into_values().collect())
}

/// Lists the nodes an update pass visits, in visiting order.
///
/// Pre-order, parents first to last, without deduplication: a node reachable
/// through several paths appears once per path.
pub(crate) fn update_visits<T: Numeric>(start: &Variable<T>) -> Vec<Variable<T>> {
    let mut visits = Vec::new();
    let mut stack = vec![start.clone()];
    while let Some(node) = stack.pop() {
        for parent in node.read_data().parents.iter().rev() {
            stack.push(parent.clone());
        }
        visits.push(node);
    }
    visits
}
