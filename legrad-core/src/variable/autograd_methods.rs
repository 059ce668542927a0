use super::Variable;
use crate::autograd::graph::{accumulate_gradients, update_visits};
use crate::config::{BackwardOptions, DEFAULT_STEP_SIZE};
use crate::error::Result;
use crate::types::Numeric;
use log::debug;

impl<T: Numeric> Variable<T> {
    /// Backpropagates a gradient of `1` from this variable to every upstream variable.
    ///
    /// See [`backward_with`](Self::backward_with).
    pub fn backward(&self) -> Result<()> {
        self.backward_with(BackwardOptions::default())
    }

    /// Performs the backward pass starting from this variable.
    ///
    /// The incoming gradient (`options.initial_grad`, `1` by default) is
    /// accumulated into this variable, mapped through its derivative rule onto
    /// its parents, and so on depth-first down to the leaves. Contributions are
    /// summed into each variable's `grad`: calling `backward` again without
    /// resetting accumulates further. Trainability is not consulted.
    ///
    /// # Errors
    /// Returns the numeric layer's error if a derivative rule cannot combine
    /// its inputs (e.g. a shape mismatch). In that case no `grad` is modified.
    pub fn backward_with(&self, options: BackwardOptions<T>) -> Result<()> {
        let totals = accumulate_gradients(self, options.seed(), options.verbose)?;
        debug!(
            "backward from '{}': {} variables received gradients",
            self.name(),
            totals.len()
        );
        for (node, grad) in totals {
            node.write_data().grad = Some(grad);
        }
        Ok(())
    }

    /// Naive parameter update with a step size of `1e-3`.
    pub fn update_default(&self) {
        let step = T::from_f64(DEFAULT_STEP_SIZE).unwrap_or_else(T::epsilon);
        self.update(step)
    }

    /// Decays every trainable variable reachable from this one.
    ///
    /// Each visit of a trainable variable replaces its value with
    /// `value - value * step_size`; `grad` is not read. Variables reachable
    /// through several paths are decayed once per path.
    pub fn update(&self, step_size: T) {
        let visits = update_visits(self);
        let mut updated = 0usize;
        for node in &visits {
            let mut data = node.write_data();
            if data.trainable {
                data.value = data.value.map(|v| v - v * step_size);
                updated += 1;
            }
        }
        debug!(
            "update from '{}': {} visits, {} trainable",
            self.name(),
            visits.len(),
            updated
        );
    }
}
