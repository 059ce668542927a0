//! # Fitting `y = x * W + b` with legrad
//!
//! Builds the squared error of a one-feature linear model, backpropagates it
//! and applies the naive update a few times, printing the graph and the
//! gradients along the way.
//!
//! Run with:
//! `RUST_LOG=info cargo run --example linear_regression`

use legrad_core::{BackwardOptions, LegradError, Variable};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), LegradError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(0);

    let x = Variable::constant("x", 1.0_f64);
    let w: Variable<f64> = Variable::random("W", &[], &mut rng);
    let b: Variable<f64> = Variable::random("b", &[], &mut rng);
    let y_true = Variable::constant("y", 2.0_f64);

    for step in 0..3 {
        let y_pred = x.mul(&w)?.add(&b)?;
        let loss = y_true.sub(&y_pred)?.pow(2.0)?;
        println!("step {}: {}", step, loss);
        println!("  graph: {:?}", loss);

        loss.backward_with(BackwardOptions::new().verbose(step == 0))?;
        if let (Some(gw), Some(gb)) = (w.grad(), b.grad()) {
            println!("  dL/dW = {}, dL/db = {}", gw, gb);
        }

        loss.update(0.1);
        println!("  W = {}, b = {}", w.value(), b.value());
    }
    Ok(())
}
