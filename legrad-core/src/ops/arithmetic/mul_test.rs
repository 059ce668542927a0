use super::*;
use crate::utils::testing::{check_array_near, check_scalar_near};

#[test]
fn test_mul_forward() -> Result<()> {
    let x = Variable::constant("x", vec![1.0_f64, 2.0, 3.0]);
    let w = Variable::new("W", 2.0_f64);
    let y = mul_op(&x, &w)?;
    assert_eq!(y.name(), "x*W");
    check_array_near(&y.value(), &[3], &[2.0, 4.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_mul_backward_swaps_operands() -> Result<()> {
    let a = Variable::new("a", 3.0_f64);
    let b = Variable::new("b", 4.0_f64);
    let c = a.mul(&b)?;
    c.backward()?;
    check_scalar_near(&a.grad().expect("a.grad"), 4.0, 1e-12);
    check_scalar_near(&b.grad().expect("b.grad"), 3.0, 1e-12);
    Ok(())
}

#[test]
fn test_mul_backward_uses_forward_values() -> Result<()> {
    // The rule captures operand values at forward time; later updates do not
    // change the gradients of an already built graph.
    let a = Variable::new("a", 3.0_f64);
    let b = Variable::new("b", 4.0_f64);
    let c = a.mul(&b)?;
    c.update(0.5);
    check_scalar_near(&a.value(), 1.5, 1e-12);
    c.backward()?;
    check_scalar_near(&a.grad().expect("a.grad"), 4.0, 1e-12);
    Ok(())
}

#[test]
fn test_mul_backward_with_initial_grad() -> Result<()> {
    let a = Variable::new("a", vec![1.0_f64, 2.0]);
    let b = Variable::new("b", vec![3.0_f64, 4.0]);
    let c = a.mul(&b)?;
    c.backward_with(crate::config::BackwardOptions::new().with_initial_grad(vec![1.0, 0.5]))?;
    check_array_near(&a.grad().expect("a.grad"), &[2], &[3.0, 2.0], 1e-12);
    check_array_near(&b.grad().expect("b.grad"), &[2], &[1.0, 1.0], 1e-12);
    Ok(())
}
