use super::*;
use crate::utils::testing::{check_array_near, check_scalar_near};

#[test]
fn test_sqrt_forward() -> Result<()> {
    let a = Variable::new("a", vec![4.0_f64, 9.0, 16.0]);
    let s = sqrt_op(&a)?;
    assert_eq!(s.name(), "sqrt(a)");
    check_array_near(&s.value(), &[3], &[2.0, 3.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_sqrt_backward_depends_on_incoming_grad_only() -> Result<()> {
    let a = Variable::new("a", 9.0_f64);
    let s = a.sqrt()?;
    // g = 1: 0.5 * 1^-0.5
    s.backward()?;
    check_scalar_near(&a.grad().expect("a.grad"), 0.5, 1e-12);

    let b = Variable::new("b", 9.0_f64);
    let t = b.sqrt()?;
    // g = 4: 0.5 * 4^-0.5 = 0.25, whatever the input value
    t.backward_with(crate::config::BackwardOptions::new().with_initial_grad(4.0))?;
    check_scalar_near(&b.grad().expect("b.grad"), 0.25, 1e-12);
    Ok(())
}

#[test]
fn test_sqrt_negative_is_nan() -> Result<()> {
    let a = Variable::new("a", -1.0_f64);
    let s = a.sqrt()?;
    assert!(s.value().data()[0].is_nan());
    Ok(())
}
