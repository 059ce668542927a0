use super::*;
use crate::utils::testing::{check_array_near, check_scalar_near};

#[test]
fn test_div_by_constant() -> Result<()> {
    let a = Variable::new("a", 4.0_f64);
    let r = div_op(&a, 2.0)?;
    assert_eq!(r.name(), "a/2");
    check_scalar_near(&r.value(), 2.0, 1e-12);
    assert_eq!(r.num_parents(), 1);
    assert!(r.parents()[0].ptr_eq(&a));

    r.backward()?;
    check_scalar_near(&a.grad().expect("a.grad"), 0.5, 1e-12);
    Ok(())
}

#[test]
fn test_div_by_variable_keeps_literal_rule() -> Result<()> {
    let a = Variable::new("a", 6.0_f64);
    let b = Variable::new("b", 3.0_f64);
    let r = a.div(&b)?;
    assert_eq!(r.name(), "a/b");
    check_scalar_near(&r.value(), 2.0, 1e-12);
    assert_eq!(r.num_parents(), 2);

    r.backward()?;
    // (g * (1/b), g * a)
    check_scalar_near(&a.grad().expect("a.grad"), 1.0 / 3.0, 1e-12);
    check_scalar_near(&b.grad().expect("b.grad"), 6.0, 1e-12);
    Ok(())
}

#[test]
fn test_div_array_by_variable() -> Result<()> {
    let a = Variable::new("a", vec![2.0_f64, 4.0]);
    let b = Variable::new("b", vec![4.0_f64, 8.0]);
    let r = a.div(b.clone())?;
    check_array_near(&r.value(), &[2], &[0.5, 0.5], 1e-12);
    r.backward()?;
    check_array_near(&a.grad().expect("a.grad"), &[2], &[0.25, 0.125], 1e-12);
    check_array_near(&b.grad().expect("b.grad"), &[2], &[2.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_div_by_raw_array_is_rejected() {
    let a = Variable::new("a", 4.0_f64);
    let result = a.div(Array::from_vec(vec![1.0_f64, 2.0]));
    match result {
        Err(LegradError::UnsupportedOperand {
            operation,
            type_name,
        }) => {
            assert_eq!(operation, "div");
            assert!(type_name.contains("Array"), "type name was {}", type_name);
        }
        other => panic!("Expected UnsupportedOperand, got {:?}", other),
    }
}
