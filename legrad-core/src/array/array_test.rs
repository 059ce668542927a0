use super::*;
use crate::error::LegradError;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_rejects_bad_length() {
    let result = Array::new(vec![1.0_f64, 2.0, 3.0], vec![2, 2]);
    assert_eq!(
        result,
        Err(LegradError::ArrayCreationError {
            data_len: 3,
            shape: vec![2, 2]
        })
    );
}

#[test]
fn test_scalar_and_item() {
    let s = Array::scalar(4.0_f64);
    assert!(s.is_scalar());
    assert_eq!(s.rank(), 0);
    assert_eq!(s.item(), Some(4.0));
    assert_eq!(Array::from_vec(vec![1.0_f64, 2.0]).item(), None);
}

#[test]
fn test_elementwise_same_shape() -> Result<()> {
    let a = Array::new(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2])?;
    let b = Array::new(vec![4.0_f64, 3.0, 2.0, 1.0], vec![2, 2])?;
    assert_eq!(a.add(&b)?.data(), &[5.0, 5.0, 5.0, 5.0]);
    assert_eq!(a.sub(&b)?.data(), &[-3.0, -1.0, 1.0, 3.0]);
    assert_eq!(a.mul(&b)?.data(), &[4.0, 6.0, 6.0, 4.0]);
    assert_eq!(a.div(&b)?.shape(), &[2, 2]);
    Ok(())
}

#[test]
fn test_elementwise_scalar_either_side() -> Result<()> {
    let a = Array::from_vec(vec![2.0_f64, 4.0]);
    let two = Array::scalar(2.0_f64);
    assert_eq!(a.div(&two)?.data(), &[1.0, 2.0]);
    assert_eq!(two.div(&a)?.data(), &[1.0, 0.5]);
    assert_eq!(two.sub(&a)?.shape(), &[2]);
    Ok(())
}

#[test]
fn test_elementwise_shape_mismatch() {
    let a = Array::from_vec(vec![1.0_f64, 2.0]);
    let b = Array::from_vec(vec![1.0_f64, 2.0, 3.0]);
    assert!(matches!(
        a.add(&b),
        Err(LegradError::ShapeMismatch { ref operation, .. }) if operation == "add"
    ));
}

#[test]
fn test_mean_leading_axis() -> Result<()> {
    let v = Array::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0]);
    let m = v.mean()?;
    assert!(m.is_scalar());
    assert_relative_eq!(m.data()[0], 2.5);

    let t = Array::new(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let m = t.mean()?;
    assert_eq!(m.shape(), &[3]);
    assert_relative_eq!(m.data(), &[2.5, 3.5, 4.5][..]);
    Ok(())
}

#[test]
fn test_mean_of_scalar_is_itself() -> Result<()> {
    let s = Array::scalar(1.5_f64);
    assert_eq!(s.mean()?, s);
    Ok(())
}

#[test]
fn test_dot_inner_product() -> Result<()> {
    let a = Array::from_vec(vec![1.0_f64, 2.0, 3.0]);
    let b = Array::from_vec(vec![4.0_f64, 5.0, 6.0]);
    let d = a.dot(&b)?;
    assert!(d.is_scalar());
    assert_eq!(d.item(), Some(32.0));
    Ok(())
}

#[test]
fn test_dot_matrix_product() -> Result<()> {
    let a = Array::new(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let b = Array::new(vec![7.0_f64, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2])?;
    let d = a.dot(&b)?;
    assert_eq!(d.shape(), &[2, 2]);
    assert_eq!(d.data(), &[58.0, 64.0, 139.0, 154.0]);
    Ok(())
}

#[test]
fn test_dot_matrix_vector() -> Result<()> {
    let a = Array::new(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2])?;
    let v = Array::from_vec(vec![1.0_f64, 1.0]);
    let d = a.dot(&v)?;
    assert_eq!(d.shape(), &[2]);
    assert_eq!(d.data(), &[3.0, 7.0]);

    let d = v.dot(&a)?;
    assert_eq!(d.shape(), &[2]);
    assert_eq!(d.data(), &[4.0, 6.0]);
    Ok(())
}

#[test]
fn test_dot_scalar_is_product() -> Result<()> {
    let a = Array::from_vec(vec![1.0_f64, 2.0]);
    let d = a.dot(&Array::scalar(3.0))?;
    assert_eq!(d.data(), &[3.0, 6.0]);
    Ok(())
}

#[test]
fn test_dot_contraction_mismatch() {
    let a = Array::from_vec(vec![1.0_f64, 2.0]);
    let b = Array::from_vec(vec![1.0_f64, 2.0, 3.0]);
    assert_eq!(
        a.dot(&b),
        Err(LegradError::ShapeMismatch {
            expected: vec![2],
            actual: vec![3],
            operation: "dot".to_string(),
        })
    );
}

#[test]
fn test_display() -> Result<()> {
    assert_eq!(Array::scalar(3.0_f64).to_string(), "3");
    assert_eq!(Array::from_vec(vec![1.0_f64, 2.5]).to_string(), "[1 2.5]");
    let m = Array::new(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2])?;
    assert_eq!(m.to_string(), "[[1 2] [3 4]]");
    assert_eq!(Array::<f64>::new(vec![], vec![0])?.to_string(), "[]");
    Ok(())
}

#[test]
fn test_random_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(42);
    let r: Array<f64> = random(&[4, 3], &mut rng);
    assert_eq!(r.shape(), &[4, 3]);
    assert!(r.data().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_ones_like() {
    let a = Array::from_vec(vec![5.0_f32, 6.0, 7.0]);
    let o = ones_like(&a);
    assert_eq!(o.shape(), &[3]);
    assert_eq!(o.data(), &[1.0, 1.0, 1.0]);
}
