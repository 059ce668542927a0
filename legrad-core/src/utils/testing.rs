use crate::array::Array;
use crate::types::Numeric;

/// Checks that an array has the expected shape and that its data is within
/// `tolerance` of `expected_data`, element by element.
///
/// Panics with the first offending index otherwise.
pub fn check_array_near<T: Numeric>(
    actual: &Array<T>,
    expected_shape: &[usize],
    expected_data: &[T],
    tolerance: T,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.data().len(),
        expected_data.len(),
        "Data length mismatch"
    );
    for (i, (a, e)) in actual.data().iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Shorthand for the scalar case.
pub fn check_scalar_near<T: Numeric>(actual: &Array<T>, expected: T, tolerance: T) {
    check_array_near(actual, &[], &[expected], tolerance);
}

/// Installs `env_logger` for the test binary. Safe to call from every test.
#[cfg(test)]
pub(crate) fn setup_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
