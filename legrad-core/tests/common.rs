use legrad_core::Array;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Helper to initialize logger only once for all tests in a binary.
#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Unwraps a scalar gradient or value, panicking with context otherwise.
#[allow(dead_code)]
pub fn scalar(array: Option<Array<f64>>, what: &str) -> f64 {
    array
        .and_then(|a| a.item())
        .unwrap_or_else(|| panic!("{} should hold a scalar", what))
}
