//! Testing utilities for elasticnet.
//!
//! Assertion helpers shared by unit tests and the integration tests under
//! `tests/`.
//!
//! ```ignore
//! use elasticnet::testing::{assert_slice_approx_eq, DEFAULT_TOLERANCE};
//! ```

use approx::AbsDiffEq;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for floating point comparisons of O(1) values.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Floating Point Assertions
// =============================================================================

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance.
///
/// # Examples
///
/// ```
/// # use elasticnet::assert_approx_eq;
/// assert_approx_eq!(1.0, 1.0001, 0.001);
/// ```
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that two slices are approximately equal element-wise.
///
/// On failure, lists every differing index with expected and actual values.
///
/// # Panics
///
/// Panics if lengths differ or any element differs by more than tolerance.
pub fn assert_slice_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    let diff = diff_values(actual, expected, tolerance);
    if !diff.is_empty() {
        panic!("\n{context}: values differ (tolerance {tolerance:.0e})\n\n{diff}");
    }
}

/// Git-style listing of the entries that differ.
fn diff_values(actual: &[f64], expected: &[f64], tolerance: f64) -> String {
    let mut result = String::new();
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if !a.abs_diff_eq(e, tolerance) {
            result.push_str(&format!("[{i:3}] - {e:>14.8}  (expected)\n"));
            result.push_str(&format!("      + {a:>14.8}  (actual, Δ={:+.2e})\n", a - e));
        }
    }
    result
}
