//! Assertion macros for simulation tests.

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use railrun_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f64, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a sequence never decreases.
///
/// # Example
///
/// ```rust
/// use railrun_test_helpers::assert_non_decreasing;
///
/// assert_non_decreasing!(&[0.0, 0.5, 0.5, 2.0]);
/// ```
#[macro_export]
macro_rules! assert_non_decreasing {
    ($collection:expr $(,)?) => {
        let collection = $collection;
        let mut iter = collection.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if curr < prev {
                    panic!(
                        "assertion failed: sequence decreases\n  at index {}: {:?} -> {:?}",
                        i + 1,
                        prev,
                        curr
                    );
                }
                prev = curr;
            }
        }
    };
}

/// Assert that a value lies within an inclusive range.
///
/// # Example
///
/// ```rust
/// use railrun_test_helpers::assert_within;
///
/// assert_within!(0.5, 0.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_within {
    ($value:expr, $min:expr, $max:expr $(,)?) => {
        let value = $value;
        let min = $min;
        let max = $max;
        if !(value >= min && value <= max) {
            panic!(
                "assertion failed: `{:?}` not within [{:?}, {:?}]",
                value, min, max
            );
        }
    };
}
