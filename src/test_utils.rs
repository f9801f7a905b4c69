/// Assert that `result` agrees with `expected` to within `relative_error`.
/// NaN and infinite values only match values of the same kind.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    let status = if result.is_nan() || expected.is_nan() {
        result.is_nan() == expected.is_nan()
    } else if result.is_infinite() || expected.is_infinite() {
        result == expected
    } else if expected != 0.0 {
        (result - expected).abs() / expected.abs() <= relative_error
    } else {
        result == 0.0
    };

    assert!(
        status,
        "observed: {:?}, expected: {:?}, relative error: {:e}",
        result,
        expected,
        relative_error
    );
}

/// Assert that `result` lies within `absolute_error` of `expected`.
pub(crate) fn test_abs(result: f64, expected: f64, absolute_error: f64) {
    assert!(
        (result - expected).abs() <= absolute_error,
        "observed: {:?}, expected: {:?}, absolute error: {:e}",
        result,
        expected,
        absolute_error
    );
}

/// Function 1 for integration testing
pub(crate) fn f1(x: f64, alpha: f64) -> f64 {
    x.powf(alpha) * x.recip().ln()
}

/// Function 3 for integration testing
pub(crate) fn f3(x: f64, alpha: f64) -> f64 {
    (2f64.powf(alpha) * x.sin()).cos()
}

/// Function 15 for integration testing
pub(crate) fn f15(x: f64, alpha: f64) -> f64 {
    x * x * (-2f64.powf(-alpha) * x).exp()
}
