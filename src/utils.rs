/// `true` if `x` stands for minus infinity: either `-inf` itself or the
/// `f64::MIN` sentinel.
#[inline]
pub fn is_lower_unbounded(x: f64) -> bool {
    x <= f64::MIN
}

/// `true` if `x` stands for plus infinity: either `inf` itself or the
/// `f64::MAX` sentinel.
#[inline]
pub fn is_upper_unbounded(x: f64) -> bool {
    x >= f64::MAX
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unbounded_markers() {
        assert!(is_lower_unbounded(f64::NEG_INFINITY));
        assert!(is_lower_unbounded(f64::MIN));
        assert!(!is_lower_unbounded(-1e300));
        assert!(!is_lower_unbounded(f64::NAN));

        assert!(is_upper_unbounded(f64::INFINITY));
        assert!(is_upper_unbounded(f64::MAX));
        assert!(!is_upper_unbounded(1e300));
        assert!(!is_upper_unbounded(f64::NAN));
    }
}
