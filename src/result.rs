use crate::value::IntegrandValue;
use log::warn;
use std::ops::Add;

/// Structure for the result of an integration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationResult<V> {
    /// Value of the integration
    pub estimate: V,
    /// Estimated error of the integration. Summed over the leaves of the
    /// subdivision, each leaf contributing the difference between its Kronrod
    /// and Gauss estimates.
    pub error: f64,
    /// Estimate of the integral of `|f|`. A value much larger than
    /// `|estimate|` points to an ill-conditioned integral.
    pub l1_norm: f64,
}

impl<V: IntegrandValue> IntegrationResult<V> {
    pub fn new(estimate: V, error: f64, l1_norm: f64) -> Self {
        IntegrationResult {
            estimate,
            error,
            l1_norm,
        }
    }

    /// Result of integrating over an empty interval.
    pub fn zero() -> Self {
        IntegrationResult::new(V::zero(), 0.0, 0.0)
    }

    /// Error estimate relative to the magnitude of the estimate.
    pub fn relative_error(&self) -> f64 {
        self.error / self.estimate.magnitude()
    }

    /// Ratio of the L1 norm to the magnitude of the estimate. Values near one
    /// mean little cancellation took place; large values mean the estimate is
    /// the small difference of large contributions.
    pub fn condition_ratio(&self) -> f64 {
        self.l1_norm / self.estimate.magnitude()
    }

    /// Same result for the reversed interval.
    pub(crate) fn reversed(self) -> Self {
        IntegrationResult {
            estimate: -self.estimate,
            ..self
        }
    }

    pub(crate) fn issue_warning(&self, target_relative_error: f64) {
        let tolerance = (self.estimate * target_relative_error).magnitude();
        if self.error > tolerance || self.error.is_nan() {
            warn!(
                "Integration did not reach the requested relative error {:e}: \
                 estimate = {:?}, error = {:e}",
                target_relative_error, self.estimate, self.error
            );
        }
    }
}

impl<V: IntegrandValue> Add for IntegrationResult<V> {
    type Output = IntegrationResult<V>;

    fn add(self, rhs: Self) -> Self::Output {
        IntegrationResult {
            estimate: self.estimate + rhs.estimate,
            error: self.error + rhs.error,
            l1_norm: self.l1_norm + rhs.l1_norm,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num::complex::Complex;

    #[test]
    fn test_add_is_fieldwise() {
        let left = IntegrationResult::new(1.5, 1e-12, 2.0);
        let right = IntegrationResult::new(-0.5, 2e-12, 1.0);
        let sum = left + right;

        assert_eq!(sum.estimate, 1.0);
        assert_eq!(sum.error, 3e-12);
        assert_eq!(sum.l1_norm, 3.0);
    }

    #[test]
    fn test_reversed_keeps_error_and_norm() {
        let res = IntegrationResult::new(Complex::new(1.0, -2.0), 1e-9, 3.0).reversed();

        assert_eq!(res.estimate, Complex::new(-1.0, 2.0));
        assert_eq!(res.error, 1e-9);
        assert_eq!(res.l1_norm, 3.0);
    }

    #[test]
    fn test_diagnostics() {
        let res = IntegrationResult::new(-2.0, 1e-6, 8.0);

        assert_eq!(res.relative_error(), 5e-7);
        assert_eq!(res.condition_ratio(), 4.0);

        let res: IntegrationResult<f64> = IntegrationResult::zero();
        assert_eq!(res.estimate, 0.0);
        assert_eq!(res.error, 0.0);
        assert_eq!(res.l1_norm, 0.0);
    }
}
