//! Variable substitutions mapping an integration interval onto a bounded
//! canonical interval.
//!
//! The substitutions follow Shampine, L. F. (2008), "Vectorized adaptive
//! quadrature in MATLAB", J. Comput. Appl. Math. 211(2), 131-140. Every
//! transformed integrand already carries the derivative of its substitution.

use crate::utils::{is_lower_unbounded, is_upper_unbounded};
use crate::value::IntegrandValue;

/// Shape of an integration interval `[begin, end]` with `begin <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Domain {
    /// `(-inf, inf)`
    Whole,
    /// `[begin, inf)`
    UpperUnbounded { begin: f64 },
    /// `(-inf, end]`
    LowerUnbounded { end: f64 },
    /// `[begin, end]`
    Finite { begin: f64, end: f64 },
}

impl Domain {
    /// Classify `[begin, end]`. Either infinity or the `f64::MIN` / `f64::MAX`
    /// sentinels mark an unbounded end.
    pub fn classify(begin: f64, end: f64) -> Domain {
        match (is_lower_unbounded(begin), is_upper_unbounded(end)) {
            (true, true) => Domain::Whole,
            (false, true) => Domain::UpperUnbounded { begin },
            (true, false) => Domain::LowerUnbounded { end },
            (false, false) => Domain::Finite { begin, end },
        }
    }

    /// Interval the transformed integrand is integrated over.
    pub fn canonical_interval(&self) -> (f64, f64) {
        match *self {
            Domain::Whole | Domain::Finite { .. } => (-1.0, 1.0),
            Domain::UpperUnbounded { .. } => (0.0, 1.0),
            Domain::LowerUnbounded { .. } => (-1.0, 0.0),
        }
    }

    /// Value at `t` of the transformed integrand, `f(g(t)) g'(t)`.
    pub fn substitute<V, F>(&self, f: &F, t: f64) -> V
    where
        V: IntegrandValue,
        F: Fn(f64) -> V,
    {
        match *self {
            // g(t) = t / (1 - t^2), g'(t) = (1 + t^2) / (1 - t^2)^2
            Domain::Whole => {
                let q = 1.0 - t * t;
                f(t / q) * (1.0 + t * t) / (q * q)
            }
            // g(s) = a + (s / (1 - s))^2, g'(s) = 2 s / (1 - s)^3
            Domain::UpperUnbounded { begin } => {
                let q = 1.0 - t;
                let u = t / q;
                f(begin + u * u) * (2.0 * t) / (q * q * q)
            }
            // g(s) = b - (s / (1 + s))^2, g'(s) = -2 s / (1 + s)^3
            Domain::LowerUnbounded { end } => {
                let q = 1.0 + t;
                let u = t / q;
                f(end - u * u) * (-2.0 * t) / (q * q * q)
            }
            // g(t) = (b - a) t (3 - t^2) / 4 + (b + a) / 2,
            // g'(t) = 3 (b - a) (1 - t^2) / 4
            Domain::Finite { begin, end } => {
                // scaled before subtracting so bounds near f64::MAX stay finite
                let quarter = end / 4.0 - begin / 4.0;
                let x = quarter * t * (3.0 - t * t) + (end / 2.0 + begin / 2.0);
                f(x) * 3.0 * quarter * (1.0 - t * t)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::test_rel;

    #[test]
    fn test_classify() {
        assert_eq!(Domain::classify(f64::NEG_INFINITY, f64::INFINITY), Domain::Whole);
        assert_eq!(Domain::classify(f64::MIN, f64::MAX), Domain::Whole);
        assert_eq!(
            Domain::classify(2.0, f64::INFINITY),
            Domain::UpperUnbounded { begin: 2.0 }
        );
        assert_eq!(
            Domain::classify(-3.0, f64::MAX),
            Domain::UpperUnbounded { begin: -3.0 }
        );
        assert_eq!(
            Domain::classify(f64::MIN, 1.5),
            Domain::LowerUnbounded { end: 1.5 }
        );
        assert_eq!(
            Domain::classify(-1e300, 1e300),
            Domain::Finite {
                begin: -1e300,
                end: 1e300
            }
        );
    }

    #[test]
    fn test_canonical_interval() {
        assert_eq!(Domain::Whole.canonical_interval(), (-1.0, 1.0));
        assert_eq!(
            Domain::UpperUnbounded { begin: 0.0 }.canonical_interval(),
            (0.0, 1.0)
        );
        assert_eq!(
            Domain::LowerUnbounded { end: 0.0 }.canonical_interval(),
            (-1.0, 0.0)
        );
        assert_eq!(
            Domain::Finite {
                begin: 3.0,
                end: 7.0
            }
            .canonical_interval(),
            (-1.0, 1.0)
        );
    }

    #[test]
    fn test_finite_substitution() {
        let domain = Domain::Finite {
            begin: 1.0,
            end: 5.0,
        };
        let f = |x: f64| x * x;

        // center of the interval, full derivative 3 (b - a) / 4
        test_rel(domain.substitute(&f, 0.0), 9.0 * 3.0, 1e-15);
        // endpoints map onto the interval ends with vanishing derivative
        assert_eq!(domain.substitute(&f, 1.0), 0.0);
        assert_eq!(domain.substitute(&f, -1.0), 0.0);
        // g(0.5) = 1 * 0.5 * 2.75 + 3, g'(0.5) = 3 * 0.75
        test_rel(domain.substitute(&f, 0.5), 4.375 * 4.375 * 2.25, 1e-15);
    }

    #[test]
    fn test_finite_substitution_near_max() {
        let domain = Domain::Finite {
            begin: -1e308,
            end: 1e308,
        };
        let one = |_: f64| 1.0;

        // b - a overflows here, b / 4 - a / 4 does not
        test_rel(domain.substitute(&one, 0.0), 1.5e308, 1e-15);
        assert_eq!(domain.substitute(&|x: f64| x * 1e-308, 0.0), 0.0);
        assert_eq!(domain.substitute(&one, 1.0), 0.0);

        let shifted = Domain::Finite {
            begin: 1e308,
            end: 1.5e308,
        };
        test_rel(shifted.substitute(&|x: f64| x * 1e-308, 0.0), 1.25 * 0.375e308, 1e-15);
    }

    #[test]
    fn test_unbounded_substitutions() {
        let one = |_: f64| 1.0;

        // derivative of t / (1 - t^2) at t = 0.5 is 1.25 / 0.5625
        test_rel(Domain::Whole.substitute(&one, 0.5), 1.25 / 0.5625, 1e-15);
        assert_eq!(Domain::Whole.substitute(&one, 0.0), 1.0);

        // s = 0.5: s / (1 - s) = 1, derivative 2 s / (1 - s)^3 = 8
        let upper = Domain::UpperUnbounded { begin: 2.0 };
        test_rel(upper.substitute(&one, 0.5), 8.0, 1e-15);
        test_rel(upper.substitute(&|x: f64| x, 0.5), 3.0 * 8.0, 1e-15);

        // s = -0.5: s / (1 + s) = -1, factor -2 s / (1 + s)^3 = 8
        let lower = Domain::LowerUnbounded { end: 2.0 };
        test_rel(lower.substitute(&one, -0.5), 8.0, 1e-15);
        test_rel(lower.substitute(&|x: f64| x, -0.5), 8.0, 1e-15);
    }
}
