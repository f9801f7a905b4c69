use num::complex::Complex;
use num::Zero;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Values an integrand can return.
///
/// The quadrature routines only need a vector space over `f64` together with
/// a magnitude, so real and complex integrands share a single implementation.
pub trait IntegrandValue:
    Copy
    + Debug
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Absolute value for reals, modulus for complex numbers.
    fn magnitude(self) -> f64;
}

impl IntegrandValue for f64 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl IntegrandValue for Complex<f64> {
    #[inline]
    fn magnitude(self) -> f64 {
        self.norm()
    }
}
