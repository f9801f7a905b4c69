use crate::adaptive::recursive_adaptive_integrate;
use crate::error::{QuadratureError, Result};
use crate::result::IntegrationResult;
use crate::rule::{gauss_kronrod_rule, GaussKronrodRule};
use crate::transform::Domain;
use crate::utils::{is_lower_unbounded, is_upper_unbounded};
use crate::value::IntegrandValue;
use log::debug;
use num::complex::Complex;
use std::sync::Arc;

/// Default relative tolerance.
pub const DEFAULT_TARGET_RELATIVE_ERROR: f64 = 1e-10;
/// Default number of allowed bisections.
pub const DEFAULT_MAX_DEPTH: usize = 15;
/// Default number of Gauss-Kronrod points.
pub const DEFAULT_ORDER: usize = 15;

#[derive(Clone, Debug)]
/// One-dimensional adaptive Gauss-Kronrod integrator.
pub struct GaussKronrodIntegrator {
    /// Relative tolerance.
    epsrel: f64,
    /// Maximum number of interval bisections.
    max_depth: usize,
    /// Gauss-Kronrod nodes and weights
    rule: Arc<GaussKronrodRule>,
}

impl GaussKronrodIntegrator {
    /// Integrate a function `f` over the interval `a` to `b`, returning
    /// an `IntegrationResult` object. For infinite bounds, use
    /// `f64::INFINITY` / `f64::NEG_INFINITY` or `f64::MAX` / `f64::MIN`.
    ///
    /// # Examples
    ///
    /// Integrate a function over a finite interval: f(x) = x^2
    /// ```
    /// use cyphus_quadgk::prelude::*;
    ///
    /// let gk = GaussKronrodIntegratorBuilder::default()
    ///     .epsrel(1e-8)
    ///     .build()
    ///     .unwrap();
    /// let f = |x: f64| x * x;
    /// let res = gk.integrate(f, 0.0, 1.0).unwrap();
    /// assert!((res.estimate - 1.0 / 3.0).abs() < 1e-8);
    /// ```
    ///
    /// Integrate a function over an infinite interval: f(x) = exp(-x^2/2)/sqrt(2pi)
    /// ```
    /// use cyphus_quadgk::prelude::*;
    ///
    /// let gk = GaussKronrodIntegratorBuilder::default()
    ///     .epsrel(1e-8)
    ///     .order(31)
    ///     .build()
    ///     .unwrap();
    /// let f = |x: f64| (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt();
    /// let res = gk.integrate(f, f64::NEG_INFINITY, f64::INFINITY).unwrap();
    /// assert!((res.estimate - 1.0).abs() < 1e-8);
    /// ```
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<IntegrationResult<f64>>
    where
        F: Fn(f64) -> f64,
    {
        self.integrate_value(f, a, b)
    }

    /// Integrate a complex-valued function of a real variable over `a` to `b`.
    ///
    /// ```
    /// use cyphus_quadgk::prelude::*;
    /// use num::complex::Complex;
    ///
    /// let gk = GaussKronrodIntegratorBuilder::default().build().unwrap();
    /// let f = |x: f64| Complex::new(0.0, x).exp();
    /// let res = gk.contour_integrate(f, 0.0, std::f64::consts::PI).unwrap();
    /// assert!(res.estimate.re.abs() < 1e-9);
    /// assert!((res.estimate.im - 2.0).abs() < 1e-9);
    /// ```
    pub fn contour_integrate<F>(
        &self,
        f: F,
        a: f64,
        b: f64,
    ) -> Result<IntegrationResult<Complex<f64>>>
    where
        F: Fn(f64) -> Complex<f64>,
    {
        self.integrate_value(f, a, b)
    }

    /// Integrate `f` over `a` to `b` for any value type the quadrature
    /// supports.
    ///
    /// Reversed bounds integrate over `[b, a]` and negate the estimate.
    pub fn integrate_value<V, F>(&self, f: F, a: f64, b: f64) -> Result<IntegrationResult<V>>
    where
        V: IntegrandValue,
        F: Fn(f64) -> V,
    {
        if a.is_nan() {
            return Err(QuadratureError::invalid_argument("a", "bound is NaN"));
        }
        if b.is_nan() {
            return Err(QuadratureError::invalid_argument("b", "bound is NaN"));
        }
        if a > b {
            return self.integrate_value(f, b, a).map(IntegrationResult::reversed);
        }
        // empty interval, including both ends at the same infinity
        if a == b
            || (is_lower_unbounded(a) && is_lower_unbounded(b))
            || (is_upper_unbounded(a) && is_upper_unbounded(b))
        {
            return Ok(IntegrationResult::zero());
        }

        let domain = Domain::classify(a, b);
        let (lower, upper) = domain.canonical_interval();
        debug!(
            "integrating over {:?} mapped onto [{}, {}] with the {}-point rule",
            domain,
            lower,
            upper,
            self.rule.order()
        );

        let transformed = |t: f64| domain.substitute(&f, t);
        let result = recursive_adaptive_integrate(
            &transformed,
            lower,
            upper,
            self.max_depth,
            self.epsrel,
            0.0,
            &self.rule,
        );
        result.issue_warning(self.epsrel);

        Ok(result)
    }

    /// Relative tolerance.
    pub fn epsrel(&self) -> f64 {
        self.epsrel
    }

    /// Maximum number of interval bisections.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Gauss-Kronrod rule used on every sub-interval.
    pub fn rule(&self) -> &GaussKronrodRule {
        &self.rule
    }
}

/// Builder struct used to construct an integrator with wanted parameters.
#[derive(Clone, Debug, Default)]
pub struct GaussKronrodIntegratorBuilder {
    /// Relative tolerance.
    epsrel: Option<f64>,
    /// Maximum number of interval bisections.
    max_depth: Option<usize>,
    /// Order of gauss-kronrod rule
    order: Option<usize>,
}

impl GaussKronrodIntegratorBuilder {
    /// Set the relative tolerance.
    pub fn epsrel(mut self, epsrel: f64) -> Self {
        self.epsrel = Some(epsrel);
        self
    }
    /// Set the maximum number of interval bisections.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
    /// Set the order of the gauss-kronrod rule. Must be one of 15, 21, 31,
    /// 41, 51 or 61.
    pub fn order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }
    /// Build the integrator.
    pub fn build(self) -> Result<GaussKronrodIntegrator> {
        let epsrel = self.epsrel.unwrap_or(DEFAULT_TARGET_RELATIVE_ERROR);
        if epsrel.is_nan() || epsrel < 0.0 {
            return Err(QuadratureError::invalid_argument(
                "epsrel",
                format!("relative tolerance must be non-negative, got {}", epsrel),
            ));
        }

        Ok(GaussKronrodIntegrator {
            epsrel,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            rule: gauss_kronrod_rule(self.order.unwrap_or(DEFAULT_ORDER))?,
        })
    }
}

/// Integrate `f` from `a` to `b` with adaptive Gauss-Kronrod quadrature.
///
/// # Arguments
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration, `f64::NEG_INFINITY` or `f64::MIN` for minus infinity
/// * `b` - Upper bound of integration, `f64::INFINITY` or `f64::MAX` for plus infinity
/// * `target_relative_error` - Relative tolerance, see [`DEFAULT_TARGET_RELATIVE_ERROR`]
/// * `max_depth` - Maximum number of interval bisections, see [`DEFAULT_MAX_DEPTH`]
/// * `order` - Number of Gauss-Kronrod points: 15, 21, 31, 41, 51 or 61
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    target_relative_error: f64,
    max_depth: usize,
    order: usize,
) -> Result<IntegrationResult<f64>>
where
    F: Fn(f64) -> f64,
{
    GaussKronrodIntegratorBuilder::default()
        .epsrel(target_relative_error)
        .max_depth(max_depth)
        .order(order)
        .build()?
        .integrate(f, a, b)
}

/// Integrate the complex-valued `f` from `a` to `b` with adaptive
/// Gauss-Kronrod quadrature. Arguments are those of [`integrate`].
pub fn contour_integrate<F>(
    f: F,
    a: f64,
    b: f64,
    target_relative_error: f64,
    max_depth: usize,
    order: usize,
) -> Result<IntegrationResult<Complex<f64>>>
where
    F: Fn(f64) -> Complex<f64>,
{
    GaussKronrodIntegratorBuilder::default()
        .epsrel(target_relative_error)
        .max_depth(max_depth)
        .order(order)
        .build()?
        .contour_integrate(f, a, b)
}
