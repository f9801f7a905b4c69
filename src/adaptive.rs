use crate::qk::qk;
use crate::result::IntegrationResult;
use crate::rule::GaussKronrodRule;
use crate::value::IntegrandValue;
use log::{debug, trace};

/// Integrate `f` over `[a, b]` by recursive bisection.
///
/// Each call applies `rule` once to the whole interval. The interval is split
/// in half when depth remains and the local error exceeds both the relative
/// tolerance of the local estimate and the absolute tolerance `abs_tol`; each
/// half receives `abs_tol / 2`, so the budgets of all leaves never add up to
/// more than the budget of the root. A root call passes `abs_tol = 0`, which
/// seeds the budget from the first estimate.
///
/// When `max_levels` runs out the current estimate is returned as is, with
/// whatever error it carries.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `max_levels` - Remaining number of allowed bisections
/// * `rel_tol` - Relative tolerance
/// * `abs_tol` - Absolute tolerance budget of this interval
/// * `rule` - Gauss-Kronrod rule applied on every interval
pub fn recursive_adaptive_integrate<V, F>(
    f: &F,
    a: f64,
    b: f64,
    max_levels: usize,
    rel_tol: f64,
    abs_tol: f64,
    rule: &GaussKronrodRule,
) -> IntegrationResult<V>
where
    V: IntegrandValue,
    F: Fn(f64) -> V,
{
    let mean = (b + a) / 2.0;
    let scale = (b - a) / 2.0;
    let local = qk(|x| f(scale * x + mean), rule);
    let estimate = local.kronrod * scale;

    let estimate_tol = (estimate * rel_tol).magnitude();
    let abs_tol = if abs_tol == 0.0 {
        estimate_tol
    } else {
        abs_tol
    };

    if max_levels > 0 && estimate_tol < local.error && abs_tol < local.error {
        let mid = (a + b) / 2.0;
        let levels = max_levels - 1;
        let child_tol = abs_tol / 2.0;
        trace!(
            "splitting [{}, {}] at {}: error {:e} above tolerance {:e}",
            a,
            b,
            mid,
            local.error,
            abs_tol
        );
        let left = recursive_adaptive_integrate(f, a, mid, levels, rel_tol, child_tol, rule);
        let right = recursive_adaptive_integrate(f, mid, b, levels, rel_tol, child_tol, rule);
        return left + right;
    }

    if max_levels == 0 && estimate_tol < local.error && abs_tol < local.error {
        debug!("maximum depth reached on [{}, {}] with error {:e}", a, b, local.error);
    }

    IntegrationResult::new(estimate, local.error, local.l1_norm * scale)
}
