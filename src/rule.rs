use crate::error::{QuadratureError, Result};
use crate::tables;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Orders with precomputed Gauss-Kronrod tables.
pub const SUPPORTED_ORDERS: [usize; 6] = [15, 21, 31, 41, 51, 61];

/// A Gauss-Kronrod rule: `order` Kronrod nodes, of which `(order - 1) / 2`
/// are shared with the embedded Gauss rule.
///
/// Only the non-negative half of the symmetric node set is stored, in
/// ascending order starting at zero. `gauss_weights()[i / 2]` is the Gauss
/// weight of the Kronrod node with index `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussKronrodRule {
    order: usize,
    abscissas: Vec<f64>,
    kronrod_weights: Vec<f64>,
    gauss_weights: Vec<f64>,
}

impl GaussKronrodRule {
    /// Build the rule with `order` points from the precomputed tables.
    ///
    /// Prefer [`gauss_kronrod_rule`], which shares a single copy of each rule.
    pub fn new(order: usize) -> Result<Self> {
        let (abscissas, kronrod_weights, gauss_weights) =
            tables::lookup(order).ok_or(QuadratureError::UnsupportedOrder { order })?;

        Ok(GaussKronrodRule {
            order,
            abscissas: abscissas.to_vec(),
            kronrod_weights: kronrod_weights.to_vec(),
            gauss_weights: gauss_weights.to_vec(),
        })
    }

    /// Number of Kronrod points.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of points of the embedded Gauss rule.
    pub fn gauss_order(&self) -> usize {
        (self.order - 1) / 2
    }

    pub fn abscissas(&self) -> &[f64] {
        &self.abscissas
    }

    pub fn kronrod_weights(&self) -> &[f64] {
        &self.kronrod_weights
    }

    pub fn gauss_weights(&self) -> &[f64] {
        &self.gauss_weights
    }
}

lazy_static! {
    static ref RULE_CACHE: RwLock<HashMap<usize, Arc<GaussKronrodRule>>> =
        RwLock::new(HashMap::new());
}

/// Shared Gauss-Kronrod rule with `order` points.
///
/// Rules are built on first request and cached for the lifetime of the
/// process, so every caller asking for the same order gets the same rule.
pub fn gauss_kronrod_rule(order: usize) -> Result<Arc<GaussKronrodRule>> {
    // Entries are never modified once inserted, so a poisoned lock still
    // guards a consistent map.
    if let Some(rule) = RULE_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&order)
    {
        return Ok(Arc::clone(rule));
    }

    let rule = Arc::new(GaussKronrodRule::new(order)?);
    let mut cache = RULE_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(cache.entry(order).or_insert(rule)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::test_rel;
    use std::thread;

    #[test]
    fn test_table_shapes() {
        for &order in SUPPORTED_ORDERS.iter() {
            let rule = GaussKronrodRule::new(order).unwrap();
            let n = rule.abscissas().len();

            assert_eq!(rule.order(), order);
            assert_eq!(n, (order + 1) / 2);
            assert_eq!(rule.kronrod_weights().len(), n);
            assert_eq!(rule.gauss_weights().len(), (n + 1) / 2);
            assert_eq!(rule.abscissas()[0], 0.0);
            assert!(rule.abscissas().windows(2).all(|w| w[0] < w[1]));
            assert!(rule.abscissas()[n - 1] < 1.0);
        }
    }

    #[test]
    fn test_weights_integrate_one() {
        // Each rule integrates the constant 1 over [-1, 1] exactly.
        for &order in SUPPORTED_ORDERS.iter() {
            let rule = GaussKronrodRule::new(order).unwrap();

            let wk = rule.kronrod_weights();
            let kronrod_sum = wk[0] + 2.0 * wk[1..].iter().sum::<f64>();
            test_rel(kronrod_sum, 2.0, 1e-14);

            let wg = rule.gauss_weights();
            let gauss_sum = if rule.gauss_order() % 2 == 1 {
                wg[0] + 2.0 * wg[1..].iter().sum::<f64>()
            } else {
                2.0 * wg.iter().sum::<f64>()
            };
            test_rel(gauss_sum, 2.0, 1e-14);
        }
    }

    #[test]
    fn test_unsupported_order() {
        for &order in [0usize, 1, 7, 16, 30, 62, 101].iter() {
            assert_eq!(
                GaussKronrodRule::new(order),
                Err(QuadratureError::UnsupportedOrder { order })
            );
            assert_eq!(
                gauss_kronrod_rule(order).unwrap_err(),
                QuadratureError::UnsupportedOrder { order }
            );
        }
    }

    #[test]
    fn test_cache_shares_rules() {
        let first = gauss_kronrod_rule(41).unwrap();
        let second = gauss_kronrod_rule(41).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, GaussKronrodRule::new(41).unwrap());
    }

    #[test]
    fn test_cache_concurrent_lookups() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| gauss_kronrod_rule(51).unwrap()))
            .collect();
        let rules: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for rule in rules.iter() {
            assert!(Arc::ptr_eq(rule, &rules[0]));
            assert_eq!(rule.order(), 51);
        }
    }
}
