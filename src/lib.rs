//! Adaptive Gauss-Kronrod quadrature for real and complex valued functions
//! of one real variable over finite, semi-infinite and infinite intervals.
//!
//! ```
//! use cyphus_quadgk::prelude::*;
//!
//! let res = integrate(|x: f64| (-x).exp(), 0.0, f64::INFINITY, 1e-10, 15, 15).unwrap();
//! assert!((res.estimate - 1.0).abs() < 1e-10);
//! ```
#![allow(clippy::excessive_precision, clippy::too_many_arguments)]

pub(crate) mod adaptive;
pub mod error;
pub mod prelude;
pub(crate) mod qk;
pub mod quad;
pub mod result;
pub mod rule;
pub(crate) mod tables;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod transform;
pub(crate) mod utils;
pub mod value;
