pub use crate::error::{QuadratureError, Result as QuadratureResult};
pub use crate::quad::{
    contour_integrate, integrate, GaussKronrodIntegrator, GaussKronrodIntegratorBuilder,
    DEFAULT_MAX_DEPTH, DEFAULT_ORDER, DEFAULT_TARGET_RELATIVE_ERROR,
};
pub use crate::result::IntegrationResult;
pub use crate::rule::{gauss_kronrod_rule, GaussKronrodRule, SUPPORTED_ORDERS};
pub use crate::value::IntegrandValue;
