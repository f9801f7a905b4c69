use thiserror::Error;

/// Errors raised before any integration work is attempted.
///
/// Slow convergence is not an error: the integrators always return their best
/// estimate together with its error estimate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum QuadratureError {
    /// The requested Gauss-Kronrod rule has no precomputed table.
    #[error("unsupported Gauss-Kronrod order {order}: precomputed orders are 15, 21, 31, 41, 51 and 61")]
    UnsupportedOrder { order: usize },
    /// An input that the integrator cannot work with.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl QuadratureError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        QuadratureError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuadratureError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        let err = QuadratureError::UnsupportedOrder { order: 17 };
        assert!(err.to_string().starts_with("unsupported Gauss-Kronrod order 17"));

        let err = QuadratureError::invalid_argument("begin", "bound is NaN");
        assert_eq!(err.to_string(), "invalid argument `begin`: bound is NaN");
    }
}
