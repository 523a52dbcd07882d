//! # Error Types
//!
//! Errors raised by the fallible vector operations in [`crate::ops`].
//!
//! ## Error Policy
//!
//! - Absent operands are never fatal: the call returns an error (or NaN for
//!   scalar results) and the process keeps running
//! - Every error names the operation and the operand that was missing
//! - Output locations are left untouched when an error is returned

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use vector3d::{ops, Vector3D, VectorError};
///
/// let a = Vector3D::with_value(1.0, 2.0, 3.0);
/// match ops::sum(Some(&a), None, None) {
///     Ok(()) => unreachable!(),
///     Err(VectorError::InvalidArgument { operation, operand }) => {
///         assert_eq!(operation, "sum");
///         assert_eq!(operand, "second");
///     }
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A required vector operand or output location was absent.
    #[error("{operation}: {operand} operand is absent")]
    InvalidArgument {
        /// Name of the rejected operation (`sum`, `cross`, `get_x`, ...)
        operation: &'static str,
        /// Which operand was missing (`first`, `second`, `output`, `vector`)
        operand: &'static str,
    },
}

impl VectorError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(operation: &'static str, operand: &'static str) -> Self {
        Self::InvalidArgument { operation, operand }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VectorError::invalid_argument("cross", "output");
        assert_eq!(err.to_string(), "cross: output operand is absent");
    }

    /// Test error types are Send + Sync so results can cross threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VectorError>();
    }
}
