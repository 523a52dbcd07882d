//! 3D vector arithmetic with explicit failure reporting.
//!
//! [`Vector3D`] is an opaque `Copy` value over three `f64` components. Its
//! methods and operators are infallible. The [`ops`] module exposes the same
//! operations as free functions over optional operands: an absent operand
//! yields [`VectorError::InvalidArgument`] (or NaN for scalar results),
//! leaves the output untouched, and emits one line on the [`diagnostics`]
//! channel.
//!
//! ```rust
//! use vector3d::{ops, Vector3D};
//!
//! let a = Vector3D::with_value(1.0, 2.0, 3.0);
//! let b = Vector3D::with_value(4.0, 5.0, 6.0);
//!
//! let mut res = Vector3D::new();
//! ops::sum(Some(&a), Some(&b), Some(&mut res)).unwrap();
//! assert_eq!(res, Vector3D::with_value(5.0, 7.0, 9.0));
//!
//! assert!(ops::sum(Some(&a), None, Some(&mut res)).is_err());
//! assert_eq!(res, Vector3D::with_value(5.0, 7.0, 9.0));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ops;
pub mod vector;

pub use crate::config::{VectorConfig, VectorConfigError};
pub use error::{VectorError, VectorResult};
pub use vector::Vector3D;
