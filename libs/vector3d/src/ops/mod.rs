//! Fallible free-function API over optional operands.
//!
//! Every operand is an `Option`; `None` stands for an absent vector or
//! output location. A rejected call:
//!
//! - returns [`VectorError::InvalidArgument`] (or `f64::NAN` for scalar
//!   results),
//! - leaves the output location untouched,
//! - writes one line to the diagnostic channel.
//!
//! ```rust
//! use vector3d::ops;
//!
//! let a = ops::create_with_value(1.0, 2.0, 3.0);
//! let b = ops::create_with_value(4.0, 5.0, 6.0);
//! let mut res = ops::create();
//!
//! ops::cross(Some(&a), Some(&b), Some(&mut res)).unwrap();
//! assert_eq!(ops::get_x(Some(&res)), -3.0);
//!
//! assert!(ops::dot(Some(&a), None).is_nan());
//! ```

use crate::diagnostics;
use crate::error::{VectorError, VectorResult};
use crate::vector::Vector3D;

/// Unwraps an operand, reporting it as absent when it is `None`.
fn require<T>(
    operation: &'static str,
    operand: &'static str,
    value: Option<T>,
) -> VectorResult<T> {
    value.ok_or_else(|| diagnostics::report(VectorError::invalid_argument(operation, operand)))
}

/// Validates both inputs and the output of a binary operation, then writes
/// `f(a, b)` to the output.
fn binary_into(
    operation: &'static str,
    a: Option<&Vector3D>,
    b: Option<&Vector3D>,
    out: Option<&mut Vector3D>,
    f: impl FnOnce(&Vector3D, &Vector3D) -> Vector3D,
) -> VectorResult<()> {
    let a = require(operation, "first", a)?;
    let b = require(operation, "second", b)?;
    let out = require(operation, "output", out)?;
    *out = f(a, b);
    Ok(())
}

fn component(
    operation: &'static str,
    v: Option<&Vector3D>,
    f: impl FnOnce(&Vector3D) -> f64,
) -> f64 {
    require(operation, "vector", v).map_or(f64::NAN, f)
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Creates a zero vector.
pub fn create() -> Vector3D {
    Vector3D::new()
}

/// Creates a vector from explicit components.
pub fn create_with_value(x: f64, y: f64, z: f64) -> Vector3D {
    Vector3D::with_value(x, y, z)
}

/// Releases a vector. Accepts `None` as a no-op; dropping the value at the
/// end of its scope is equivalent.
pub fn destroy(vector: Option<Vector3D>) {
    let _ = vector;
}

// =============================================================================
// ARITHMETIC
// =============================================================================

/// Writes `a + b` to `out`.
pub fn sum(
    a: Option<&Vector3D>,
    b: Option<&Vector3D>,
    out: Option<&mut Vector3D>,
) -> VectorResult<()> {
    binary_into("sum", a, b, out, |a, b| *a + *b)
}

/// Writes `a - b` to `out`.
pub fn sub(
    a: Option<&Vector3D>,
    b: Option<&Vector3D>,
    out: Option<&mut Vector3D>,
) -> VectorResult<()> {
    binary_into("sub", a, b, out, |a, b| *a - *b)
}

/// Returns `a · b`, or NaN when either operand is absent.
pub fn dot(a: Option<&Vector3D>, b: Option<&Vector3D>) -> f64 {
    require("dot", "first", a)
        .and_then(|a| require("dot", "second", b).map(|b| a.dot(b)))
        .unwrap_or(f64::NAN)
}

/// Writes `a × b` to `out`.
pub fn cross(
    a: Option<&Vector3D>,
    b: Option<&Vector3D>,
    out: Option<&mut Vector3D>,
) -> VectorResult<()> {
    binary_into("cross", a, b, out, Vector3D::cross)
}

/// Writes `v * factor` to `out`.
pub fn scale(v: Option<&Vector3D>, factor: f64, out: Option<&mut Vector3D>) -> VectorResult<()> {
    let v = require("scale", "vector", v)?;
    let out = require("scale", "output", out)?;
    *out = v.scale(factor);
    Ok(())
}

// =============================================================================
// ACCESSORS
// =============================================================================

/// X component, or NaN when `v` is absent.
pub fn get_x(v: Option<&Vector3D>) -> f64 {
    component("get_x", v, Vector3D::x)
}

/// Y component, or NaN when `v` is absent.
pub fn get_y(v: Option<&Vector3D>) -> f64 {
    component("get_y", v, Vector3D::y)
}

/// Z component, or NaN when `v` is absent.
pub fn get_z(v: Option<&Vector3D>) -> f64 {
    component("get_z", v, Vector3D::z)
}

// =============================================================================
// MUTATORS
// =============================================================================

/// Overwrites the X component of `v`.
pub fn set_x(v: Option<&mut Vector3D>, value: f64) -> VectorResult<()> {
    require("set_x", "vector", v)?.set_x(value);
    Ok(())
}

/// Overwrites the Y component of `v`.
pub fn set_y(v: Option<&mut Vector3D>, value: f64) -> VectorResult<()> {
    require("set_y", "vector", v)?.set_y(value);
    Ok(())
}

/// Overwrites the Z component of `v`.
pub fn set_z(v: Option<&mut Vector3D>, value: f64) -> VectorResult<()> {
    require("set_z", "vector", v)?.set_z(value);
    Ok(())
}

/// Overwrites all three components of `v`.
pub fn set_xyz(v: Option<&mut Vector3D>, x: f64, y: f64, z: f64) -> VectorResult<()> {
    require("set_xyz", "vector", v)?.set_xyz(x, y, z);
    Ok(())
}
