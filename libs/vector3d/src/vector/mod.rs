//! The [`Vector3D`] value type.
//!
//! Components are stored in a private `glam::DVec3`; callers go through the
//! accessors and mutators. The type is `Copy`, so there is no explicit
//! destroy step: a vector is released when it leaves scope.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use glam::DVec3;

use crate::config::VectorConfig;

/// A 3D vector of `f64` components.
///
/// No range or normalization constraint is imposed; NaN and infinite
/// components propagate through arithmetic per IEEE-754.
///
/// # Examples
/// ```
/// use vector3d::Vector3D;
///
/// let a = Vector3D::with_value(1.0, 2.0, 3.0);
/// let b = Vector3D::with_value(4.0, 5.0, 6.0);
/// assert_eq!(a + b, Vector3D::with_value(5.0, 7.0, 9.0));
/// assert_eq!(a.dot(&b), 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D(DVec3);

/// 2x2 determinant `| a1 a2 ; b1 b2 |`.
#[inline]
fn determinant(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    a1 * b2 - b1 * a2
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self(DVec3::ZERO);

    /// Creates a vector with all components zero.
    pub fn new() -> Self {
        Self::ZERO
    }

    /// Creates a vector from explicit components.
    pub fn with_value(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Overwrites the X component.
    pub fn set_x(&mut self, value: f64) {
        self.0.x = value;
    }

    /// Overwrites the Y component.
    pub fn set_y(&mut self, value: f64) {
        self.0.y = value;
    }

    /// Overwrites the Z component.
    pub fn set_z(&mut self, value: f64) {
        self.0.z = value;
    }

    /// Overwrites all three components.
    pub fn set_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.0 = DVec3::new(x, y, z);
    }

    /// Dot product `a.x*b.x + a.y*b.y + a.z*b.z`.
    #[inline]
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.0.x * other.0.x + self.0.y * other.0.y + self.0.z * other.0.z
    }

    /// Cross product `self × other`.
    ///
    /// Each component is the 2x2 minor obtained by striking out the matching
    /// column of the `[self; other]` matrix, with the middle one negated.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let a = Vector3D::with_value(1.0, 2.0, 3.0);
    /// let b = Vector3D::with_value(4.0, 5.0, 6.0);
    /// assert_eq!(a.cross(&b), Vector3D::with_value(-3.0, 6.0, -3.0));
    /// ```
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        let (a, b) = (self.0, other.0);
        let det_yz = determinant(a.y, a.z, b.y, b.z);
        let det_xz = determinant(a.x, a.z, b.x, b.z);
        let det_xy = determinant(a.x, a.y, b.x, b.y);
        Self::with_value(det_yz, -det_xz, det_xy)
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: f64) -> Vector3D {
        Self(self.0 * factor)
    }

    /// Components as `[x, y, z]`.
    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Returns `true` when every component of `self` and `other` differs by at
    /// most `tolerance`. Any NaN component makes the comparison fail.
    pub fn approx_eq(&self, other: &Vector3D, tolerance: f64) -> bool {
        self.0.abs_diff_eq(other.0, tolerance)
    }

    /// [`approx_eq`](Self::approx_eq) using the tolerance of `config`.
    pub fn approx_eq_with(&self, other: &Vector3D, config: &VectorConfig) -> bool {
        self.approx_eq(other, config.tolerance)
    }

    /// [`approx_eq`](Self::approx_eq) using the default configuration.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let a = Vector3D::with_value(0.1 + 0.2, 0.0, 0.0);
    /// assert!(a.approx_eq_default(&Vector3D::with_value(0.3, 0.0, 0.0)));
    /// ```
    pub fn approx_eq_default(&self, other: &Vector3D) -> bool {
        self.approx_eq_with(other, &VectorConfig::default())
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        self.scale(rhs)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Vector3D {
    fn sub_assign(&mut self, rhs: Vector3D) {
        self.0 -= rhs.0;
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::with_value(x, y, z)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3D> for DVec3 {
    fn from(v: Vector3D) -> Self {
        v.0
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
