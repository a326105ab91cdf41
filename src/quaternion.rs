//! Rotation quaternions.
//!
//! Constructors from an axis/angle or a rotation matrix produce unit quaternions (the
//! matrix constructor explicitly re-normalizes). The algebraic operators never
//! re-normalize, so a long chain of products drifts off unit length; call
//! [`Quat::normalize`] where unit length matters.

use crate::float_types::Real;
use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4, impl_scalar_ops};
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

pub type Quatf = Quat<f32>;
pub type Quatd = Quat<f64>;

/// Quaternion `x·i + y·j + z·k + w`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> Quat<T> {
    /// No rotation: `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Raw components; no normalization.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// Unit length only if `axis` is.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let half = angle * T::HALF;
        let sin_half = half.sin();
        Self::new(axis.x * sin_half, axis.y * sin_half, axis.z * sin_half, half.cos())
    }

    /// Extracts the rotation of the upper-left 3×3 block of `m`.
    ///
    /// With a positive trace the `w`-dominant formula is used; otherwise the branch is chosen
    /// by the largest diagonal element so the divisor stays away from zero. The result is
    /// divided by its own length, so it is unit length even for slightly non-orthonormal
    /// input.
    pub fn from_matrix(m: &Mat4<T>) -> Self {
        let g = |r, c| m.get(r, c);
        let quarter = T::lit(0.25);
        let trace = g(0, 0) + g(1, 1) + g(2, 2);

        let q = if trace > T::ZERO {
            let s = T::HALF / (trace + T::ONE).sqrt();
            Self::new(
                (g(2, 1) - g(1, 2)) * s,
                (g(0, 2) - g(2, 0)) * s,
                (g(1, 0) - g(0, 1)) * s,
                quarter / s,
            )
        } else if g(0, 0) > g(1, 1) && g(0, 0) > g(2, 2) {
            let s = T::TWO * (T::ONE + g(0, 0) - g(1, 1) - g(2, 2)).sqrt();
            Self::new(
                quarter * s,
                (g(0, 1) + g(1, 0)) / s,
                (g(0, 2) + g(2, 0)) / s,
                (g(2, 1) - g(1, 2)) / s,
            )
        } else if g(1, 1) > g(2, 2) {
            let s = T::TWO * (T::ONE + g(1, 1) - g(0, 0) - g(2, 2)).sqrt();
            Self::new(
                (g(0, 1) + g(1, 0)) / s,
                quarter * s,
                (g(1, 2) + g(2, 1)) / s,
                (g(0, 2) - g(2, 0)) / s,
            )
        } else {
            let s = T::TWO * (T::ONE + g(2, 2) - g(0, 0) - g(1, 1)).sqrt();
            Self::new(
                (g(0, 2) + g(2, 0)) / s,
                (g(1, 2) + g(2, 1)) / s,
                quarter * s,
                (g(1, 0) - g(0, 1)) / s,
            )
        };

        q.div_scalar(q.length())
    }

    /// Euler angles in degrees, same convention as [`Mat4::rotation_euler`].
    pub fn from_euler_degrees(x_deg: T, y_deg: T, z_deg: T) -> Self {
        Self::from_matrix(&Mat4::rotation_euler(x_deg, y_deg, z_deg))
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Divides by the length. A zero quaternion yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.div_scalar(self.length())
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// All four components negated; the same rotation as `self`.
    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// `conjugate / length²`
    pub fn inverse(self) -> Self {
        self.conjugate().div_scalar(self.length_squared())
    }

    #[inline]
    pub fn dot(self, r: Self) -> T {
        self.x * r.x + self.y * r.y + self.z * r.z + self.w * r.w
    }

    #[inline]
    pub fn mul_scalar(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    #[inline]
    pub fn div_scalar(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }

    #[inline]
    pub fn add_scalar(self, s: T) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s, self.w + s)
    }

    #[inline]
    pub fn sub_scalar(self, s: T) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s, self.w - s)
    }

    /// Component-wise division.
    pub fn component_div(self, r: Self) -> Self {
        Self::new(self.x / r.x, self.y / r.y, self.z / r.z, self.w / r.w)
    }

    /// Hamilton product `self · r`; not commutative, not re-normalized.
    pub fn mul_quat(self, r: Self) -> Self {
        Self::new(
            self.x * r.w + self.w * r.x + self.y * r.z - self.z * r.y,
            self.y * r.w + self.w * r.y + self.z * r.x - self.x * r.z,
            self.z * r.w + self.w * r.z + self.x * r.y - self.y * r.x,
            self.w * r.w - self.x * r.x - self.y * r.y - self.z * r.z,
        )
    }

    /// Product with the pure quaternion `(v, 0)`.
    pub fn mul_vec3(self, v: Vec3<T>) -> Self {
        Self::new(
            self.w * v.x + self.y * v.z - self.z * v.y,
            self.w * v.y + self.z * v.x - self.x * v.z,
            self.w * v.z + self.x * v.y - self.y * v.x,
            -self.x * v.x - self.y * v.y - self.z * v.z,
        )
    }

    /// Rotation matrix equivalent to this (unit) quaternion.
    pub fn rotation_matrix(self) -> Mat4<T> {
        let Self { x, y, z, w } = self;
        let (one, two) = (T::ONE, T::TWO);

        let forward = Vec3::new(
            two * (x * z - w * y),
            two * (y * z + w * x),
            one - two * (x * x + y * y),
        );
        let up = Vec3::new(
            two * (x * y + w * z),
            one - two * (x * x + z * z),
            two * (y * z - w * x),
        );
        let right = Vec3::new(
            one - two * (y * y + z * z),
            two * (x * y - w * z),
            two * (x * z + w * y),
        );

        Mat4::rotation_basis(forward, up, right)
    }

    /// +z rotated by `self`.
    pub fn forward(self) -> Vec3<T> {
        Vec3::<T>::Z.rotate(self)
    }

    /// −z rotated by `self`.
    pub fn back(self) -> Vec3<T> {
        (-Vec3::<T>::Z).rotate(self)
    }

    /// +y rotated by `self`.
    pub fn up(self) -> Vec3<T> {
        Vec3::<T>::Y.rotate(self)
    }

    /// −y rotated by `self`.
    pub fn down(self) -> Vec3<T> {
        (-Vec3::<T>::Y).rotate(self)
    }

    /// +x rotated by `self`.
    pub fn right(self) -> Vec3<T> {
        Vec3::<T>::X.rotate(self)
    }

    /// −x rotated by `self`.
    pub fn left(self) -> Vec3<T> {
        (-Vec3::<T>::X).rotate(self)
    }

    /// Normalized linear interpolation. With `shortest`, `dest` is negated when that is the
    /// nearer of the two equivalent targets.
    pub fn nlerp(self, dest: Self, amt: T, shortest: bool) -> Self {
        let dest = if shortest && self.dot(dest) < T::ZERO { -dest } else { dest };
        ((dest - self).mul_scalar(amt) + self).normalize()
    }

    /// Spherical linear interpolation; falls back to [`Quat::nlerp`] for nearly parallel inputs.
    pub fn slerp(self, dest: Self, amt: T, shortest: bool) -> Self {
        let mut cos = self.dot(dest);
        let mut dest = dest;
        if shortest && cos < T::ZERO {
            cos = -cos;
            dest = -dest;
        }

        if cos.abs() >= T::ONE - T::lit(1e-3) {
            return self.nlerp(dest, amt, false);
        }

        let sin = (T::ONE - cos * cos).sqrt();
        let angle = sin.atan2(cos);
        let inv_sin = T::ONE / sin;

        let src_factor = ((T::ONE - amt) * angle).sin() * inv_sin;
        let dest_factor = (amt * angle).sin() * inv_sin;

        self.mul_scalar(src_factor) + dest.mul_scalar(dest_factor)
    }

    /// Rotation axis and angle (radians). The identity reports the x axis and angle zero.
    pub fn axis_angle(self) -> (Vec3<T>, T) {
        let q = self.normalize();
        let angle = T::TWO * q.w.acos();
        let s = (T::ONE - q.w * q.w).sqrt();
        if s == T::ZERO {
            return (Vec3::X, T::ZERO);
        }
        (Vec3::new(q.x / s, q.y / s, q.z / s), angle)
    }

    /// Exact `length² == 1`.
    pub fn is_unit(self) -> bool {
        self.length_squared() == T::ONE
    }

    pub fn is_nan(self) -> bool {
        self.to_vec4().is_nan()
    }

    pub fn is_valid(self) -> bool {
        self.to_vec4().is_valid()
    }

    #[inline]
    pub const fn to_vec4(self) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z, self.w + r.w)
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z, self.w - r.w)
    }
}

impl<T: Real> Mul for Quat<T> {
    type Output = Self;
    #[inline]
    fn mul(self, r: Self) -> Self {
        self.mul_quat(r)
    }
}

/// Rotates the vector.
impl<T: Real> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;
    #[inline]
    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        v.rotate(self)
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl_scalar_ops!(Quat, f32, f64);

impl<T: Real> From<Mat4<T>> for Quat<T> {
    fn from(m: Mat4<T>) -> Self {
        Self::from_matrix(&m)
    }
}

impl<T: Real> From<Quat<T>> for Mat4<T> {
    fn from(q: Quat<T>) -> Self {
        q.rotation_matrix()
    }
}

impl<T: Real> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quat{}({:?}/{:?}/{:?}/{:?})",
            T::PRECISION,
            self.x,
            self.y,
            self.z,
            self.w
        )
    }
}

// nalgebra interop
impl<T: Real> From<nalgebra::Quaternion<T>> for Quat<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        Self::new(q.i, q.j, q.k, q.w)
    }
}

impl<T: Real> From<Quat<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quat<T>) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl<T: Real> From<nalgebra::UnitQuaternion<T>> for Quat<T> {
    fn from(q: nalgebra::UnitQuaternion<T>) -> Self {
        q.into_inner().into()
    }
}

impl<T: Real> From<Quat<T>> for nalgebra::UnitQuaternion<T> {
    /// Normalizes on the way in.
    fn from(q: Quat<T>) -> Self {
        nalgebra::UnitQuaternion::from_quaternion(q.into())
    }
}
