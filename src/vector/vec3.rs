use super::{Vec4, impl_scalar_ops};
use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::matrix::Mat4;
use crate::quaternion::Quat;
use core::fmt;
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A three-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> Vec3<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
    /// All components NaN.
    pub const NAN: Self = Self::new(T::NAN, T::NAN, T::NAN);
    /// All components +∞.
    pub const INFINITY: Self = Self::new(T::INFINITY, T::INFINITY, T::INFINITY);

    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    pub const fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Sum of the absolute component differences to `other`.
    pub fn distance_manhattan(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance_euclidean(self, other: Self) -> T {
        (self - other).length()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A vector whose length is exactly zero is returned unchanged rather than divided.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == T::ZERO {
            return self;
        }
        self.div_scalar(length)
    }

    /// Projection of `self` onto `onto`.
    pub fn project(self, onto: Self) -> Self {
        onto.mul_scalar(self.dot(onto) / onto.length_squared())
    }

    /// Reflects `self` about the plane with unit normal `normal`: `v − 2·(v·n)·n`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.mul_scalar(T::TWO * self.dot(normal))
    }

    /// Linear interpolation towards `dest`. `amt` is not clamped.
    #[inline]
    pub fn lerp(self, dest: Self, amt: T) -> Self {
        self + (dest - self).mul_scalar(amt)
    }

    /// Rotates about a unit `axis` by `angle` radians (Rodrigues' formula).
    pub fn rotate_axis_angle(self, axis: Self, angle: T) -> Self {
        let sin = (-angle).sin();
        let cos = (-angle).cos();

        self.cross(axis.mul_scalar(sin))
            + self.mul_scalar(cos)
            + axis.mul_scalar(self.dot(axis.mul_scalar(T::ONE - cos)))
    }

    /// Rotates by `rotation` using the sandwich product `q·v·q⁻¹`.
    ///
    /// The conjugate stands in for the inverse, so `rotation` is expected to be unit length.
    pub fn rotate(self, rotation: Quat<T>) -> Self {
        let w = rotation.mul_vec3(self) * rotation.conjugate();
        Self::new(w.x, w.y, w.z)
    }

    /// Some unit vector perpendicular to `self`.
    ///
    /// The helper axis is picked by comparing `|x|` and `|y|` against `0.6 × length`, so it is
    /// never close to parallel with `self`.
    ///
    /// # Errors
    /// [`GeometryError::ZeroLength`] when the length is exactly zero.
    pub fn orthogonal(self) -> Result<Self, GeometryError> {
        let length = self.length();
        if length == T::ZERO {
            return Err(GeometryError::ZeroLength);
        }

        let threshold = T::lit(0.6) * length;
        let helper = if self.x.abs() < threshold {
            Self::X
        } else if self.y.abs() < threshold {
            Self::Y
        } else {
            Self::Z
        };
        Ok(self.cross(helper).normalize())
    }

    #[inline]
    pub fn mul_scalar(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn div_scalar(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }

    #[inline]
    pub fn add_scalar(self, s: T) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s)
    }

    #[inline]
    pub fn sub_scalar(self, s: T) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise minimum.
    pub fn min(self, rhs: Self) -> Self {
        Self::new(
            if self.x < rhs.x { self.x } else { rhs.x },
            if self.y < rhs.y { self.y } else { rhs.y },
            if self.z < rhs.z { self.z } else { rhs.z },
        )
    }

    /// Component-wise maximum.
    pub fn max(self, rhs: Self) -> Self {
        Self::new(
            if self.x > rhs.x { self.x } else { rhs.x },
            if self.y > rhs.y { self.y } else { rhs.y },
            if self.z > rhs.z { self.z } else { rhs.z },
        )
    }

    pub fn max_component(self) -> T {
        let m = if self.x > self.y { self.x } else { self.y };
        if m > self.z { m } else { self.z }
    }

    pub fn min_component(self) -> T {
        let m = if self.x < self.y { self.x } else { self.y };
        if m < self.z { m } else { self.z }
    }

    /// True if any component is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan_value() || self.y.is_nan_value() || self.z.is_nan_value()
    }

    /// True if any component is ±∞.
    pub fn is_infinite(self) -> bool {
        self.x.is_infinite_value() || self.y.is_infinite_value() || self.z.is_infinite_value()
    }

    /// Neither NaN nor infinite.
    pub fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Exact test `length² == 1`; vectors a rounding step away from unit length fail it.
    pub fn is_unit(self) -> bool {
        self.length_squared() == T::ONE
    }

    /// Exact test for all components equal to zero.
    pub fn is_zero(self) -> bool {
        self.x == T::ZERO && self.y == T::ZERO && self.z == T::ZERO
    }

    /// [`Vec3::is_unit`] within [`tolerance`].
    pub fn is_unit_approx(self) -> bool {
        (self.length_squared() - T::ONE).abs() <= tolerance()
    }

    /// [`Vec3::is_zero`] within [`tolerance`].
    pub fn is_zero_approx(self) -> bool {
        self.length_squared() <= tolerance::<T>() * tolerance::<T>()
    }

    /// Appends a fourth component.
    #[inline]
    pub const fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Translation matrix moving points by `self`.
    pub fn translation_matrix(self) -> Mat4<T> {
        Mat4::translation(self.x, self.y, self.z)
    }

    /// Scale matrix with `self` on the diagonal.
    pub fn scale_matrix(self) -> Mat4<T> {
        Mat4::scale(self.x, self.y, self.z)
    }

    /// Rotation matrix treating the components as Euler angles in **degrees**.
    pub fn rotation_matrix(self) -> Mat4<T> {
        Mat4::rotation_euler(self.x, self.y, self.z)
    }

    /// The pure quaternion `(x, y, z, 0)`.
    #[inline]
    pub const fn to_quat(self) -> Quat<T> {
        Quat::new(self.x, self.y, self.z, T::ZERO)
    }
}

impl<T: Real> Add for Vec3<T> {
    type Output = Self;
    #[inline]
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z)
    }
}

impl<T: Real> Sub for Vec3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z)
    }
}

impl<T: Real> Mul for Vec3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, r: Self) -> Self {
        Self::new(self.x * r.x, self.y * r.y, self.z * r.z)
    }
}

impl<T: Real> Div for Vec3<T> {
    type Output = Self;
    #[inline]
    fn div(self, r: Self) -> Self {
        Self::new(self.x / r.x, self.y / r.y, self.z / r.z)
    }
}

impl<T: Real> Neg for Vec3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl_scalar_ops!(Vec3, f32, f64);

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl<T: Real> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec3{}({:?}/{:?}/{:?})", T::PRECISION, self.x, self.y, self.z)
    }
}

impl<T: Real> From<[T; 3]> for Vec3<T> {
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Real> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        v.to_array()
    }
}

// nalgebra interop
impl<T: Real> From<nalgebra::Vector3<T>> for Vec3<T> {
    fn from(v: nalgebra::Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Real> From<Vec3<T>> for nalgebra::Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl<T: Real> From<nalgebra::Point3<T>> for Vec3<T> {
    fn from(p: nalgebra::Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<T: Real> From<Vec3<T>> for nalgebra::Point3<T> {
    fn from(v: Vec3<T>) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}
