use super::{Vec3, impl_scalar_ops};
use crate::float_types::{Real, tolerance};
use crate::quaternion::Quat;
use core::fmt;
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A four-component vector, also used for homogeneous coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Real> Vec4<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    pub const NAN: Self = Self::new(T::NAN, T::NAN, T::NAN, T::NAN);
    pub const INFINITY: Self = Self::new(T::INFINITY, T::INFINITY, T::INFINITY, T::INFINITY);

    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    pub fn distance_manhattan(self, other: Self) -> T {
        (self.x - other.x).abs()
            + (self.y - other.y).abs()
            + (self.z - other.z).abs()
            + (self.w - other.w).abs()
    }

    #[inline]
    pub fn distance_euclidean(self, other: Self) -> T {
        (self - other).length()
    }

    /// Unit vector in the same direction; an exactly zero-length vector is returned as is.
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

    /// `v − 2·(v·n)·n`
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.mul_scalar(T::TWO * self.dot(normal))
    }

    #[inline]
    pub fn lerp(self, dest: Self, amt: T) -> Self {
        self + (dest - self).mul_scalar(amt)
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

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    pub fn min(self, rhs: Self) -> Self {
        let pick = |a: T, b: T| if a < b { a } else { b };
        Self::new(pick(self.x, rhs.x), pick(self.y, rhs.y), pick(self.z, rhs.z), pick(self.w, rhs.w))
    }

    pub fn max(self, rhs: Self) -> Self {
        let pick = |a: T, b: T| if a > b { a } else { b };
        Self::new(pick(self.x, rhs.x), pick(self.y, rhs.y), pick(self.z, rhs.z), pick(self.w, rhs.w))
    }

    pub fn is_nan(self) -> bool {
        self.x.is_nan_value() || self.y.is_nan_value() || self.z.is_nan_value() || self.w.is_nan_value()
    }

    pub fn is_infinite(self) -> bool {
        self.x.is_infinite_value()
            || self.y.is_infinite_value()
            || self.z.is_infinite_value()
            || self.w.is_infinite_value()
    }

    pub fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Exact `length² == 1`.
    pub fn is_unit(self) -> bool {
        self.length_squared() == T::ONE
    }

    /// Exact all-zero test.
    pub fn is_zero(self) -> bool {
        self.x == T::ZERO && self.y == T::ZERO && self.z == T::ZERO && self.w == T::ZERO
    }

    pub fn is_unit_approx(self) -> bool {
        (self.length_squared() - T::ONE).abs() <= tolerance()
    }

    pub fn is_zero_approx(self) -> bool {
        self.length_squared() <= tolerance::<T>() * tolerance::<T>()
    }

    /// Drops `w`.
    #[inline]
    pub const fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Perspective divide: `xyz / w`. A zero `w` yields ∞/NaN components.
    pub fn homogenize(self) -> Vec3<T> {
        self.truncate().div_scalar(self.w)
    }

    /// Reorders/duplicates components by index, e.g. `[3, 2, 1, 0]` for `wzyx`.
    ///
    /// # Panics
    /// If an index is greater than 3.
    pub fn shuffle(self, indices: [usize; 4]) -> Self {
        Self::new(self[indices[0]], self[indices[1]], self[indices[2]], self[indices[3]])
    }

    /// Reinterprets the components as quaternion `(x, y, z, w)`.
    #[inline]
    pub const fn to_quat(self) -> Quat<T> {
        Quat::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Real> Add for Vec4<T> {
    type Output = Self;
    #[inline]
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z, self.w + r.w)
    }
}

impl<T: Real> Sub for Vec4<T> {
    type Output = Self;
    #[inline]
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z, self.w - r.w)
    }
}

impl<T: Real> Mul for Vec4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, r: Self) -> Self {
        Self::new(self.x * r.x, self.y * r.y, self.z * r.z, self.w * r.w)
    }
}

impl<T: Real> Div for Vec4<T> {
    type Output = Self;
    #[inline]
    fn div(self, r: Self) -> Self {
        Self::new(self.x / r.x, self.y / r.y, self.z / r.z, self.w / r.w)
    }
}

impl<T: Real> Neg for Vec4<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl_scalar_ops!(Vec4, f32, f64);

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {index}"),
        }
    }
}

impl<T: Real> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vec4{}({:?}/{:?}/{:?}/{:?})",
            T::PRECISION,
            self.x,
            self.y,
            self.z,
            self.w
        )
    }
}

impl<T: Real> From<[T; 4]> for Vec4<T> {
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Real> From<Vec4<T>> for [T; 4] {
    fn from(v: Vec4<T>) -> Self {
        v.to_array()
    }
}

impl<T: Real> From<nalgebra::Vector4<T>> for Vec4<T> {
    fn from(v: nalgebra::Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<T: Real> From<Vec4<T>> for nalgebra::Vector4<T> {
    fn from(v: Vec4<T>) -> Self {
        nalgebra::Vector4::new(v.x, v.y, v.z, v.w)
    }
}
