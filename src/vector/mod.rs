//! Three- and four-component vectors.
//!
//! Both types are plain `Copy` values generic over the scalar precision; every operation
//! returns a new vector. Validity (`is_nan`, `is_infinite`, `is_valid`) is a query, never
//! enforced at construction, so NaN/∞ sentinel vectors are representable.

mod swizzle;
mod vec3;
mod vec4;

pub use vec3::Vec3;
pub use vec4::Vec4;

pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;

/// Implements `vector * scalar`, `vector / scalar` and `scalar * vector` for the
/// concrete scalar types. Generic code uses `mul_scalar`/`div_scalar` instead.
macro_rules! impl_scalar_ops {
    ($vec:ident, $($scalar:ty),*) => {
        $(
            impl core::ops::Mul<$scalar> for $vec<$scalar> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    self.mul_scalar(rhs)
                }
            }

            impl core::ops::Div<$scalar> for $vec<$scalar> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    self.div_scalar(rhs)
                }
            }

            impl core::ops::Mul<$vec<$scalar>> for $scalar {
                type Output = $vec<$scalar>;
                #[inline]
                fn mul(self, rhs: $vec<$scalar>) -> $vec<$scalar> {
                    rhs.mul_scalar(self)
                }
            }
        )*
    };
}

pub(crate) use impl_scalar_ops;
