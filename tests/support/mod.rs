//! Test support library
//! Provides comparison helpers shared by the integration tests.
#![allow(dead_code)]

use geokern::{Mat4, Quat, Vec3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

pub fn vec3_approx_eq(a: Vec3<f64>, b: Vec3<f64>, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

/// Same rotation up to sign: `q` and `-q` are equivalent.
pub fn quat_rotation_eq(a: Quat<f64>, b: Quat<f64>, eps: f64) -> bool {
    approx_eq(a.dot(b).abs(), 1.0, eps)
}

pub fn mat4_approx_eq(a: &Mat4<f64>, b: &Mat4<f64>, eps: f64) -> bool {
    (0..4).all(|r| (0..4).all(|c| approx_eq(a.get(r, c), b.get(r, c), eps)))
}

/// Converts a nalgebra matrix for comparison against the kernel's own constructors.
pub fn from_nalgebra(m: nalgebra::Matrix4<f64>) -> Mat4<f64> {
    Mat4::from(m)
}

/// Axes used to exercise rotation code: the three cardinal axes and the main diagonal.
pub fn sample_axes() -> Vec<Vec3<f64>> {
    vec![
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 1.0).normalize(),
    ]
}
