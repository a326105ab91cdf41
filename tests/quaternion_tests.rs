mod support;

use geokern::{Mat4, Quat, Vec3};
use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use support::{approx_eq, mat4_approx_eq, quat_rotation_eq, sample_axes, vec3_approx_eq};

const ANGLES: [f64; 5] = [0.3, FRAC_PI_2, 2.0, 3.1, PI];

#[test]
fn axis_angle_matches_nalgebra() {
    for axis in sample_axes() {
        for angle in ANGLES {
            let q = Quat::from_axis_angle(axis, angle);
            let reference = UnitQuaternion::from_axis_angle(
                &Unit::new_normalize(Vector3::from(axis)),
                angle,
            );
            let expected = Quat::from(reference);
            assert!(approx_eq(q.x, expected.x, 1e-12));
            assert!(approx_eq(q.y, expected.y, 1e-12));
            assert!(approx_eq(q.z, expected.z, 1e-12));
            assert!(approx_eq(q.w, expected.w, 1e-12));
        }
    }
}

#[test]
fn rotation_matrix_matches_nalgebra() {
    let axis = Vec3::new(0.2f64, -0.7, 0.4).normalize();
    let q = Quat::from_axis_angle(axis, 1.3);
    let expected = UnitQuaternion::from(q).to_homogeneous();
    assert!(mat4_approx_eq(&q.rotation_matrix(), &Mat4::from(expected), 1e-12));
}

#[test]
fn matrix_conversion_yields_unit_length() {
    for axis in sample_axes() {
        for angle in ANGLES {
            let m = Quat::from_axis_angle(axis, angle).rotation_matrix();
            let q = Quat::from_matrix(&m);
            assert!(approx_eq(q.length(), 1.0, 1e-14), "axis {axis} angle {angle}");
        }
    }
}

#[test]
fn matrix_round_trip_covers_every_branch() {
    // small angles take the trace branch; angles near pi fall through to the
    // largest-diagonal branches, one per cardinal axis
    for axis in sample_axes() {
        for angle in ANGLES {
            let original = Quat::from_axis_angle(axis, angle);
            let m = original.rotation_matrix();
            let q = Quat::from_matrix(&m);
            assert!(mat4_approx_eq(&q.rotation_matrix(), &m, 1e-12), "axis {axis} angle {angle}");
            assert!(quat_rotation_eq(q, original, 1e-12));
        }
    }
}

#[test]
fn basis_matrix_round_trip() {
    let forward = Vec3::new(1.0f64, 0.0, 1.0).normalize();
    let up = Vec3::Y;
    let right = up.cross(forward);
    let m = Mat4::rotation_basis(forward, up, right);
    let q = Quat::from_matrix(&m);
    assert!(approx_eq(q.length(), 1.0, 1e-14));
    assert!(mat4_approx_eq(&q.rotation_matrix(), &m, 1e-12));
}

#[test]
fn matrix_conversion_renormalizes_noisy_input() {
    let m = Quat::from_axis_angle(Vec3::<f64>::Z, 0.7).rotation_matrix().mul_scalar(1.0 + 1e-7);
    let mut rows = m.to_rows();
    rows[3][3] = 1.0;
    let q = Quat::from_matrix(&Mat4::from_rows(rows));
    assert!(approx_eq(q.length(), 1.0, 1e-14));
}

#[test]
fn directional_accessors() {
    let q = Quat::from_axis_angle(Vec3::<f64>::Y, FRAC_PI_2);
    assert!(vec3_approx_eq(q.forward(), Vec3::X, 1e-12));
    assert!(vec3_approx_eq(q.back(), -Vec3::X, 1e-12));
    assert!(vec3_approx_eq(q.right(), -Vec3::Z, 1e-12));
    assert!(vec3_approx_eq(q.left(), Vec3::Z, 1e-12));
    assert!(vec3_approx_eq(q.up(), Vec3::Y, 1e-12));
    assert!(vec3_approx_eq(q.down(), -Vec3::Y, 1e-12));
}

#[test]
fn identity_accessors_are_the_axes() {
    let q = Quat::<f32>::IDENTITY;
    assert_eq!(q.forward(), Vec3::Z);
    assert_eq!(q.up(), Vec3::Y);
    assert_eq!(q.right(), Vec3::X);
    assert_eq!(q.rotation_matrix(), Mat4::identity());
}

#[test]
fn product_composes_rotations() {
    let a = Quat::from_axis_angle(Vec3::<f64>::Z, 0.4);
    let b = Quat::from_axis_angle(Vec3::<f64>::X, 1.1);
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx_eq((a * b) * v, a * (b * v), 1e-12));
    assert!(mat4_approx_eq(
        &(a * b).rotation_matrix(),
        &(a.rotation_matrix() * b.rotation_matrix()),
        1e-12
    ));
}

#[test]
fn product_drifts_without_normalize() {
    let step = Quat::new(0.01f32, 0.02, 0.0, 1.0);
    let mut q = Quat::IDENTITY;
    for _ in 0..100 {
        q = q * step;
    }
    assert!((q.length() - 1.0).abs() > 1e-3);
    assert!((q.normalize().length() - 1.0).abs() < 1e-6);
}

#[test]
fn euler_degrees_match_matrix() {
    let q = Quat::from_euler_degrees(20.0f64, 40.0, -60.0);
    let m = Mat4::rotation_euler(20.0, 40.0, -60.0);
    assert!(mat4_approx_eq(&q.rotation_matrix(), &m, 1e-12));
}

#[test]
fn conjugate_and_inverse() {
    let q = Quat::new(1.0f64, 2.0, 3.0, 4.0);
    assert_eq!(q.conjugate(), Quat::new(-1.0, -2.0, -3.0, 4.0));
    let product = q * q.inverse();
    assert!(quat_rotation_eq(product, Quat::IDENTITY, 1e-12));
    assert!(approx_eq(product.w, 1.0, 1e-12));
}

#[test]
fn scalar_algebra() {
    let q = Quat::new(1.0f64, 2.0, 3.0, 4.0);
    assert_eq!(q * 2.0, Quat::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(q / 2.0, Quat::new(0.5, 1.0, 1.5, 2.0));
    assert_eq!(q + q, q * 2.0);
    assert_eq!(q - q, Quat::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(q.add_scalar(1.0), Quat::new(2.0, 3.0, 4.0, 5.0));
    assert_eq!(q.dot(q), 30.0);
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let a = Quat::<f64>::IDENTITY;
    let b = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
    assert!(quat_rotation_eq(a.slerp(b, 0.0, true), a, 1e-12));
    assert!(quat_rotation_eq(a.slerp(b, 1.0, true), b, 1e-12));
    let mid = a.slerp(b, 0.5, true);
    assert!(quat_rotation_eq(mid, Quat::from_axis_angle(Vec3::Z, FRAC_PI_4), 1e-12));
    assert!(approx_eq(mid.length(), 1.0, 1e-12));
}

#[test]
fn slerp_takes_shortest_path() {
    let a = Quat::<f64>::IDENTITY;
    let b = -Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
    let mid = a.slerp(b, 0.5, true);
    assert!(quat_rotation_eq(mid, Quat::from_axis_angle(Vec3::Z, FRAC_PI_4), 1e-12));
}

#[test]
fn nlerp_of_nearly_equal_rotations() {
    let a = Quat::from_axis_angle(Vec3::<f64>::X, 0.1);
    let b = Quat::from_axis_angle(Vec3::<f64>::X, 0.1001);
    let q = a.slerp(b, 0.5, false);
    assert!(approx_eq(q.length(), 1.0, 1e-12));
    let (axis, angle) = q.axis_angle();
    assert!(vec3_approx_eq(axis, Vec3::X, 1e-9));
    assert!(approx_eq(angle, 0.10005, 1e-6));
}

#[test]
fn axis_angle_extraction() {
    let axis = Vec3::new(1.0f64, -2.0, 2.0).normalize();
    let (a, angle) = Quat::from_axis_angle(axis, 1.25).axis_angle();
    assert!(vec3_approx_eq(a, axis, 1e-12));
    assert!(approx_eq(angle, 1.25, 1e-12));

    let (a, angle) = Quat::<f64>::IDENTITY.axis_angle();
    assert_eq!((a, angle), (Vec3::X, 0.0));
}

#[test]
fn validity() {
    assert!(Quat::new(0.0f64, 0.0, 0.0, 0.0).normalize().is_nan());
    assert!(!Quat::new(f64::INFINITY, 0.0, 0.0, 1.0).is_valid());
    assert!(Quat::<f64>::IDENTITY.is_unit());
}
