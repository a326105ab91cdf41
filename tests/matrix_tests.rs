mod support;

use geokern::{ByteCodec, Mat4, Vec3, Vec4};
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use std::f64::consts::FRAC_PI_3;
use support::{approx_eq, from_nalgebra, mat4_approx_eq, vec3_approx_eq};

fn sample_matrix() -> Mat4<f64> {
    Mat4::from_rows([
        [2.0, -1.0, 0.5, 3.0],
        [0.0, 4.0, 1.0, -2.0],
        [1.5, 0.0, -3.0, 1.0],
        [0.25, 2.0, 0.0, 1.0],
    ])
}

#[test]
fn identity_laws() {
    let m = sample_matrix();
    assert_eq!(Mat4::identity() * m, m);
    assert_eq!(m * Mat4::identity(), m);
    assert_eq!(Mat4::<f32>::default(), Mat4::identity());
}

#[test]
fn identity_survives_binary_round_trip() {
    let bytes = Mat4::<f64>::identity().to_bytes();
    assert_eq!(bytes.len(), 128);
    let back = Mat4::<f64>::from_bytes(&bytes);
    assert_eq!(
        back.to_string(),
        "mat4d[(1.0/0.0/0.0/0.0),(0.0/1.0/0.0/0.0),(0.0/0.0/1.0/0.0),(0.0/0.0/0.0/1.0)]"
    );
}

#[test]
fn product_applies_right_operand_first() {
    let t = Mat4::translation(1.0f64, 0.0, 0.0);
    let s = Mat4::scale(2.0, 2.0, 2.0);
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!((t * s).transform(p), Vec3::new(3.0, 2.0, 2.0));
    assert_eq!((s * t).transform(p), Vec3::new(4.0, 2.0, 2.0));
}

#[test]
fn determinant_matches_nalgebra() {
    let m = sample_matrix();
    let reference = m.as_nalgebra().determinant();
    assert!(approx_eq(m.determinant(), reference, 1e-9));
    assert!(approx_eq(Mat4::<f64>::scale(2.0, 3.0, 4.0).determinant(), 24.0, 1e-12));
    assert_eq!(Mat4::<f64>::zero().determinant(), 0.0);
}

#[test]
fn determinant_3x3_of_rotation_is_one() {
    let m = Mat4::rotation_euler(30.0f64, -45.0, 60.0) * Mat4::translation(5.0, 6.0, 7.0);
    assert!(approx_eq(m.determinant_3x3(), 1.0, 1e-12));
}

#[test]
fn euler_rotation_matches_nalgebra() {
    let (x, y, z) = (30.0f64, -45.0f64, 110.0f64);
    let expected = Rotation3::from_euler_angles(x.to_radians(), y.to_radians(), z.to_radians())
        .to_homogeneous();
    let m = Mat4::rotation_euler(x, y, z);
    assert!(mat4_approx_eq(&m, &from_nalgebra(expected), 1e-12));
}

#[test]
fn perspective_matches_nalgebra() {
    let m = Mat4::perspective(FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
    let expected = Matrix4::new_perspective(16.0 / 9.0, FRAC_PI_3, 0.1, 100.0);
    assert!(mat4_approx_eq(&m, &from_nalgebra(expected), 1e-9));

    let sized = Mat4::perspective_size(FRAC_PI_3, 1920.0, 1080.0, 0.1, 100.0);
    assert!(mat4_approx_eq(&sized, &m, 1e-12));
}

#[test]
fn orthographic_matches_nalgebra() {
    let m = Mat4::orthographic(-2.0f64, 4.0, -1.0, 3.0, 0.5, 50.0);
    let expected = Matrix4::new_orthographic(-2.0, 4.0, -1.0, 3.0, 0.5, 50.0);
    assert!(mat4_approx_eq(&m, &from_nalgebra(expected), 1e-12));
}

#[test]
fn look_at_matches_nalgebra() {
    let eye = Vec3::new(3.0f64, 2.0, 5.0);
    let target = Vec3::new(-1.0, 0.5, 0.0);
    let m = Mat4::look_at(eye, target, Vec3::Y);
    let expected = Matrix4::look_at_rh(
        &Point3::new(3.0, 2.0, 5.0),
        &Point3::new(-1.0, 0.5, 0.0),
        &Vector3::y(),
    );
    assert!(mat4_approx_eq(&m, &from_nalgebra(expected), 1e-12));

    // the eye lands on the origin and the target on the -z axis
    assert!(vec3_approx_eq(m.transform(eye), Vec3::ZERO, 1e-12));
    let t = m.transform(target);
    assert!(approx_eq(t.x, 0.0, 1e-12) && approx_eq(t.y, 0.0, 1e-12) && t.z < 0.0);
}

#[test]
fn frustum_post_multiplies() {
    let base = Mat4::translation(1.0f64, 2.0, 3.0);
    let f = Mat4::frustum_non_post(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
    assert_eq!(Mat4::identity().frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0), f);
    assert_eq!(base.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0), base * f);
}

#[test]
fn frustum_corner_rays() {
    let m = Mat4::frustum_non_post(-1.0f64, 1.0, -1.0, 1.0, 1.0, 10.0);
    let k = 1.0 / 3.0f64.sqrt();
    let corners = [
        ((0.0, 0.0), Vec3::new(-k, -k, -k)),
        ((1.0, 0.0), Vec3::new(k, -k, -k)),
        ((0.0, 1.0), Vec3::new(-k, k, -k)),
        ((1.0, 1.0), Vec3::new(k, k, -k)),
    ];
    for ((x, y), expected) in corners {
        assert!(vec3_approx_eq(m.frustum_ray_dir(x, y), expected, 1e-12), "corner ({x}, {y})");
    }
}

#[test]
fn off_center_frustum_ray_reaches_near_plane_corner() {
    // near plane at z = -2 spanning x in [-2, 1], y in [-1, 3]
    let m = Mat4::frustum_non_post(-2.0f64, 1.0, -1.0, 3.0, 2.0, 10.0);
    let bottom_left = m.frustum_ray_dir(0.0, 0.0);
    assert!(vec3_approx_eq(bottom_left, Vec3::new(-2.0, -1.0, -2.0).normalize(), 1e-12));
    let top_right = m.frustum_ray_dir(1.0, 1.0);
    assert!(vec3_approx_eq(top_right, Vec3::new(1.0, 3.0, -2.0).normalize(), 1e-12));
}

#[test]
fn mvp_order() {
    let model = Mat4::model(Vec3::new(1.0f64, 0.0, -4.0), Vec3::splat(2.0));
    let view = Mat4::look_at(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective(FRAC_PI_3, 1.5, 0.1, 50.0);
    let mvp = Mat4::mvp(&model, &view, &projection);

    let p = Vec4::new(0.5, -0.5, 0.25, 1.0);
    let stepwise = projection * (view * (model * p));
    let combined = mvp * p;
    for i in 0..4 {
        assert!(approx_eq(combined[i], stepwise[i], 1e-12));
    }
}

#[test]
fn view_moves_camera_to_origin() {
    let position = Vec3::new(4.0f64, -1.0, 2.0);
    let rotation = Mat4::rotation_euler(0.0, 90.0, 0.0);
    let view = Mat4::view(position, &rotation);
    assert!(vec3_approx_eq(view.transform(position), Vec3::ZERO, 1e-12));
}

#[test]
fn model_is_translation_times_scale() {
    let m = Mat4::model(Vec3::new(1.0f64, 2.0, 3.0), Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(m.transform(Vec3::ONE), Vec3::new(3.0, 5.0, 7.0));
    assert_eq!(m.translation_part(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn post_scale_equals_right_scale_product() {
    let m = sample_matrix();
    let s = Vec3::new(2.0, -3.0, 0.5);
    assert!(mat4_approx_eq(&m.post_scale(s), &(m * Mat4::scale(2.0, -3.0, 0.5)), 1e-12));
}

#[test]
fn row_major_addressing() {
    let m = sample_matrix();
    assert_eq!(m.get(0, 3), 3.0);
    assert_eq!(m[(1, 2)], 1.0);
    assert_eq!(m.row(2), Vec4::new(1.5, 0.0, -3.0, 1.0));
    assert_eq!(m.column(1), Vec4::new(-1.0, 4.0, 0.0, 2.0));
    assert_eq!(m.transpose().get(3, 0), 3.0);
}

#[test]
fn directions_ignore_translation() {
    let m = Mat4::translation(9.0f64, 9.0, 9.0) * Mat4::scale(2.0, 2.0, 2.0);
    assert_eq!(m.transform_direction(Vec3::X), Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn single_precision_projection() {
    let m = Mat4::perspective(1.0f32, 1.0, 1.0, 10.0);
    let expected = Matrix4::<f32>::new_perspective(1.0, 1.0, 1.0, 10.0);
    for r in 0..4 {
        for c in 0..4 {
            assert!((m.get(r, c) - expected[(r, c)]).abs() < 1e-6);
        }
    }
}

#[test]
fn validity() {
    let mut rows = Mat4::<f64>::identity().to_rows();
    rows[2][1] = f64::NAN;
    let m = Mat4::from_rows(rows);
    assert!(m.is_nan());
    assert!(!m.is_valid());
    assert!(Mat4::<f64>::identity().is_valid());
}
