//! Named matrix constructors.
//!
//! Each builder fills a local row array and finalizes it with [`Mat4::from_rows`]; the
//! scratch rows never leave the function.

use super::Mat4;
use crate::float_types::Real;
use crate::vector::Vec3;

impl<T: Real> Mat4<T> {
    pub fn identity() -> Self {
        Self::from_rows(identity_rows())
    }

    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut m = identity_rows();
        m[0][3] = x;
        m[1][3] = y;
        m[2][3] = z;
        Self::from_rows(m)
    }

    pub fn scale(x: T, y: T, z: T) -> Self {
        let mut m = identity_rows();
        m[0][0] = x;
        m[1][1] = y;
        m[2][2] = z;
        Self::from_rows(m)
    }

    /// Rotation from Euler angles given in **degrees**, composed as `Rz · Ry · Rx`
    /// (the x rotation is applied first).
    ///
    /// This is the only angle-taking constructor that expects degrees; all others use radians.
    pub fn rotation_euler(x_deg: T, y_deg: T, z_deg: T) -> Self {
        let (x, y, z) = (x_deg.deg_to_rad(), y_deg.deg_to_rad(), z_deg.deg_to_rad());

        let mut rx = identity_rows();
        rx[1][1] = x.cos();
        rx[1][2] = -x.sin();
        rx[2][1] = x.sin();
        rx[2][2] = x.cos();

        let mut ry = identity_rows();
        ry[0][0] = y.cos();
        ry[0][2] = y.sin();
        ry[2][0] = -y.sin();
        ry[2][2] = y.cos();

        let mut rz = identity_rows();
        rz[0][0] = z.cos();
        rz[0][1] = -z.sin();
        rz[1][0] = z.sin();
        rz[1][1] = z.cos();

        Self::from_rows(rz) * (Self::from_rows(ry) * Self::from_rows(rx))
    }

    /// Rotation whose rows are `right`, `up` and `forward`.
    ///
    /// The basis is used as given; pass orthonormal vectors for a proper rotation.
    pub fn rotation_basis(forward: Vec3<T>, up: Vec3<T>, right: Vec3<T>) -> Self {
        let (f, u, r) = (forward, up, right);
        let o = T::ZERO;
        Self::from_rows([
            [r.x, r.y, r.z, o],
            [u.x, u.y, u.z, o],
            [f.x, f.y, f.z, o],
            [o, o, o, T::ONE],
        ])
    }

    /// Rotation from a forward direction and an approximate up vector.
    ///
    /// `up` is re-orthogonalized: `right = normalize(up × forward)`, `up = forward × right`.
    pub fn rotation_look(forward: Vec3<T>, up: Vec3<T>) -> Self {
        let f = forward.normalize();
        let r = up.normalize().cross(f).normalize();
        let u = f.cross(r);
        Self::rotation_basis(f, u, r)
    }

    /// Right-handed perspective projection with OpenGL clip depth (`-1..1`).
    ///
    /// `fov` is the vertical field of view in radians, `aspect` is width / height.
    pub fn perspective(fov: T, aspect: T, near: T, far: T) -> Self {
        let tan_half_fov = (fov * T::HALF).tan();
        let range = near - far;
        let o = T::ZERO;
        Self::from_rows([
            [T::ONE / (tan_half_fov * aspect), o, o, o],
            [o, T::ONE / tan_half_fov, o, o],
            [o, o, (near + far) / range, T::TWO * far * near / range],
            [o, o, -T::ONE, o],
        ])
    }

    /// [`Mat4::perspective`] with the aspect ratio given as a width and a height.
    pub fn perspective_size(fov: T, width: T, height: T, near: T, far: T) -> Self {
        Self::perspective(fov, width / height, near, far)
    }

    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        let o = T::ZERO;
        Self::from_rows([
            [T::TWO / width, o, o, -(right + left) / width],
            [o, T::TWO / height, o, -(top + bottom) / height],
            [o, o, -T::TWO / depth, -(far + near) / depth],
            [o, o, o, T::ONE],
        ])
    }

    /// Off-center perspective frustum, replacing rather than multiplying.
    pub fn frustum_non_post(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let o = T::ZERO;
        let two_near = T::TWO * near;
        Self::from_rows([
            [two_near / (right - left), o, (right + left) / (right - left), o],
            [o, two_near / (top - bottom), (top + bottom) / (top - bottom), o],
            [o, o, -(far + near) / (far - near), -(two_near * far) / (far - near)],
            [o, o, -T::ONE, o],
        ])
    }

    /// `self · frustum_non_post(..)`.
    pub fn frustum(&self, left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        *self * Self::frustum_non_post(left, right, bottom, top, near, far)
    }

    /// Camera matrix `rotation · translation(-position)`.
    pub fn view(position: Vec3<T>, rotation: &Self) -> Self {
        *rotation * Self::translation(-position.x, -position.y, -position.z)
    }

    /// Right-handed look-at: the camera sits at `eye` and looks down −z towards `target`.
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        Self::view(eye, &Self::rotation_basis(-f, u, s))
    }

    /// `translation(position) · scale(scale)`.
    pub fn model(position: Vec3<T>, scale: Vec3<T>) -> Self {
        Self::translation(position.x, position.y, position.z) * Self::scale(scale.x, scale.y, scale.z)
    }

    /// `projection · view · model`; points are transformed by the model first.
    pub fn mvp(model: &Self, view: &Self, projection: &Self) -> Self {
        *projection * (*view * *model)
    }
}

fn identity_rows<T: Real>() -> [[T; 4]; 4] {
    let mut m = [[T::ZERO; 4]; 4];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = T::ONE;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_points() {
        let m = Mat4::translation(1.0f64, 2.0, 3.0);
        assert_eq!(m.transform(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_direction(Vec3::X), Vec3::X);
    }

    #[test]
    fn basis_lays_out_rows() {
        let m = Mat4::rotation_basis(Vec3::<f32>::Z, Vec3::Y, Vec3::X);
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn look_rotation_reorthogonalizes_up() {
        let m = Mat4::rotation_look(Vec3::new(0.0f64, 0.0, 2.0), Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(m, Mat4::identity());
    }
}
