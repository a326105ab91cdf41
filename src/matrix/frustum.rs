use super::Mat4;
use crate::float_types::Real;
use crate::vector::Vec3;

impl<T: Real> Mat4<T> {
    /// Normalized direction of the ray through the frustum at `(x, y)`, where `(0, 0)` is
    /// the left-bottom and `(1, 1)` the right-top corner of the near plane.
    ///
    /// `self` is a projection or combined view-projection matrix. The four corner rays are
    /// written directly in terms of 2×2 products of the upper three rows and bilinearly
    /// interpolated, so the matrix is never inverted.
    #[allow(clippy::many_single_char_names)]
    pub fn frustum_ray_dir(&self, x: T, y: T) -> Vec3<T> {
        // mCR: column C, row R
        let m = |c: usize, r: usize| self.get(r, c);
        let (m00, m01, m03) = (m(0, 0), m(0, 1), m(0, 3));
        let (m10, m11, m13) = (m(1, 0), m(1, 1), m(1, 3));
        let (m20, m21, m23) = (m(2, 0), m(2, 1), m(2, 3));

        let a = m10 * m23;
        let b = m13 * m21;
        let c = m10 * m21;
        let d = m11 * m23;
        let e = m13 * m20;
        let f = m11 * m20;
        let g = m03 * m20;
        let h = m01 * m23;
        let i = m01 * m20;
        let j = m03 * m21;
        let k = m00 * m23;
        let l = m00 * m21;
        let m_ = m00 * m13;
        let n = m03 * m11;
        let o = m00 * m11;
        let p = m01 * m13;
        let q = m03 * m10;
        let r = m01 * m10;

        let one_y = T::ONE - y;

        // left edge, bottom→top
        let m1x = (d + e + f - a - b - c) * one_y + (a - b - c + d - e + f) * y;
        let m1y = (j + k + l - g - h - i) * one_y + (g - h - i + j - k + l) * y;
        let m1z = (p + q + r - m_ - n - o) * one_y + (m_ - n - o + p - q + r) * y;

        // right edge, bottom→top
        let m2x = (b - c - d + e + f - a) * one_y + (a + b - c - d - e + f) * y;
        let m2y = (h - i - j + k + l - g) * one_y + (g + h - i - j - k + l) * y;
        let m2z = (n - o - p + q + r - m_) * one_y + (m_ + n - o - p - q + r) * y;

        Vec3::new(
            m1x + (m2x - m1x) * x,
            m1y + (m2y - m1y) * x,
            m1z + (m2z - m1z) * x,
        )
        .normalize()
    }
}
