//! 4×4 matrices.
//!
//! [`Mat4`] is addressed row-major as `(row, column)` and transforms column vectors, so a
//! product `a * b` applies `b` first. Translation lives in column 3. Storage is a
//! [`nalgebra::Matrix4`], which makes conversion to and from nalgebra free.
//!
//! Nothing here fails on degenerate input: singular matrices and zero-sized frusta simply
//! produce whatever IEEE-754 arithmetic yields.

mod construct;
mod frustum;

use crate::float_types::Real;
use crate::vector::{Vec3, Vec4};
use core::fmt;
use core::ops::{Add, Index, Mul, Neg, Sub};
use nalgebra::Matrix4;

pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;

/// A 4×4 matrix value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat4<T: Real> {
    inner: Matrix4<T>,
}

impl<T: Real> Mat4<T> {
    /// All-zero matrix.
    pub fn zero() -> Self {
        Self {
            inner: Matrix4::from_element(T::ZERO),
        }
    }

    /// Builds a matrix from rows: `rows[r][c]` lands at `(r, c)`.
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self {
            inner: Matrix4::new(
                r0[0], r0[1], r0[2], r0[3], //
                r1[0], r1[1], r1[2], r1[3], //
                r2[0], r2[1], r2[2], r2[3], //
                r3[0], r3[1], r3[2], r3[3],
            ),
        }
    }

    /// The rows as arrays, `to_rows()[r][c] == get(r, c)`.
    pub fn to_rows(&self) -> [[T; 4]; 4] {
        let mut rows = [[T::ZERO; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.inner[(r, c)];
            }
        }
        rows
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// If `row` or `col` is greater than 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.inner[(row, col)]
    }

    pub fn row(&self, i: usize) -> Vec4<T> {
        Vec4::new(self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3))
    }

    pub fn column(&self, i: usize) -> Vec4<T> {
        Vec4::new(self.get(0, i), self.get(1, i), self.get(2, i), self.get(3, i))
    }

    pub fn transpose(&self) -> Self {
        Self {
            inner: self.inner.transpose(),
        }
    }

    /// Borrow the nalgebra matrix.
    #[inline]
    pub const fn as_nalgebra(&self) -> &Matrix4<T> {
        &self.inner
    }

    /// Element-wise product.
    pub fn component_mul(&self, rhs: &Self) -> Self {
        Self {
            inner: self.inner.component_mul(&rhs.inner),
        }
    }

    /// Element-wise quotient.
    pub fn component_div(&self, rhs: &Self) -> Self {
        Self {
            inner: self.inner.component_div(&rhs.inner),
        }
    }

    pub fn mul_scalar(&self, s: T) -> Self {
        Self {
            inner: self.inner.map(|v| v * s),
        }
    }

    pub fn div_scalar(&self, s: T) -> Self {
        Self {
            inner: self.inner.map(|v| v / s),
        }
    }

    /// Post-multiplies by a scale matrix: column `j` of every row is multiplied by `s[j]`.
    pub fn post_scale(&self, s: Vec3<T>) -> Self {
        let mut rows = self.to_rows();
        for row in rows.iter_mut() {
            row[0] = row[0] * s.x;
            row[1] = row[1] * s.y;
            row[2] = row[2] * s.z;
        }
        Self::from_rows(rows)
    }

    /// Full 4×4 determinant by cofactor expansion over 2×2 minors.
    pub fn determinant(&self) -> T {
        let m = |r, c| self.get(r, c);

        (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)) * (m(2, 2) * m(3, 3) - m(2, 3) * m(3, 2))
            + (m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2)) * (m(2, 1) * m(3, 3) - m(2, 3) * m(3, 1))
            + (m(0, 0) * m(1, 3) - m(0, 3) * m(1, 0)) * (m(2, 1) * m(3, 2) - m(2, 2) * m(3, 1))
            + (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)) * (m(2, 0) * m(3, 3) - m(2, 3) * m(3, 0))
            + (m(0, 3) * m(1, 1) - m(0, 1) * m(1, 3)) * (m(2, 0) * m(3, 2) - m(2, 2) * m(3, 0))
            + (m(0, 2) * m(1, 3) - m(0, 3) * m(1, 2)) * (m(2, 0) * m(3, 1) - m(2, 1) * m(3, 0))
    }

    /// Determinant of the upper-left 3×3 block.
    pub fn determinant_3x3(&self) -> T {
        let m = |r, c| self.get(r, c);

        (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)) * m(2, 2)
            + (m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2)) * m(2, 1)
            + (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)) * m(2, 0)
    }

    /// Applies the matrix to a point (implicit `w = 1`), without a perspective divide.
    pub fn transform(&self, v: Vec3<T>) -> Vec3<T> {
        self.transform_vec4(v.extend(T::ONE)).truncate()
    }

    /// Applies the matrix to a direction (implicit `w = 0`), ignoring translation.
    pub fn transform_direction(&self, v: Vec3<T>) -> Vec3<T> {
        self.transform_vec4(v.extend(T::ZERO)).truncate()
    }

    pub fn transform_vec4(&self, v: Vec4<T>) -> Vec4<T> {
        let m = |r, c| self.get(r, c);
        Vec4::new(
            m(0, 0) * v.x + m(0, 1) * v.y + m(0, 2) * v.z + m(0, 3) * v.w,
            m(1, 0) * v.x + m(1, 1) * v.y + m(1, 2) * v.z + m(1, 3) * v.w,
            m(2, 0) * v.x + m(2, 1) * v.y + m(2, 2) * v.z + m(2, 3) * v.w,
            m(3, 0) * v.x + m(3, 1) * v.y + m(3, 2) * v.z + m(3, 3) * v.w,
        )
    }

    /// Column 3 as a vector.
    pub fn translation_part(&self) -> Vec3<T> {
        Vec3::new(self.get(0, 3), self.get(1, 3), self.get(2, 3))
    }

    pub fn is_nan(&self) -> bool {
        self.inner.iter().any(|v| v.is_nan_value())
    }

    pub fn is_valid(&self) -> bool {
        self.inner.iter().all(|v| !v.is_nan_value() && !v.is_infinite_value())
    }
}

impl<T: Real> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Add for Mat4<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            inner: self.inner + rhs.inner,
        }
    }
}

impl<T: Real> Sub for Mat4<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            inner: self.inner - rhs.inner,
        }
    }
}

impl<T: Real> Neg for Mat4<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { inner: -self.inner }
    }
}

/// Matrix product: `res[i][j] = Σₖ self[i][k]·rhs[k][j]`.
impl<T: Real> Mul for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            inner: self.inner * rhs.inner,
        }
    }
}

impl<T: Real> Mul<&Mat4<T>> for &Mat4<T> {
    type Output = Mat4<T>;
    fn mul(self, rhs: &Mat4<T>) -> Mat4<T> {
        Mat4 {
            inner: self.inner * rhs.inner,
        }
    }
}

impl<T: Real> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.transform_vec4(rhs)
    }
}

impl<T: Real> Index<(usize, usize)> for Mat4<T> {
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &T {
        &self.inner[index]
    }
}

impl<T: Real> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mat4{}[", T::PRECISION)?;
        for r in 0..4 {
            if r > 0 {
                f.write_str(",")?;
            }
            write!(
                f,
                "({:?}/{:?}/{:?}/{:?})",
                self.get(r, 0),
                self.get(r, 1),
                self.get(r, 2),
                self.get(r, 3)
            )?;
        }
        f.write_str("]")
    }
}

impl<T: Real> From<Matrix4<T>> for Mat4<T> {
    fn from(inner: Matrix4<T>) -> Self {
        Self { inner }
    }
}

impl<T: Real> From<Mat4<T>> for Matrix4<T> {
    fn from(m: Mat4<T>) -> Self {
        m.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_display() {
        assert_eq!(
            Mat4::<f64>::identity().to_string(),
            "mat4d[(1.0/0.0/0.0/0.0),(0.0/1.0/0.0/0.0),(0.0/0.0/1.0/0.0),(0.0/0.0/0.0/1.0)]"
        );
    }

    #[test]
    fn rows_round_trip() {
        let rows = [
            [1.0f32, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        let m = Mat4::from_rows(rows);
        assert_eq!(m.to_rows(), rows);
        assert_eq!(m.get(1, 2), 7.0);
        assert_eq!(m[(3, 0)], 13.0);
        assert_eq!(m.row(2), Vec4::new(9.0, 10.0, 11.0, 12.0));
        assert_eq!(m.column(2), Vec4::new(3.0, 7.0, 11.0, 15.0));
    }

    #[test]
    fn determinant_matches_nalgebra() {
        let m = Mat4::from_rows([
            [2.0f64, -1.0, 0.5, 3.0],
            [0.0, 4.0, 1.0, -2.0],
            [1.5, 0.0, -3.0, 1.0],
            [0.25, 2.0, 1.0, 5.0],
        ]);
        let expected = m.as_nalgebra().determinant();
        assert!((m.determinant() - expected).abs() < 1e-9);
    }

    #[test]
    fn determinant_3x3_ignores_last_row_and_column() {
        let m = Mat4::from_rows([
            [1.0f64, 2.0, 3.0, 100.0],
            [0.0, 1.0, 4.0, 100.0],
            [5.0, 6.0, 0.0, 100.0],
            [100.0, 100.0, 100.0, 100.0],
        ]);
        assert_eq!(m.determinant_3x3(), 1.0);
    }
}
