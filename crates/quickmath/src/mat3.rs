use crate::{scalar, Vec2, Vec3};
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// 3x3 matrix, column-major storage.
///
/// Used for 2D homogeneous transforms and for the rotation/scale block of a
/// [`Mat4`](crate::Mat4). Indexing with `m[i]` yields column `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    /// Column 0
    pub c0: Vec3,
    /// Column 1
    pub c1: Vec3,
    /// Column 2
    pub c2: Vec3,
}

impl Mat3 {
    pub const ZERO: Self = Self::from_cols(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
    pub const IDENTITY: Self = Self::from_cols(Vec3::X, Vec3::Y, Vec3::Z);

    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self {
            c0: Vec3::new(m00, m10, m20),
            c1: Vec3::new(m01, m11, m21),
            c2: Vec3::new(m02, m12, m22),
        }
    }

    /// Construct from column vectors
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self[col][row]
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.c0[i], self.c1[i], self.c2[i])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.c0.dot(self.c1.cross(self.c2))
    }

    /// Inverse by adjugate over determinant.
    ///
    /// The determinant is never checked: a singular matrix produces
    /// infinite or NaN entries, so callers must only invert matrices they
    /// know to be non-singular.
    pub fn inverse(&self) -> Self {
        let Vec3 { x: a, y: b, z: c } = self.c0;
        let Vec3 { x: d, y: e, z: f } = self.c1;
        let Vec3 { x: g, y: h, z: i } = self.c2;

        let adj = Self::from_cols(
            Vec3::new(e * i - f * h, -(b * i - h * c), b * f - e * c),
            Vec3::new(-(d * i - g * f), a * i - c * g, -(a * f - d * c)),
            Vec3::new(d * h - g * e, -(a * h - g * b), a * e - b * d),
        );

        // Expansion along the first column.
        let det = a * adj.c0.x + b * adj.c1.x + c * adj.c2.x;
        degenerate!(det == 0.0, "inverting a singular Mat3");

        adj * (1.0 / det)
    }

    /// Matrix-vector product
    #[inline]
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }

    /// Matrix-matrix product
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3) -> Mat3 {
        Mat3::from_cols(self.mul_vec(rhs.c0), self.mul_vec(rhs.c1), self.mul_vec(rhs.c2))
    }

    /// 2D translation: identity with the last column set to `(t, 1)`.
    pub fn translation(t: Vec2) -> Self {
        let mut m = Self::IDENTITY;
        m.c2.x = t.x;
        m.c2.y = t.y;
        m
    }

    /// 2D non-uniform scale.
    pub fn scale(s: Vec2) -> Self {
        let mut m = Self::IDENTITY;
        m.c0.x = s.x;
        m.c1.y = s.y;
        m
    }

    /// Counter-clockwise 2D rotation by `angle` degrees.
    pub fn rotation(angle: f32) -> Self {
        let radians = scalar::deg_to_rad(angle);
        let sine = scalar::sin(radians);
        let cosine = scalar::cos(radians);

        let mut m = Self::IDENTITY;
        m.c0.x = cosine;
        m.c0.y = sine;
        m.c1.x = -sine;
        m.c1.y = cosine;
        m
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn index(&self, col: usize) -> &Vec3 {
        match col {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            _ => panic!("Mat3 column out of range: {col}"),
        }
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Vec3 {
        match col {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            _ => panic!("Mat3 column out of range: {col}"),
        }
    }
}

impl Add for Mat3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl Sub for Mat3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl AddAssign for Mat3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: &Mat3, b: &Mat3, eps: f32) {
        for c in 0..3 {
            for r in 0..3 {
                assert!(
                    (a[c][r] - b[c][r]).abs() < eps,
                    "mismatch at col {c} row {r}: {} vs {}",
                    a[c][r],
                    b[c][r]
                );
            }
        }
    }

    #[test]
    fn identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
        assert_eq!(Mat3::default(), Mat3::ZERO);
    }

    #[test]
    fn column_major_layout() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m[0], Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.row(2), Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn transpose() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let mt = m.transpose();
        assert_eq!(mt.get(0, 1), 4.0);
        assert_eq!(mt.get(1, 0), 2.0);
        assert_eq!(mt.transpose(), m);
    }

    #[test]
    fn inverse() {
        let m = Mat3::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
        assert_near(&(m * m.inverse()), &Mat3::IDENTITY, 1e-5);
        assert_near(&(m.inverse() * m), &Mat3::IDENTITY, 1e-5);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Mat3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0);
        let inv = m.inverse();
        assert!([inv.c0, inv.c1, inv.c2]
            .iter()
            .flat_map(|c| c.to_array())
            .any(|e| !e.is_finite()));
    }

    #[test]
    fn determinant() {
        assert!((Mat3::IDENTITY.determinant() - 1.0).abs() < 1e-6);
        let m = Mat3::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
        assert!((m.determinant() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn translate_point() {
        let m = Mat3::translation(Vec2::new(3.0, -2.0));
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(4.0, -1.0, 1.0));
        // Directions (z = 0) are unaffected
        assert_eq!(m * Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn scale_point() {
        let m = Mat3::scale(Vec2::new(2.0, 3.0));
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = Mat3::rotation(90.0);
        let rotated = r * Vec3::new(1.0, 0.0, 1.0);
        assert!(rotated.x.abs() < 1e-6);
        assert!((rotated.y - 1.0).abs() < 1e-6);
        assert_eq!(rotated.z, 1.0);
    }

    #[test]
    fn rotation_roundtrip() {
        let m = Mat3::rotation(37.0) * Mat3::rotation(-37.0);
        assert_near(&m, &Mat3::IDENTITY, 1e-6);
    }

    #[test]
    fn product_is_column_major() {
        // Translate after scale: p' = T * S * p
        let m = Mat3::translation(Vec2::new(1.0, 0.0)) * Mat3::scale(Vec2::new(2.0, 2.0));
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 2.0, 1.0));
    }
}
