use crate::backend::active;
use crate::{scalar, Mat3, Vec3, Vec4};
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms and camera projections. Each column is a
/// [`Vec4`], so the matrix inherits its 16-byte alignment and the packed
/// backend works one column lane at a time. Indexing with `m[i]` yields
/// column `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

const _: () = assert!(core::mem::size_of::<Mat4>() == 64);

impl Mat4 {
    pub const ZERO: Self = Self::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);
    pub const IDENTITY: Self = Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);

    /// Construct from individual elements (row-major argument order for readability).
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            c0: Vec4::new(m00, m10, m20, m30),
            c1: Vec4::new(m01, m11, m21, m31),
            c2: Vec4::new(m02, m12, m22, m32),
            c3: Vec4::new(m03, m13, m23, m33),
        }
    }

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { c0, c1, c2, c3 }
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

    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.c0[i], self.c1[i], self.c2[i], self.c3[i])
    }

    /// Upper-left 3x3 block (rotation/scale part of an affine transform).
    #[inline]
    pub fn top_left(&self) -> Mat3 {
        Mat3::from_cols(self.c0.truncate(), self.c1.truncate(), self.c2.truncate())
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        active::mat4_transpose(self)
    }

    #[inline]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        active::mat4_mul_vec4(self, v)
    }

    #[inline]
    pub fn mul_mat(&self, rhs: &Mat4) -> Mat4 {
        active::mat4_mul(self, rhs)
    }

    /// Inverse by cofactor expansion over six shared 2x2 sub-determinants
    /// per pair of columns.
    ///
    /// Never validates the determinant: a singular matrix yields infinite
    /// or NaN entries.
    pub fn inverse(&self) -> Self {
        let Vec4 { x: a, y: b, z: c, w: d } = self.c0;
        let Vec4 { x: e, y: f, z: g, w: h } = self.c1;
        let Vec4 { x: i, y: j, z: k, w: l } = self.c2;
        let Vec4 { x: m, y: n, z: o, w: p } = self.c3;

        // Sub-determinants of the last two columns.
        let t = [
            k * p - o * l,
            j * p - n * l,
            j * o - n * k,
            i * p - m * l,
            i * o - m * k,
            i * n - m * j,
        ];
        let r00 = f * t[0] - g * t[1] + h * t[2];
        let r10 = -(e * t[0] - g * t[3] + h * t[4]);
        let r20 = e * t[1] - f * t[3] + h * t[5];
        let r30 = -(e * t[2] - f * t[4] + g * t[5]);
        let r01 = -(b * t[0] - c * t[1] + d * t[2]);
        let r11 = a * t[0] - c * t[3] + d * t[4];
        let r21 = -(a * t[1] - b * t[3] + d * t[5]);
        let r31 = a * t[2] - b * t[4] + c * t[5];

        // Columns 1 and 3.
        let t = [
            g * p - o * h,
            f * p - n * h,
            f * o - n * g,
            e * p - m * h,
            e * o - m * g,
            e * n - m * f,
        ];
        let r02 = b * t[0] - c * t[1] + d * t[2];
        let r12 = -(a * t[0] - c * t[3] + d * t[4]);
        let r22 = a * t[1] - b * t[3] + d * t[5];
        let r32 = -(a * t[2] - b * t[4] + c * t[5]);

        // Columns 1 and 2.
        let t = [
            g * l - k * h,
            f * l - j * h,
            f * k - j * g,
            e * l - i * h,
            e * k - i * g,
            e * j - i * f,
        ];
        let r03 = -(b * t[0] - c * t[1] + d * t[2]);
        let r13 = a * t[0] - c * t[3] + d * t[4];
        let r23 = -(a * t[1] - b * t[3] + d * t[5]);
        let r33 = a * t[2] - b * t[4] + c * t[5];

        let det = a * r00 + b * r10 + c * r20 + d * r30;
        degenerate!(det == 0.0, "inverting a singular Mat4");

        let adj = Self::from_cols(
            Vec4::new(r00, r01, r02, r03),
            Vec4::new(r10, r11, r12, r13),
            Vec4::new(r20, r21, r22, r23),
            Vec4::new(r30, r31, r32, r33),
        );
        active::mat4_scale(&adj, 1.0 / det)
    }

    /// Identity with the last column set to `(t, 1)`.
    pub fn translation(t: Vec3) -> Self {
        let mut mat = Self::IDENTITY;
        mat.c3 = t.extend(1.0);
        mat
    }

    pub fn scale(s: Vec3) -> Self {
        let mut mat = Self::IDENTITY;
        mat.c0.x = s.x;
        mat.c1.y = s.y;
        mat.c2.z = s.z;
        mat
    }

    /// Rotation of `angle` degrees about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized first; a zero axis gives a matrix whose upper
    /// 3x3 is `cos(angle)` on the diagonal and zero elsewhere.
    pub fn rotation_axis(axis: Vec3, angle: f32) -> Self {
        let radians = scalar::deg_to_rad(angle);
        let s = scalar::sin(radians);
        let c = scalar::cos(radians);
        let c2 = 1.0 - c;

        let Vec3 { x, y, z } = axis.normalize();

        Self::from_cols(
            Vec4::new(x * x * c2 + c, x * y * c2 + z * s, x * z * c2 - y * s, 0.0),
            Vec4::new(y * x * c2 - z * s, y * y * c2 + c, y * z * c2 + x * s, 0.0),
            Vec4::new(z * x * c2 + y * s, z * y * c2 - x * s, z * z * c2 + c, 0.0),
            Vec4::W,
        )
    }

    /// Rotation from Euler angles in degrees, applied X then Y then Z
    /// (`Rz * Ry * Rx`), written out as one fused matrix.
    pub fn rotation_euler(angles: Vec3) -> Self {
        let (sx, cx) = sin_cos_degrees(angles.x);
        let (sy, cy) = sin_cos_degrees(angles.y);
        let (sz, cz) = sin_cos_degrees(angles.z);

        Self::from_cols(
            Vec4::new(cy * cz, cy * sz, -sy, 0.0),
            Vec4::new(sx * sy * cz - cx * sz, sx * sy * sz + cx * cz, sx * cy, 0.0),
            Vec4::new(cx * sy * cz + sx * sz, cx * sy * sz - sx * cz, cx * cy, 0.0),
            Vec4::W,
        )
    }

    /// Perspective projection with a vertical field of view in degrees.
    ///
    /// Maps view-space `-z` into clip space with `w = -z`. Every entry not
    /// written below is exactly zero.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let scale = scalar::tan(scalar::deg_to_rad(fov * 0.5)) * near;
        let right = aspect * scale;
        let top = scale;

        let mut mat = Self::ZERO;
        mat.c0.x = near / right;
        mat.c1.y = near / top;
        mat.c2.z = -(far + near) / (far - near);
        mat.c2.w = -1.0;
        mat.c3.z = -2.0 * far * near / (far - near);
        mat
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x
    /// [near, far]` onto the unit cube.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut mat = Self::IDENTITY;
        mat.c0.x = 2.0 / (right - left);
        mat.c1.y = 2.0 / (top - bottom);
        mat.c2.z = 2.0 / (near - far);
        mat.c3.x = (left + right) / (left - right);
        mat.c3.y = (bottom + top) / (bottom - top);
        mat.c3.z = (near + far) / (near - far);
        mat
    }

    /// View matrix for a camera at `pos` whose backward axis is `dir`.
    ///
    /// The basis is `right = normalize(up x dir)`, `up' = dir x right`,
    /// stored as the rows of the rotation, which is then applied after a
    /// translation by `-pos`. With `dir` pointing from the target towards
    /// the camera, the target ends up on the view-space `-z` axis.
    pub fn look(pos: Vec3, dir: Vec3, up: Vec3) -> Self {
        let right = up.cross(dir).normalize();
        let real_up = dir.cross(right);

        let basis = Self::from_cols(
            Vec4::new(right.x, real_up.x, dir.x, 0.0),
            Vec4::new(right.y, real_up.y, dir.y, 0.0),
            Vec4::new(right.z, real_up.z, dir.z, 0.0),
            Vec4::W,
        );
        basis * Self::translation(-pos)
    }

    /// View matrix for a camera at `pos` facing `target`.
    pub fn look_at(pos: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::look(pos, (pos - target).normalize(), up)
    }
}

#[inline]
fn sin_cos_degrees(angle: f32) -> (f32, f32) {
    let radians = scalar::deg_to_rad(angle);
    (scalar::sin(radians), scalar::cos(radians))
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn index(&self, col: usize) -> &Vec4 {
        match col {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            3 => &self.c3,
            _ => panic!("Mat4 column out of range: {col}"),
        }
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Vec4 {
        match col {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            3 => &mut self.c3,
            _ => panic!("Mat4 column out of range: {col}"),
        }
    }
}

impl Add for Mat4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        active::mat4_add(&self, &rhs)
    }
}

impl Sub for Mat4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        active::mat4_sub(&self, &rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        active::mat4_scale(&self, rhs)
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl AddAssign for Mat4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
