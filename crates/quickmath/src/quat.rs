use crate::backend::active;
use crate::{scalar, Mat4, Vec2, Vec3, Vec4};
use core::ops::{Add, Div, Index, Mul, Sub};

/// Quaternion `xi + yj + zk + w`.
///
/// Rotations are unit quaternions, but nothing here renormalizes: results
/// are exactly what the arithmetic produces. Aligned to 16 bytes like
/// [`Vec4`] so the packed backend reads it as one lane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

const _: () = assert!(core::mem::size_of::<Quat>() == 16);
const _: () = assert!(core::mem::align_of::<Quat>() == 16);

impl Quat {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        active::quat_dot(self, rhs)
    }

    #[inline]
    pub fn length(self) -> f32 {
        scalar::sqrt(self.dot(self))
    }

    /// Unit quaternion in the same direction; a zero quaternion stays zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 {
            self / len
        } else {
            degenerate!(true, "normalizing a zero-length Quat");
            Self::new(0.0, 0.0, 0.0, 0.0)
        }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Conjugate over squared length. A zero quaternion gives NaN.
    #[inline]
    pub fn inverse(self) -> Self {
        let norm_sq = self.dot(self);
        degenerate!(norm_sq == 0.0, "inverting a zero Quat");
        self.conjugate() * (1.0 / norm_sq)
    }

    /// Spherical interpolation from `self` (at `t = 0`) to `other` (at
    /// `t = 1`).
    ///
    /// Follows the great arc as given: there is no flip towards the shorter
    /// path when the dot product is negative. Identical (or opposite) inputs
    /// have a zero arc sine and produce NaN.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let angle = scalar::acos(self.dot(other));
        let sine = scalar::sin(angle);
        degenerate!(sine == 0.0, "slerp between parallel quaternions");

        (self * scalar::sin((1.0 - t) * angle) + other * scalar::sin(t * angle)) / sine
    }

    /// Rotation of `angle` degrees about `axis`. The axis is normalized
    /// first.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = scalar::deg_to_rad(angle * 0.5);
        let s = scalar::sin(half);
        let c = scalar::cos(half);
        let n = axis.normalize();
        Self::new(n.x * s, n.y * s, n.z * s, c)
    }

    /// Rotation from Euler angles in degrees, applied X then Y then Z.
    /// Equivalent to [`Mat4::rotation_euler`].
    pub fn from_euler(angles: Vec3) -> Self {
        let hx = scalar::deg_to_rad(angles.x * 0.5);
        let hy = scalar::deg_to_rad(angles.y * 0.5);
        let hz = scalar::deg_to_rad(angles.z * 0.5);

        active::quat_from_half_angles(
            scalar::sin(hx),
            scalar::cos(hx),
            scalar::sin(hy),
            scalar::cos(hy),
            scalar::sin(hz),
            scalar::cos(hz),
        )
    }

    /// Rotation matrix of a unit quaternion, embedded in an identity 4x4.
    pub fn to_mat4(self) -> Mat4 {
        let Self { x, y, z, w } = self;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx2, xy2, xz2) = (x * x2, x * y2, x * z2);
        let (yy2, yz2, zz2) = (y * y2, y * z2, z * z2);
        let (sx2, sy2, sz2) = (w * x2, w * y2, w * z2);

        Mat4::from_cols(
            Vec4::new(1.0 - (yy2 + zz2), xy2 + sz2, xz2 - sy2, 0.0),
            Vec4::new(xy2 - sz2, 1.0 - (xx2 + zz2), yz2 + sx2, 0.0),
            Vec4::new(xz2 + sy2, yz2 - sx2, 1.0 - (xx2 + yy2), 0.0),
            Vec4::W,
        )
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f32; 4]> for Quat {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<(Vec3, f32)> for Quat {
    fn from((xyz, w): (Vec3, f32)) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }
}

impl From<(f32, Vec3)> for Quat {
    fn from((x, yzw): (f32, Vec3)) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }
}

impl From<(Vec2, Vec2)> for Quat {
    fn from((xy, zw): (Vec2, Vec2)) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }
}

// Read-only: components are assigned through the fields.
impl Index<usize> for Quat {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Quat index out of range: {i}"),
        }
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        active::quat_add(self, rhs)
    }
}

impl Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        active::quat_sub(self, rhs)
    }
}

/// Hamilton product; `a * b` applies `b` first.
impl Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        active::quat_mul(self, rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        active::quat_scale(self, rhs)
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl Div<f32> for Quat {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        active::quat_div_scalar(self, rhs)
    }
}

impl Div<Quat> for f32 {
    type Output = Quat;
    #[inline]
    fn div(self, rhs: Quat) -> Quat {
        active::quat_scalar_div(self, rhs)
    }
}
