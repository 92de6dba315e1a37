use crate::backend::active;
use crate::{scalar, Vec2, Vec3};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Four-component vector.
///
/// Aligned to 16 bytes so the packed backend can load the four fields as a
/// single lane without copying.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C, align(16))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

const _: () = assert!(core::mem::size_of::<Vec4>() == 16);
const _: () = assert!(core::mem::align_of::<Vec4>() == 16);

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }

    #[inline]
    pub const fn splat(v: f32) -> Self { Self::new(v, v, v, v) }

    #[inline] pub fn r(self) -> f32 { self.x }
    #[inline] pub fn g(self) -> f32 { self.y }
    #[inline] pub fn b(self) -> f32 { self.z }
    #[inline] pub fn a(self) -> f32 { self.w }

    /// Dot product. The packed backend reduces with a pairwise horizontal
    /// add, `(xx + yy) + (zz + ww)`, so results may differ from the scalar
    /// left-to-right sum in the last bit.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 { active::vec4_dot(self, rhs) }

    #[inline]
    pub fn length_squared(self) -> f32 { self.dot(self) }

    #[inline]
    pub fn length(self) -> f32 { scalar::sqrt(self.dot(self)) }

    /// Unit vector in the same direction; zero-length input yields
    /// [`Vec4::ZERO`] on every backend.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 {
            self / len
        } else {
            degenerate!(true, "normalizing a zero-length Vec4");
            Self::ZERO
        }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 { (self - other).length() }

    #[inline]
    pub fn min(self, other: Self) -> Self { active::vec4_min(self, other) }

    #[inline]
    pub fn max(self, other: Self) -> Self { active::vec4_max(self, other) }

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3 { Vec3::new(self.x, self.y, self.z) }

    #[inline]
    pub fn to_array(self) -> [f32; 4] { [self.x, self.y, self.z, self.w] }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self { v.to_array() }
}

impl From<(Vec3, f32)> for Vec4 {
    fn from((xyz, w): (Vec3, f32)) -> Self { Self::new(xyz.x, xyz.y, xyz.z, w) }
}

impl From<(f32, Vec3)> for Vec4 {
    fn from((x, yzw): (f32, Vec3)) -> Self { Self::new(x, yzw.x, yzw.y, yzw.z) }
}

impl From<(Vec2, Vec2)> for Vec4 {
    fn from((xy, zw): (Vec2, Vec2)) -> Self { Self::new(xy.x, xy.y, zw.x, zw.y) }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { active::vec4_add(self, rhs) }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { active::vec4_sub(self, rhs) }
}

impl Mul for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { active::vec4_mul(self, rhs) }
}

impl Div for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self { active::vec4_div(self, rhs) }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { active::vec4_scale(self, rhs) }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { active::vec4_div_scalar(self, rhs) }
}

// Scalar * Vec4 (commutative)
impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Vec4) -> Vec4 { rhs * self }
}

impl Div<Vec4> for f32 {
    type Output = Vec4;
    #[inline] fn div(self, rhs: Vec4) -> Vec4 { active::vec4_scalar_div(self, rhs) }
}

impl AddAssign for Vec4 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl SubAssign for Vec4 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl MulAssign<f32> for Vec4 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}

impl DivAssign<f32> for Vec4 {
    #[inline] fn div_assign(&mut self, rhs: f32) { *self = *self / rhs; }
}
