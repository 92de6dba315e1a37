use crate::{scalar, Vec2};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self { Self { x, y, z } }

    #[inline]
    pub const fn splat(v: f32) -> Self { Self::new(v, v, v) }

    // Extent aliases (width/height/depth) and color aliases.
    #[inline] pub fn w(self) -> f32 { self.x }
    #[inline] pub fn h(self) -> f32 { self.y }
    #[inline] pub fn d(self) -> f32 { self.z }
    #[inline] pub fn r(self) -> f32 { self.x }
    #[inline] pub fn g(self) -> f32 { self.y }
    #[inline] pub fn b(self) -> f32 { self.z }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 { self.dot(self) }

    #[inline]
    pub fn length(self) -> f32 { scalar::sqrt(self.dot(self)) }

    /// Unit vector in the same direction; zero-length input yields [`Vec3::ZERO`].
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 {
            self / len
        } else {
            degenerate!(true, "normalizing a zero-length Vec3");
            Self::ZERO
        }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 { (self - other).length() }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            scalar::min(self.x, other.x),
            scalar::min(self.y, other.y),
            scalar::min(self.z, other.z),
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.x, other.x),
            scalar::max(self.y, other.y),
            scalar::max(self.z, other.z),
        )
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: f32) -> crate::Vec4 {
        crate::Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drop z
    #[inline]
    pub fn truncate(self) -> Vec2 { Vec2::new(self.x, self.y) }

    #[inline]
    pub fn to_array(self) -> [f32; 3] { [self.x, self.y, self.z] }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self { v.to_array() }
}

impl From<(Vec2, f32)> for Vec3 {
    fn from((xy, z): (Vec2, f32)) -> Self { Self::new(xy.x, xy.y, z) }
}

impl From<(f32, Vec2)> for Vec3 {
    fn from((x, yz): (f32, Vec2)) -> Self { Self::new(x, yz.x, yz.y) }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { rhs * self }
}

impl Div<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn div(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self / rhs.x, self / rhs.y, self / rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl MulAssign<f32> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}

impl DivAssign<f32> for Vec3 {
    #[inline] fn div_assign(&mut self, rhs: f32) { *self = *self / rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    }

    #[test]
    fn cross_product() {
        let z = Vec3::X.cross(Vec3::Y);
        assert_eq!(z, Vec3::Z);
        // Anti-commutative
        assert_eq!(Vec3::Y.cross(Vec3::X), -z);
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(3.0, 4.0, -1.0);
        let c = a.cross(b);
        assert!(a.dot(c).abs() < 1e-5);
        assert!(b.dot(c).abs() < 1e-5);
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn concatenation() {
        assert_eq!(Vec3::from((Vec2::new(1.0, 2.0), 3.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from((1.0, Vec2::new(2.0, 3.0))), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec2::new(1.0, 2.0).extend(3.0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(6.0 / v, Vec3::new(6.0, 3.0, 2.0));
    }

    #[test]
    fn min_max_distance() {
        let a = Vec3::new(1.0, 5.0, -2.0);
        let b = Vec3::new(3.0, 2.0, -4.0);
        assert_eq!(a.min(b), Vec3::new(1.0, 2.0, -4.0));
        assert_eq!(a.max(b), Vec3::new(3.0, 5.0, -2.0));
        assert_eq!(Vec3::ZERO.distance(Vec3::new(2.0, 3.0, 6.0)), 7.0);
    }

    #[test]
    fn index_and_aliases() {
        let mut c = Vec3::new(0.25, 0.5, 0.75);
        c[2] = 1.0;
        assert_eq!(c.b(), 1.0);
        assert_eq!((c.r(), c.g()), (c[0], c[1]));
        assert_eq!((c.w(), c.h(), c.d()), (c.x, c.y, c.z));
    }
}
