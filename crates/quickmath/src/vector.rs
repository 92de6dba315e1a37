//! Free functions over the vector types.
//!
//! Each one forwards to the method of the same name, so `vector::dot(a, b)`
//! and `a.dot(b)` are interchangeable.

use crate::{Vec2, Vec3, Vec4};

/// Operations shared by [`Vec2`], [`Vec3`], and [`Vec4`].
pub trait Vector: Copy {
    fn dot(self, rhs: Self) -> f32;
    fn length(self) -> f32;
    fn normalize(self) -> Self;
    fn distance(self, other: Self) -> f32;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

macro_rules! impl_vector {
    ($($t:ty),*) => {$(
        impl Vector for $t {
            #[inline] fn dot(self, rhs: Self) -> f32 { <$t>::dot(self, rhs) }
            #[inline] fn length(self) -> f32 { <$t>::length(self) }
            #[inline] fn normalize(self) -> Self { <$t>::normalize(self) }
            #[inline] fn distance(self, other: Self) -> f32 { <$t>::distance(self, other) }
            #[inline] fn min(self, other: Self) -> Self { <$t>::min(self, other) }
            #[inline] fn max(self, other: Self) -> Self { <$t>::max(self, other) }
        }
    )*};
}

impl_vector!(Vec2, Vec3, Vec4);

#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> f32 {
    a.dot(b)
}

/// Right-handed cross product; only defined in three dimensions.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

#[inline]
pub fn length<V: Vector>(v: V) -> f32 {
    v.length()
}

/// Zero-length input returns the zero vector.
#[inline]
pub fn normalize<V: Vector>(v: V) -> V {
    v.normalize()
}

#[inline]
pub fn distance<V: Vector>(a: V, b: V) -> f32 {
    a.distance(b)
}

#[inline]
pub fn min<V: Vector>(a: V, b: V) -> V {
    a.min(b)
}

#[inline]
pub fn max<V: Vector>(a: V, b: V) -> V {
    a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_to_methods() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, -6.0);
        assert_eq!(dot(a, b), a.dot(b));
        assert_eq!(cross(a, b), a.cross(b));
        assert_eq!(length(a), a.length());
        assert_eq!(normalize(a), a.normalize());
        assert_eq!(distance(a, b), a.distance(b));
        assert_eq!(min(a, b), Vec3::new(1.0, -2.0, -6.0));
        assert_eq!(max(a, b), Vec3::new(4.0, 5.0, 3.0));
    }

    #[test]
    fn generic_over_dimension() {
        assert_eq!(length(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(length(Vec4::new(2.0, 2.0, 2.0, 2.0)), 4.0);
        assert_eq!(distance(Vec2::ZERO, Vec2::new(0.0, -2.0)), 2.0);
        assert_eq!(normalize(Vec4::ZERO), Vec4::ZERO);
    }
}
