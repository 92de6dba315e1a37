//! Free functions over the matrix types.
//!
//! `translate` and `scale` pick the matrix size from the argument: a
//! [`Vec2`] builds a [`Mat3`], a [`Vec3`] builds a [`Mat4`].

use crate::{Mat3, Mat4, Vec2, Vec3};

/// Operations shared by [`Mat3`] and [`Mat4`].
pub trait Matrix: Copy {
    const IDENTITY: Self;
    fn transpose(&self) -> Self;
    fn inverse(&self) -> Self;
}

impl Matrix for Mat3 {
    const IDENTITY: Self = Mat3::IDENTITY;
    #[inline]
    fn transpose(&self) -> Self {
        Mat3::transpose(self)
    }
    #[inline]
    fn inverse(&self) -> Self {
        Mat3::inverse(self)
    }
}

impl Matrix for Mat4 {
    const IDENTITY: Self = Mat4::IDENTITY;
    #[inline]
    fn transpose(&self) -> Self {
        Mat4::transpose(self)
    }
    #[inline]
    fn inverse(&self) -> Self {
        Mat4::inverse(self)
    }
}

/// Vectors that describe a homogeneous translation or scale.
pub trait AffineVector: Copy {
    type Matrix: Matrix;
    fn translation(self) -> Self::Matrix;
    fn scaling(self) -> Self::Matrix;
}

impl AffineVector for Vec2 {
    type Matrix = Mat3;
    #[inline]
    fn translation(self) -> Mat3 {
        Mat3::translation(self)
    }
    #[inline]
    fn scaling(self) -> Mat3 {
        Mat3::scale(self)
    }
}

impl AffineVector for Vec3 {
    type Matrix = Mat4;
    #[inline]
    fn translation(self) -> Mat4 {
        Mat4::translation(self)
    }
    #[inline]
    fn scaling(self) -> Mat4 {
        Mat4::scale(self)
    }
}

#[inline]
pub fn identity<M: Matrix>() -> M {
    M::IDENTITY
}

#[inline]
pub fn transpose<M: Matrix>(m: &M) -> M {
    m.transpose()
}

/// Unchecked: a singular matrix yields non-finite entries.
#[inline]
pub fn inverse<M: Matrix>(m: &M) -> M {
    m.inverse()
}

#[inline]
pub fn translate<V: AffineVector>(t: V) -> V::Matrix {
    t.translation()
}

#[inline]
pub fn scale<V: AffineVector>(s: V) -> V::Matrix {
    s.scaling()
}

/// 2D rotation by `angle` degrees.
#[inline]
pub fn rotate(angle: f32) -> Mat3 {
    Mat3::rotation(angle)
}

#[inline]
pub fn rotate_axis(axis: Vec3, angle: f32) -> Mat4 {
    Mat4::rotation_axis(axis, angle)
}

#[inline]
pub fn rotate_euler(angles: Vec3) -> Mat4 {
    Mat4::rotation_euler(angles)
}

#[inline]
pub fn top_left(m: &Mat4) -> Mat3 {
    m.top_left()
}

#[inline]
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective(fov, aspect, near, far)
}

#[inline]
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic(left, right, bottom, top, near, far)
}

#[inline]
pub fn look(pos: Vec3, dir: Vec3, up: Vec3) -> Mat4 {
    Mat4::look(pos, dir, up)
}

#[inline]
pub fn lookat(pos: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at(pos, target, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_and_scale_pick_size_from_argument() {
        let t3: Mat3 = translate(Vec2::new(1.0, 2.0));
        let t4: Mat4 = translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t3, Mat3::translation(Vec2::new(1.0, 2.0)));
        assert_eq!(t4, Mat4::translation(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scale(Vec2::splat(2.0)), Mat3::scale(Vec2::splat(2.0)));
        assert_eq!(scale(Vec3::splat(2.0)), Mat4::scale(Vec3::splat(2.0)));
    }

    #[test]
    fn generic_identity_transpose_inverse() {
        assert_eq!(identity::<Mat3>(), Mat3::IDENTITY);
        assert_eq!(identity::<Mat4>(), Mat4::IDENTITY);
        let m = rotate_euler(Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(transpose(&m), m.transpose());
        assert_eq!(inverse(&m), m.inverse());
        let r = rotate(30.0);
        assert_eq!(inverse(&r), r.inverse());
    }

    #[test]
    fn builders_forward() {
        let axis = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(rotate_axis(axis, 45.0), Mat4::rotation_axis(axis, 45.0));
        assert_eq!(top_left(&Mat4::IDENTITY), Mat3::IDENTITY);
        assert_eq!(perspective(60.0, 1.5, 0.1, 10.0), Mat4::perspective(60.0, 1.5, 0.1, 10.0));
        assert_eq!(
            orthographic(0.0, 4.0, 0.0, 3.0, -1.0, 1.0),
            Mat4::orthographic(0.0, 4.0, 0.0, 3.0, -1.0, 1.0)
        );
        let (pos, target) = (Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(lookat(pos, target, Vec3::Y), Mat4::look_at(pos, target, Vec3::Y));
        assert_eq!(
            look(pos, Vec3::Z, Vec3::Y),
            Mat4::look(pos, Vec3::Z, Vec3::Y)
        );
    }
}
