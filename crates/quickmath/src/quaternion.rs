//! Free functions over [`Quat`].

use crate::{Mat4, Quat, Vec3};

#[inline]
pub fn identity() -> Quat {
    Quat::IDENTITY
}

#[inline]
pub fn dot(a: Quat, b: Quat) -> f32 {
    a.dot(b)
}

#[inline]
pub fn length(q: Quat) -> f32 {
    q.length()
}

#[inline]
pub fn normalize(q: Quat) -> Quat {
    q.normalize()
}

#[inline]
pub fn conjugate(q: Quat) -> Quat {
    q.conjugate()
}

#[inline]
pub fn inverse(q: Quat) -> Quat {
    q.inverse()
}

/// See [`Quat::slerp`]: no shortest-path flip, NaN for parallel inputs.
#[inline]
pub fn slerp(a: Quat, b: Quat, t: f32) -> Quat {
    a.slerp(b, t)
}

#[inline]
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    Quat::from_axis_angle(axis, angle)
}

#[inline]
pub fn from_euler(angles: Vec3) -> Quat {
    Quat::from_euler(angles)
}

#[inline]
pub fn to_mat4(q: Quat) -> Mat4 {
    q.to_mat4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_to_methods() {
        let q = Quat::new(0.5, -1.0, 2.0, 3.0);
        let p = Quat::new(1.0, 0.0, -1.0, 0.5);
        assert_eq!(identity(), Quat::IDENTITY);
        assert_eq!(dot(q, p), q.dot(p));
        assert_eq!(length(q), q.length());
        assert_eq!(normalize(q), q.normalize());
        assert_eq!(conjugate(q), q.conjugate());
        assert_eq!(inverse(q), q.inverse());
        let (a, b) = (identity(), from_axis_angle(Vec3::X, 60.0));
        assert_eq!(slerp(a, b, 0.25), a.slerp(b, 0.25));
        let e = Vec3::new(5.0, 10.0, 15.0);
        assert_eq!(from_euler(e), Quat::from_euler(e));
        assert_eq!(to_mat4(q), q.to_mat4());
    }
}
