//! Portable one-component-at-a-time implementations. Every packed backend
//! is tested against these.

// Only the tests reach these when the packed backend is active.
#![cfg_attr(quickmath_sse, allow(dead_code))]

use crate::{scalar, Mat4, Quat, Vec4};

#[inline]
pub fn vec4_add(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
}

#[inline]
pub fn vec4_sub(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
}

#[inline]
pub fn vec4_mul(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
}

#[inline]
pub fn vec4_div(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(a.x / b.x, a.y / b.y, a.z / b.z, a.w / b.w)
}

#[inline]
pub fn vec4_scale(v: Vec4, s: f32) -> Vec4 {
    Vec4::new(v.x * s, v.y * s, v.z * s, v.w * s)
}

#[inline]
pub fn vec4_div_scalar(v: Vec4, s: f32) -> Vec4 {
    Vec4::new(v.x / s, v.y / s, v.z / s, v.w / s)
}

/// `s / v`, componentwise.
#[inline]
pub fn vec4_scalar_div(s: f32, v: Vec4) -> Vec4 {
    Vec4::new(s / v.x, s / v.y, s / v.z, s / v.w)
}

#[inline]
pub fn vec4_dot(a: Vec4, b: Vec4) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

#[inline]
pub fn vec4_min(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(
        scalar::min(a.x, b.x),
        scalar::min(a.y, b.y),
        scalar::min(a.z, b.z),
        scalar::min(a.w, b.w),
    )
}

#[inline]
pub fn vec4_max(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(
        scalar::max(a.x, b.x),
        scalar::max(a.y, b.y),
        scalar::max(a.z, b.z),
        scalar::max(a.w, b.w),
    )
}

#[inline]
pub fn mat4_add(a: &Mat4, b: &Mat4) -> Mat4 {
    Mat4::from_cols(
        vec4_add(a.c0, b.c0),
        vec4_add(a.c1, b.c1),
        vec4_add(a.c2, b.c2),
        vec4_add(a.c3, b.c3),
    )
}

#[inline]
pub fn mat4_sub(a: &Mat4, b: &Mat4) -> Mat4 {
    Mat4::from_cols(
        vec4_sub(a.c0, b.c0),
        vec4_sub(a.c1, b.c1),
        vec4_sub(a.c2, b.c2),
        vec4_sub(a.c3, b.c3),
    )
}

/// `m * c`: the columns of `m` scaled by the components of `c`, summed
/// left to right. Shared by matrix-vector and matrix-matrix products.
#[inline]
pub fn mat4_mul_column(c: Vec4, m: &Mat4) -> Vec4 {
    Vec4::new(
        m.c0.x * c.x + m.c1.x * c.y + m.c2.x * c.z + m.c3.x * c.w,
        m.c0.y * c.x + m.c1.y * c.y + m.c2.y * c.z + m.c3.y * c.w,
        m.c0.z * c.x + m.c1.z * c.y + m.c2.z * c.z + m.c3.z * c.w,
        m.c0.w * c.x + m.c1.w * c.y + m.c2.w * c.z + m.c3.w * c.w,
    )
}

#[inline]
pub fn mat4_mul_vec4(m: &Mat4, v: Vec4) -> Vec4 {
    mat4_mul_column(v, m)
}

#[inline]
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    Mat4::from_cols(
        mat4_mul_column(b.c0, a),
        mat4_mul_column(b.c1, a),
        mat4_mul_column(b.c2, a),
        mat4_mul_column(b.c3, a),
    )
}

#[inline]
pub fn mat4_transpose(m: &Mat4) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(m.c0.x, m.c1.x, m.c2.x, m.c3.x),
        Vec4::new(m.c0.y, m.c1.y, m.c2.y, m.c3.y),
        Vec4::new(m.c0.z, m.c1.z, m.c2.z, m.c3.z),
        Vec4::new(m.c0.w, m.c1.w, m.c2.w, m.c3.w),
    )
}

#[inline]
pub fn mat4_scale(m: &Mat4, s: f32) -> Mat4 {
    Mat4::from_cols(
        vec4_scale(m.c0, s),
        vec4_scale(m.c1, s),
        vec4_scale(m.c2, s),
        vec4_scale(m.c3, s),
    )
}

#[inline]
pub fn quat_add(a: Quat, b: Quat) -> Quat {
    Quat::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
}

#[inline]
pub fn quat_sub(a: Quat, b: Quat) -> Quat {
    Quat::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
}

#[inline]
pub fn quat_scale(q: Quat, s: f32) -> Quat {
    Quat::new(q.x * s, q.y * s, q.z * s, q.w * s)
}

#[inline]
pub fn quat_div_scalar(q: Quat, s: f32) -> Quat {
    Quat::new(q.x / s, q.y / s, q.z / s, q.w / s)
}

#[inline]
pub fn quat_scalar_div(s: f32, q: Quat) -> Quat {
    Quat::new(s / q.x, s / q.y, s / q.z, s / q.w)
}

#[inline]
pub fn quat_dot(a: Quat, b: Quat) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

/// Hamilton product `a * b`.
#[inline]
pub fn quat_mul(a: Quat, b: Quat) -> Quat {
    Quat::new(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// Combine per-axis half-angle sines and cosines into the Z-Y-X rotation
/// quaternion.
#[inline]
pub fn quat_from_half_angles(sx: f32, cx: f32, sy: f32, cy: f32, sz: f32, cz: f32) -> Quat {
    Quat::new(
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    )
}
