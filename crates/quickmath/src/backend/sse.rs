//! SSE2 implementations over one `__m128` per `Vec4`, `Quat`, or `Mat4`
//! column.
//!
//! Only SSE2 is assumed. The SSE3 horizontal add and add-subtract are
//! spelled out with shuffles and sign-bit flips; both are exact rewrites, so
//! results match what `haddps`/`addsubps` would produce.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::{Mat4, Quat, Vec4};

/// Immediate for `_mm_shuffle_ps`, lanes named high to low. `_MM_SHUFFLE`
/// itself is not usable in const position on stable.
const fn shuffle(z: u32, y: u32, x: u32, w: u32) -> i32 {
    ((z << 6) | (y << 4) | (x << 2) | w) as i32
}

// SAFETY (applies to every block below): this module is only compiled when
// `sse2` is a static target feature, and `Vec4`/`Quat` are `#[repr(C,
// align(16))]` with four `f32` fields, so aligned 128-bit loads and stores
// through them are valid.

#[inline(always)]
fn load(v: &Vec4) -> __m128 {
    unsafe { _mm_load_ps((v as *const Vec4).cast::<f32>()) }
}

#[inline(always)]
fn store(r: __m128) -> Vec4 {
    let mut out = Vec4::ZERO;
    unsafe { _mm_store_ps((&mut out as *mut Vec4).cast::<f32>(), r) };
    out
}

#[inline(always)]
fn load_quat(q: &Quat) -> __m128 {
    unsafe { _mm_load_ps((q as *const Quat).cast::<f32>()) }
}

#[inline(always)]
fn store_quat(r: __m128) -> Quat {
    let mut out = Quat::IDENTITY;
    unsafe { _mm_store_ps((&mut out as *mut Quat).cast::<f32>(), r) };
    out
}

/// `(a0+a1) + (a2+a3)` in lane 0, the same pairing as two `haddps`.
#[inline(always)]
fn horizontal_sum(r: __m128) -> f32 {
    unsafe {
        let swapped = _mm_shuffle_ps::<{ shuffle(2, 3, 0, 1) }>(r, r);
        let pairs = _mm_add_ps(r, swapped);
        let high = _mm_movehl_ps(pairs, pairs);
        _mm_cvtss_f32(_mm_add_ss(pairs, high))
    }
}

#[inline]
pub fn vec4_add(a: Vec4, b: Vec4) -> Vec4 {
    store(unsafe { _mm_add_ps(load(&a), load(&b)) })
}

#[inline]
pub fn vec4_sub(a: Vec4, b: Vec4) -> Vec4 {
    store(unsafe { _mm_sub_ps(load(&a), load(&b)) })
}

#[inline]
pub fn vec4_mul(a: Vec4, b: Vec4) -> Vec4 {
    store(unsafe { _mm_mul_ps(load(&a), load(&b)) })
}

#[inline]
pub fn vec4_div(a: Vec4, b: Vec4) -> Vec4 {
    store(unsafe { _mm_div_ps(load(&a), load(&b)) })
}

#[inline]
pub fn vec4_scale(v: Vec4, s: f32) -> Vec4 {
    store(unsafe { _mm_mul_ps(load(&v), _mm_set1_ps(s)) })
}

#[inline]
pub fn vec4_div_scalar(v: Vec4, s: f32) -> Vec4 {
    store(unsafe { _mm_div_ps(load(&v), _mm_set1_ps(s)) })
}

#[inline]
pub fn vec4_scalar_div(s: f32, v: Vec4) -> Vec4 {
    store(unsafe { _mm_div_ps(_mm_set1_ps(s), load(&v)) })
}

#[inline]
pub fn vec4_dot(a: Vec4, b: Vec4) -> f32 {
    horizontal_sum(unsafe { _mm_mul_ps(load(&a), load(&b)) })
}

#[inline]
pub fn vec4_min(a: Vec4, b: Vec4) -> Vec4 {
    store(unsafe { _mm_min_ps(load(&a), load(&b)) })
}

#[inline]
pub fn vec4_max(a: Vec4, b: Vec4) -> Vec4 {
    store(unsafe { _mm_max_ps(load(&a), load(&b)) })
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

/// Broadcast each component of `c` and accumulate it against the matching
/// column of `m`, in column order.
#[inline(always)]
fn mul_column(c: __m128, m: &Mat4) -> __m128 {
    unsafe {
        let mut r = _mm_mul_ps(_mm_shuffle_ps::<{ shuffle(0, 0, 0, 0) }>(c, c), load(&m.c0));
        r = _mm_add_ps(r, _mm_mul_ps(_mm_shuffle_ps::<{ shuffle(1, 1, 1, 1) }>(c, c), load(&m.c1)));
        r = _mm_add_ps(r, _mm_mul_ps(_mm_shuffle_ps::<{ shuffle(2, 2, 2, 2) }>(c, c), load(&m.c2)));
        _mm_add_ps(r, _mm_mul_ps(_mm_shuffle_ps::<{ shuffle(3, 3, 3, 3) }>(c, c), load(&m.c3)))
    }
}

#[inline]
pub fn mat4_mul_column(c: Vec4, m: &Mat4) -> Vec4 {
    store(mul_column(load(&c), m))
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
    unsafe {
        let (c0, c1, c2, c3) = (load(&m.c0), load(&m.c1), load(&m.c2), load(&m.c3));
        let lo01 = _mm_unpacklo_ps(c0, c1); // c0.x c1.x c0.y c1.y
        let lo23 = _mm_unpacklo_ps(c2, c3); // c2.x c3.x c2.y c3.y
        let hi01 = _mm_unpackhi_ps(c0, c1); // c0.z c1.z c0.w c1.w
        let hi23 = _mm_unpackhi_ps(c2, c3); // c2.z c3.z c2.w c3.w
        Mat4::from_cols(
            store(_mm_movelh_ps(lo01, lo23)),
            store(_mm_movehl_ps(lo23, lo01)),
            store(_mm_movelh_ps(hi01, hi23)),
            store(_mm_movehl_ps(hi23, hi01)),
        )
    }
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
    store_quat(unsafe { _mm_add_ps(load_quat(&a), load_quat(&b)) })
}

#[inline]
pub fn quat_sub(a: Quat, b: Quat) -> Quat {
    store_quat(unsafe { _mm_sub_ps(load_quat(&a), load_quat(&b)) })
}

#[inline]
pub fn quat_scale(q: Quat, s: f32) -> Quat {
    store_quat(unsafe { _mm_mul_ps(load_quat(&q), _mm_set1_ps(s)) })
}

#[inline]
pub fn quat_div_scalar(q: Quat, s: f32) -> Quat {
    store_quat(unsafe { _mm_div_ps(load_quat(&q), _mm_set1_ps(s)) })
}

#[inline]
pub fn quat_scalar_div(s: f32, q: Quat) -> Quat {
    store_quat(unsafe { _mm_div_ps(_mm_set1_ps(s), load_quat(&q)) })
}

#[inline]
pub fn quat_dot(a: Quat, b: Quat) -> f32 {
    horizontal_sum(unsafe { _mm_mul_ps(load_quat(&a), load_quat(&b)) })
}

/// Hamilton product `a * b`: `a.w * b` plus three sign-flipped,
/// lane-permuted products of `b` against `a.x`, `a.y`, `a.z`.
#[inline]
pub fn quat_mul(a: Quat, b: Quat) -> Quat {
    unsafe {
        let qa = load_quat(&a);
        let qb = load_quat(&b);

        let mut r = _mm_mul_ps(_mm_shuffle_ps::<{ shuffle(3, 3, 3, 3) }>(qa, qa), qb);

        // ( x2  y2  z2  w2) reversed -> ( w2  z2  y2  x2), signs (+ - + -)
        let ax = _mm_xor_ps(
            _mm_shuffle_ps::<{ shuffle(0, 0, 0, 0) }>(qa, qa),
            _mm_setr_ps(0.0, -0.0, 0.0, -0.0),
        );
        let bx = _mm_shuffle_ps::<{ shuffle(0, 1, 2, 3) }>(qb, qb);
        r = _mm_add_ps(r, _mm_mul_ps(ax, bx));

        // ( z2  w2  x2  y2), signs (+ + - -)
        let ay = _mm_xor_ps(
            _mm_shuffle_ps::<{ shuffle(1, 1, 1, 1) }>(qa, qa),
            _mm_setr_ps(0.0, 0.0, -0.0, -0.0),
        );
        let by = _mm_shuffle_ps::<{ shuffle(1, 0, 3, 2) }>(qb, qb);
        r = _mm_add_ps(r, _mm_mul_ps(ay, by));

        // ( y2  x2  w2  z2), signs (- + + -)
        let az = _mm_xor_ps(
            _mm_shuffle_ps::<{ shuffle(2, 2, 2, 2) }>(qa, qa),
            _mm_setr_ps(-0.0, 0.0, 0.0, -0.0),
        );
        let bz = _mm_shuffle_ps::<{ shuffle(2, 3, 0, 1) }>(qb, qb);
        r = _mm_add_ps(r, _mm_mul_ps(az, bz));

        store_quat(r)
    }
}

#[inline]
pub fn quat_from_half_angles(sx: f32, cx: f32, sy: f32, cy: f32, sz: f32, cz: f32) -> Quat {
    unsafe {
        let px = _mm_setr_ps(sx, cx, cx, cx);
        let py = _mm_setr_ps(cy, sy, cy, cy);
        let pz = _mm_setr_ps(cz, cz, sz, cz);
        let lead = _mm_mul_ps(_mm_mul_ps(px, py), pz);

        let px = _mm_shuffle_ps::<{ shuffle(0, 0, 0, 1) }>(px, px);
        let py = _mm_shuffle_ps::<{ shuffle(1, 1, 0, 1) }>(py, py);
        let pz = _mm_shuffle_ps::<{ shuffle(2, 0, 2, 2) }>(pz, pz);
        let tail = _mm_mul_ps(_mm_mul_ps(px, py), pz);

        // addsub: subtract in lanes 0 and 2, add in lanes 1 and 3
        let tail = _mm_xor_ps(tail, _mm_setr_ps(-0.0, 0.0, -0.0, 0.0));
        store_quat(_mm_add_ps(lead, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_immediates() {
        assert_eq!(shuffle(0, 0, 0, 0), 0);
        assert_eq!(shuffle(3, 3, 3, 3), 0xff);
        assert_eq!(shuffle(0, 1, 2, 3), 0b00_01_10_11);
        assert_eq!(shuffle(2, 3, 0, 1), 0b10_11_00_01);
    }

    #[test]
    fn shuffle_reverses_lanes() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let r = unsafe {
            let a = load(&v);
            store(_mm_shuffle_ps::<{ shuffle(0, 1, 2, 3) }>(a, a))
        };
        assert_eq!(r, Vec4::new(4.0, 3.0, 2.0, 1.0));
    }
}
