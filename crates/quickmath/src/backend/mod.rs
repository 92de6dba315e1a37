//! 4-wide execution strategies for `Vec4`, `Mat4`, and `Quat`.
//!
//! [`scalar`] is always built. The packed SSE2 path replaces it when the
//! `simd` feature is enabled on an x86/x86_64 target with `sse2` (decided
//! in `build.rs`). Both expose the same free functions, and the types call
//! whichever one is `active`.

pub(crate) mod scalar;

#[cfg(quickmath_sse)]
pub(crate) mod sse;

#[cfg(quickmath_sse)]
pub(crate) use sse as active;

#[cfg(not(quickmath_sse))]
pub(crate) use scalar as active;

/// The strategy compiled in for 4-wide operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// One component at a time.
    Scalar,
    /// One `__m128` lane per vector, quaternion, or matrix column.
    Sse2,
}

impl Backend {
    #[inline]
    pub const fn active() -> Self {
        #[cfg(quickmath_sse)]
        {
            Self::Sse2
        }
        #[cfg(not(quickmath_sse))]
        {
            Self::Scalar
        }
    }

    /// Whether results can differ from [`Backend::Scalar`] in the last bit
    /// (only the pairwise dot-product reduction does).
    #[inline]
    pub const fn is_packed(self) -> bool {
        matches!(self, Self::Sse2)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The backend this build of the crate uses.
#[inline]
pub const fn backend() -> Backend {
    Backend::active()
}

#[cfg(all(test, quickmath_sse))]
mod tests {
    use super::{scalar, sse};
    use crate::{Mat4, Quat, Vec4};
    use proptest::prelude::*;

    fn component() -> impl Strategy<Value = f32> {
        -100.0f32..100.0
    }

    fn vec4() -> impl Strategy<Value = Vec4> {
        (component(), component(), component(), component())
            .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
    }

    fn nonzero_vec4() -> impl Strategy<Value = Vec4> {
        vec4().prop_filter("no zero components", |v| v.to_array().iter().all(|c| *c != 0.0))
    }

    fn quat() -> impl Strategy<Value = Quat> {
        (component(), component(), component(), component())
            .prop_map(|(x, y, z, w)| Quat::new(x, y, z, w))
    }

    fn mat4() -> impl Strategy<Value = Mat4> {
        (vec4(), vec4(), vec4(), vec4()).prop_map(|(a, b, c, d)| Mat4::from_cols(a, b, c, d))
    }

    // Three roundings per side on partial sums of at most 4e4.
    const DOT_TOLERANCE: f32 = 1.6e5 * f32::EPSILON;

    proptest! {
        #[test]
        fn componentwise_ops_are_exact(a in vec4(), b in nonzero_vec4(), s in component()) {
            prop_assert_eq!(sse::vec4_add(a, b), scalar::vec4_add(a, b));
            prop_assert_eq!(sse::vec4_sub(a, b), scalar::vec4_sub(a, b));
            prop_assert_eq!(sse::vec4_mul(a, b), scalar::vec4_mul(a, b));
            prop_assert_eq!(sse::vec4_div(a, b), scalar::vec4_div(a, b));
            prop_assert_eq!(sse::vec4_scale(a, s), scalar::vec4_scale(a, s));
            prop_assert_eq!(sse::vec4_scalar_div(s, b), scalar::vec4_scalar_div(s, b));
            prop_assert_eq!(sse::vec4_min(a, b), scalar::vec4_min(a, b));
            prop_assert_eq!(sse::vec4_max(a, b), scalar::vec4_max(a, b));
        }

        #[test]
        fn divide_by_scalar_is_exact(a in vec4(), s in component().prop_filter("nonzero", |s| *s != 0.0)) {
            prop_assert_eq!(sse::vec4_div_scalar(a, s), scalar::vec4_div_scalar(a, s));
            prop_assert_eq!(
                sse::quat_div_scalar(Quat::new(a.x, a.y, a.z, a.w), s),
                scalar::quat_div_scalar(Quat::new(a.x, a.y, a.z, a.w), s)
            );
        }

        #[test]
        fn dot_within_rounding(a in vec4(), b in vec4()) {
            let packed = sse::vec4_dot(a, b);
            let reference = scalar::vec4_dot(a, b);
            // Pairwise vs left-to-right summation of products bounded by 1e4 each.
            prop_assert!((packed - reference).abs() <= DOT_TOLERANCE,
                "{} vs {}", packed, reference);
        }

        #[test]
        fn matrix_ops_are_exact(a in mat4(), b in mat4(), v in vec4(), s in component()) {
            prop_assert_eq!(sse::mat4_mul_vec4(&a, v), scalar::mat4_mul_vec4(&a, v));
            prop_assert_eq!(sse::mat4_mul(&a, &b), scalar::mat4_mul(&a, &b));
            prop_assert_eq!(sse::mat4_transpose(&a), scalar::mat4_transpose(&a));
            prop_assert_eq!(sse::mat4_add(&a, &b), scalar::mat4_add(&a, &b));
            prop_assert_eq!(sse::mat4_sub(&a, &b), scalar::mat4_sub(&a, &b));
            prop_assert_eq!(sse::mat4_scale(&a, s), scalar::mat4_scale(&a, s));
        }

        #[test]
        fn quaternion_ops_are_exact(a in quat(), b in quat(), s in component()) {
            prop_assert_eq!(sse::quat_mul(a, b), scalar::quat_mul(a, b));
            prop_assert_eq!(sse::quat_add(a, b), scalar::quat_add(a, b));
            prop_assert_eq!(sse::quat_sub(a, b), scalar::quat_sub(a, b));
            prop_assert_eq!(sse::quat_scale(a, s), scalar::quat_scale(a, s));
            prop_assert!((sse::quat_dot(a, b) - scalar::quat_dot(a, b)).abs() <= DOT_TOLERANCE);
        }

        #[test]
        fn half_angle_combine_is_exact(ax in -3.2f32..3.2, ay in -3.2f32..3.2, az in -3.2f32..3.2) {
            let (sx, cx) = (ax.sin(), ax.cos());
            let (sy, cy) = (ay.sin(), ay.cos());
            let (sz, cz) = (az.sin(), az.cos());
            prop_assert_eq!(
                sse::quat_from_half_angles(sx, cx, sy, cy, sz, cz),
                scalar::quat_from_half_angles(sx, cx, sy, cy, sz, cz)
            );
        }
    }

    #[test]
    fn scalar_divided_by_quat() {
        let q = Quat::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(sse::quat_scalar_div(8.0, q), scalar::quat_scalar_div(8.0, q));
    }

    #[test]
    fn min_max_propagate_second_operand_on_nan() {
        let a = Vec4::new(f32::NAN, 1.0, 2.0, 3.0);
        let b = Vec4::new(5.0, 0.0, 2.0, 4.0);
        assert_eq!(sse::vec4_min(a, b), scalar::vec4_min(a, b));
        assert_eq!(sse::vec4_max(a, b), scalar::vec4_max(a, b));
    }
}
