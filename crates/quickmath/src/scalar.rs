//! Shared `f32` helpers: angle conversion, branchy min/max/abs, and the
//! transcendental functions every other module routes through.

/// Degrees per radian.
pub const RAD_TO_DEG: f32 = 57.295_779_513_1;
/// Radians per degree.
pub const DEG_TO_RAD: f32 = 0.017_453_292_51;

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * RAD_TO_DEG
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * DEG_TO_RAD
}

/// `a` if `a < b`, otherwise `b` (so a NaN in either slot yields `b`).
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

/// `a` if `a > b`, otherwise `b`.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

#[inline]
pub fn abs(x: f32) -> f32 {
    if x > 0.0 { x } else { -x }
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quickmath needs either the `std` or the `libm` feature for sqrt/sin/cos/tan/acos");

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sin(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn acos(x: f32) -> f32 {
        x.acos()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sin(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn cos(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn tan(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn acos(x: f32) -> f32 {
        libm::acosf(x)
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
pub(crate) use float_ops::{acos, cos, sin, sqrt, tan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_conversion() {
        assert!((deg_to_rad(180.0) - core::f32::consts::PI).abs() < 1e-6);
        assert!((rad_to_deg(core::f32::consts::FRAC_PI_2) - 90.0).abs() < 1e-4);
        assert_eq!(deg_to_rad(0.0), 0.0);
    }

    #[test]
    fn branchy_min_max() {
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
        // NaN in the first slot falls through to the second
        assert_eq!(min(f32::NAN, 3.0), 3.0);
        assert_eq!(max(f32::NAN, 3.0), 3.0);
    }

    #[test]
    fn abs_values() {
        assert_eq!(abs(-3.0), 3.0);
        assert_eq!(abs(3.0), 3.0);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn transcendentals() {
        assert_eq!(sqrt(4.0), 2.0);
        assert!((sin(core::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!((cos(0.0) - 1.0).abs() < 1e-6);
        assert!((tan(core::f32::consts::FRAC_PI_4) - 1.0).abs() < 1e-6);
        assert!(acos(1.0).abs() < 1e-6);
    }
}
