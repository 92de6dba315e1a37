//! quickmath: vector, matrix, and quaternion math for real-time graphics
//!
//! Small `f32` value types for per-frame transform, camera, and animation
//! code. Every operation is a pure value-in/value-out function; degenerate
//! inputs (singular matrices, zero-length vectors) produce `inf`/`NaN`
//! components or zero, never an error.
//!
//! # Design principles
//! - Column-major matrices; `m[i]` is column `i`
//! - Angles are in degrees at the API surface
//! - `Vec4`, `Quat`, and `Mat4` columns are 16-byte aligned and run on SSE2
//!   when the `simd` feature is on (see [`backend()`]); the scalar path is
//!   the reference every packed op is tested against
//! - `#[repr(C)]` everywhere for GPU interop
//! - Free-function families in [`vector`], [`matrix`], and [`quaternion`]
//!   mirror the methods
//!
//! ```
//! use quickmath::{Mat4, Quat, Vec3, Vec4};
//!
//! let model = Mat4::translation(Vec3::new(0.0, 1.0, 0.0))
//!     * Quat::from_axis_angle(Vec3::Y, 90.0).to_mat4();
//! let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! let clip = proj * view * model * Vec4::new(1.0, 0.0, 0.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

// Reports degenerate numeric inputs as trace events without changing the
// result. Compiles to nothing unless the `tracing` feature is on.
#[cfg(feature = "tracing")]
macro_rules! degenerate {
    ($cond:expr, $msg:literal) => {
        if $cond {
            tracing::trace!($msg);
        }
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! degenerate {
    ($cond:expr, $msg:literal) => {};
}

pub mod scalar;
mod backend;
mod vec2;
mod vec3;
mod vec4;
mod mat3;
mod mat4;
mod quat;

pub mod vector;
pub mod matrix;
pub mod quaternion;

#[cfg(feature = "text")]
mod error;
#[cfg(feature = "text")]
pub mod text;

pub use backend::{backend, Backend};
pub use scalar::{deg_to_rad, rad_to_deg};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;

#[cfg(feature = "text")]
pub use error::ParseError;

#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: all fields are f32 (or f32 vectors), #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2);
    impl_pod!(Vec3);
    impl_pod!(Vec4);
    impl_pod!(Mat3);
    impl_pod!(Mat4);
    impl_pod!(Quat);
}
