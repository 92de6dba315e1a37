//! Human-readable text form of every value type.
//!
//! Vectors and quaternions print as `x, y, z, w`; matrices print one column
//! per line. Parsing accepts the same components separated by any mix of
//! whitespace and commas, so `Display` output always reads back:
//!
//! ```
//! use quickmath::{Mat3, Vec3};
//!
//! let v: Vec3 = "1, 2.5 -3".parse().unwrap();
//! assert_eq!(v, Vec3::new(1.0, 2.5, -3.0));
//!
//! let m = Mat3::rotation(30.0);
//! assert_eq!(m.to_string().parse::<Mat3>().unwrap(), m);
//! ```
//!
//! A [`Reader`] pulls several values in a row out of one string.

use crate::{Mat3, Mat4, ParseError, Quat, Vec2, Vec3, Vec4};
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Types that are read as a flat run of `f32` components.
pub trait Components: Sized {
    /// Number of components, in `Display` order.
    const COUNT: usize;

    /// Build from exactly [`Self::COUNT`] components.
    fn from_components(c: &[f32]) -> Self;
}

impl Components for Vec2 {
    const COUNT: usize = 2;
    fn from_components(c: &[f32]) -> Self {
        Self::new(c[0], c[1])
    }
}

impl Components for Vec3 {
    const COUNT: usize = 3;
    fn from_components(c: &[f32]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl Components for Vec4 {
    const COUNT: usize = 4;
    fn from_components(c: &[f32]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl Components for Quat {
    const COUNT: usize = 4;
    fn from_components(c: &[f32]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

// Matrices read column by column.
impl Components for Mat3 {
    const COUNT: usize = 9;
    fn from_components(c: &[f32]) -> Self {
        Self::from_cols(
            Vec3::from_components(&c[0..3]),
            Vec3::from_components(&c[3..6]),
            Vec3::from_components(&c[6..9]),
        )
    }
}

impl Components for Mat4 {
    const COUNT: usize = 16;
    fn from_components(c: &[f32]) -> Self {
        Self::from_cols(
            Vec4::from_components(&c[0..4]),
            Vec4::from_components(&c[4..8]),
            Vec4::from_components(&c[8..12]),
            Vec4::from_components(&c[12..16]),
        )
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Reads consecutive values from one string.
///
/// ```
/// use quickmath::text::Reader;
/// use quickmath::{Quat, Vec3};
///
/// let mut r = Reader::new("1 2 3\n0 0 0 1");
/// let pos: Vec3 = r.read().unwrap();
/// let rot: Quat = r.read().unwrap();
/// r.finish().unwrap();
/// assert_eq!((pos, rot), (Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY));
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    rest: &'a str,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start_matches(is_separator);
        let end = trimmed.find(is_separator).unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        (!token.is_empty()).then_some(token)
    }

    /// Read the next `T`, consuming exactly `T::COUNT` tokens.
    pub fn read<T: Components>(&mut self) -> Result<T, ParseError> {
        let mut components = Vec::with_capacity(T::COUNT);
        for index in 0..T::COUNT {
            let token = self.next_token().ok_or(ParseError::MissingComponent {
                expected: T::COUNT,
                found: index,
            })?;
            components.push(token.parse().map_err(|_| ParseError::InvalidFloat {
                index,
                token: token.to_string(),
            })?);
        }
        Ok(T::from_components(&components))
    }

    /// Whether only separators remain.
    pub fn is_empty(&self) -> bool {
        self.rest.trim_start_matches(is_separator).is_empty()
    }

    /// Fail if anything but separators remains.
    pub fn finish(mut self) -> Result<(), ParseError> {
        match self.next_token() {
            Some(token) => Err(ParseError::TrailingInput { token: token.to_string() }),
            None => Ok(()),
        }
    }
}

/// Parse exactly one `T` from `s`.
fn parse_exact<T: Components>(s: &str) -> Result<T, ParseError> {
    let mut reader = Reader::new(s);
    let value = reader.read()?;
    reader.finish()?;
    Ok(value)
}

fn parse_logged<T: Components>(s: &str, what: &str) -> Result<T, ParseError> {
    let result = parse_exact(s);
    #[cfg(feature = "tracing")]
    if let Err(e) = &result {
        tracing::debug!(input = s, error = %e, "failed to parse {what}");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = what;
    result
}

/// Write `c` as `a, b, c`, honouring the formatter's precision.
fn write_components(f: &mut fmt::Formatter<'_>, c: &[f32]) -> fmt::Result {
    for (i, v) in c.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(p) => write!(f, "{v:.p$}")?,
            None => write!(f, "{v}")?,
        }
    }
    Ok(())
}

macro_rules! impl_text_flat {
    ($($t:ident),*) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_components(f, &self.to_array())
            }
        }

        impl FromStr for $t {
            type Err = ParseError;
            fn from_str(s: &str) -> Result<Self, ParseError> {
                parse_logged(s, stringify!($t))
            }
        }
    )*};
}

impl_text_flat!(Vec2, Vec3, Vec4, Quat);

macro_rules! impl_text_matrix {
    ($($t:ident => [$($c:ident),*]),*) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let cols = [$(self.$c.to_array()),*];
                for (i, col) in cols.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write_components(f, col)?;
                }
                Ok(())
            }
        }

        impl FromStr for $t {
            type Err = ParseError;
            fn from_str(s: &str) -> Result<Self, ParseError> {
                parse_logged(s, stringify!($t))
            }
        }
    )*};
}

impl_text_matrix!(Mat3 => [c0, c1, c2], Mat4 => [c0, c1, c2, c3]);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn display_vectors() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "1, -2.5");
        assert_eq!(Vec3::new(0.1, 2.0, 3.0).to_string(), "0.1, 2, 3");
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).to_string(), "1, 2, 3, 4");
        assert_eq!(Quat::IDENTITY.to_string(), "0, 0, 0, 1");
    }

    #[test]
    fn display_precision_applies_to_every_component() {
        assert_eq!(format!("{:.2}", Vec3::new(1.0, 0.333_333, -2.0)), "1.00, 0.33, -2.00");
    }

    #[test]
    fn display_matrix_one_column_per_line() {
        let m = Mat3::translation(Vec2::new(5.0, 6.0));
        assert_eq!(m.to_string(), "1, 0, 0\n0, 1, 0\n5, 6, 1");
    }

    #[test]
    fn roundtrip_through_display() {
        let v = Vec4::new(0.1, -1e-7, 3.402_823_5e38, 7.0);
        assert_eq!(v.to_string().parse::<Vec4>(), Ok(v));
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 33.0);
        assert_eq!(q.to_string().parse::<Quat>(), Ok(q));
        let m = Mat4::perspective(70.0, 1.3, 0.1, 500.0) * Mat4::rotation_euler(Vec3::splat(12.0));
        assert_eq!(m.to_string().parse::<Mat4>(), Ok(m));
    }

    #[test]
    fn separators_are_whitespace_or_commas() {
        let expected = Vec3::new(1.0, 2.0, 3.0);
        for s in ["1 2 3", "1,2,3", " 1,\t2 ,\n3 ", "1, 2, 3,"] {
            assert_eq!(s.parse::<Vec3>(), Ok(expected), "{s:?}");
        }
    }

    #[test]
    fn matrix_reads_column_by_column() {
        let m: Mat3 = "1 2 3 4 5 6 7 8 9".parse().unwrap();
        assert_eq!(m.c0, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.c2, Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn missing_component() {
        assert_eq!(
            "1 2".parse::<Vec3>(),
            Err(ParseError::MissingComponent { expected: 3, found: 2 })
        );
        assert_eq!(
            "".parse::<Vec2>(),
            Err(ParseError::MissingComponent { expected: 2, found: 0 })
        );
    }

    #[test]
    fn invalid_float() {
        assert_eq!(
            "1 x 3".parse::<Vec3>(),
            Err(ParseError::InvalidFloat { index: 1, token: String::from("x") })
        );
    }

    #[test]
    fn trailing_input() {
        assert_eq!(
            "1 2 3".parse::<Vec2>(),
            Err(ParseError::TrailingInput { token: String::from("3") })
        );
    }

    #[test]
    fn error_messages() {
        let e = ParseError::MissingComponent { expected: 4, found: 1 };
        assert_eq!(e.to_string(), "expected 4 components, found 1");
        let e = ParseError::InvalidFloat { index: 0, token: String::from("abc") };
        assert_eq!(e.to_string(), "component 0 is not a number: \"abc\"");
    }

    #[test]
    fn reader_chains_values() {
        let mut r = Reader::new("1 2, 3 4 5 6 7");
        let a: Vec2 = r.read().unwrap();
        let b: Vec2 = r.read().unwrap();
        assert_eq!((a, b), (Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)));
        assert!(!r.is_empty());
        let c: Vec3 = r.read().unwrap();
        assert_eq!(c, Vec3::new(5.0, 6.0, 7.0));
        assert!(r.is_empty());
        assert_eq!(r.finish(), Ok(()));
    }

    #[test]
    fn reader_reports_trailing_tokens() {
        let mut r = Reader::new("1 2 extra");
        let _: Vec2 = r.read().unwrap();
        assert_eq!(r.finish(), Err(ParseError::TrailingInput { token: String::from("extra") }));
    }

    /// Twenty-component record, wider than any type in this crate.
    #[derive(Debug, PartialEq)]
    struct Wide([f32; 20]);

    impl Components for Wide {
        const COUNT: usize = 20;
        fn from_components(c: &[f32]) -> Self {
            let mut out = [0.0; 20];
            out.copy_from_slice(c);
            Wide(out)
        }
    }

    #[test]
    fn reader_handles_wide_components() {
        let text: String = (0..20).map(|i| format!("{i} ")).collect();
        let mut r = Reader::new(&text);
        let wide: Wide = r.read().unwrap();
        assert_eq!(wide.0[19], 19.0);
        assert_eq!(r.finish(), Ok(()));

        let mut r = Reader::new("1 2 3");
        assert_eq!(
            r.read::<Wide>(),
            Err(ParseError::MissingComponent { expected: 20, found: 3 })
        );
    }
}
