//! Numeric Values
//!
//! Coordinates hold any value implementing [`Scalar`]: a copyable number with
//! the usual ring operations (from `num_traits::Num`) plus the handful of
//! elementwise helpers the algebra needs. Integer implementations follow
//! floor semantics for division and modulo so that `a == b * a.floor_div(b) +
//! a.modulo(b)` holds for every sign combination.

use num_traits::{Num, NumCast, ToPrimitive};
use std::fmt::Debug;
use std::ops::Neg;

/// A numeric value that can be stored in a coordinate
pub trait Scalar: Num + NumCast + Neg<Output = Self> + Copy + PartialOrd + Debug + 'static {
    /// Absolute value
    fn abs(self) -> Self;

    /// Round towards negative infinity
    fn floor(self) -> Self;

    /// Round towards positive infinity
    fn ceil(self) -> Self;

    /// Round towards zero
    fn trunc(self) -> Self;

    /// Round to `digits` decimal places, ties to even.
    ///
    /// Negative `digits` round to tens, hundreds, ... A scale too large for
    /// the type rounds everything to zero; a scale too fine to matter
    /// returns the value unchanged.
    fn round_to(self, digits: i32) -> Self;

    /// Raise to a power of the same type
    fn pow(self, exp: Self) -> Self;

    /// Division rounded towards negative infinity
    fn floor_div(self, rhs: Self) -> Self;

    /// Remainder taking the sign of the divisor
    fn modulo(self, rhs: Self) -> Self;

    /// Lossy conversion used by norms
    fn to_f64_lossy(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                <$t>::trunc(self)
            }

            fn round_to(self, digits: i32) -> Self {
                if !self.is_finite() {
                    return self;
                }
                let scale = (10.0 as $t).powi(digits);
                if scale == 0.0 {
                    // Keeps the sign of zero
                    return self * 0.0;
                }
                let scaled = self * scale;
                if !scaled.is_finite() || scaled.fract() == 0.0 {
                    return self;
                }
                scaled.round_ties_even() / scale
            }

            #[inline]
            fn pow(self, exp: Self) -> Self {
                self.powf(exp)
            }

            #[inline]
            fn floor_div(self, rhs: Self) -> Self {
                (self / rhs).floor()
            }

            fn modulo(self, rhs: Self) -> Self {
                let r = self % rhs;
                if r != 0.0 && (r < 0.0) != (rhs < 0.0) {
                    r + rhs
                } else {
                    r
                }
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn ceil(self) -> Self {
                self
            }

            #[inline]
            fn trunc(self) -> Self {
                self
            }

            fn round_to(self, digits: i32) -> Self {
                if digits >= 0 {
                    return self;
                }
                let Some(scale) = (10 as $t).checked_pow(digits.unsigned_abs()) else {
                    return 0;
                };
                let mut q = self / scale;
                let r = self % scale;
                // |r| < scale, so neither side of the comparison overflows
                let below = <$t>::abs(r);
                let above = scale - below;
                if below > above || (below == above && q % 2 != 0) {
                    q += r.signum();
                }
                // Nearest multiple out of range: fall back to truncation
                q.checked_mul(scale).unwrap_or(self - r)
            }

            fn pow(self, exp: Self) -> Self {
                if exp < 0 {
                    // Negative powers truncate to zero except for unit bases
                    return match self {
                        1 => 1,
                        -1 if exp % 2 == 0 => 1,
                        -1 => -1,
                        _ => 0,
                    };
                }
                match u32::try_from(exp) {
                    Ok(e) => <$t>::pow(self, e),
                    Err(_) => match self {
                        0 | 1 => self,
                        -1 if exp % 2 == 0 => 1,
                        -1 => -1,
                        // Overflows exactly as the native operator would
                        _ => <$t>::pow(self, u32::MAX),
                    },
                }
            }

            fn floor_div(self, rhs: Self) -> Self {
                let q = self / rhs;
                if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
                    q - 1
                } else {
                    q
                }
            }

            fn modulo(self, rhs: Self) -> Self {
                let r = self % rhs;
                if r != 0 && ((r < 0) != (rhs < 0)) {
                    r + rhs
                } else {
                    r
                }
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, i128, isize);
