/*
    Numeric families
*/

use num_integer::Integer;
use num_traits::{AsPrimitive, SaturatingSub, Unsigned, WrappingNeg, Zero};

use crate::ieee754::{Class, Double, Single};

/// The number type.
///
/// The central trait of this library.
/// A `Number` is any value the generic operations accept: a primitive
/// integer or float, or a caller-defined type wrapping one of them.
/// Implementations must order, compare, and subtract consistently
/// with the primitive they wrap.
pub trait Number: Copy + PartialOrd + Zero + AsPrimitive<f64> {
    /// Returns true if this `Number` does not encode a number.
    /// Only NaNs fail to compare equal to themselves.
    #[allow(clippy::eq_op)]
    #[inline]
    fn is_nan(self) -> bool {
        self != self
    }

    /// Returns true if this `Number` is an infinity, according to sign.
    /// If `sign > 0`, only positive infinity matches.
    /// If `sign < 0`, only negative infinity matches.
    /// If `sign == 0`, either infinity matches.
    /// Integers never are, since they widen to finite doubles.
    #[inline]
    fn is_inf(self, sign: i32) -> bool {
        let w: f64 = self.as_();
        w.is_infinite() && ((sign >= 0 && w > 0.0) || (sign <= 0 && w < 0.0))
    }

    /// Returns true if the sign bit of this `Number` is set.
    /// Unlike `self < 0`, this distinguishes `-0.0` from `+0.0`.
    #[inline]
    fn is_sign_negative(self) -> bool {
        AsPrimitive::<f64>::as_(self).is_sign_negative()
    }

    /// Subtracts `other` from this `Number`.
    ///
    /// Integers saturate at the bounds of their type;
    /// floats follow IEEE-754 subtraction.
    fn difference(self, other: Self) -> Self;
}

/// A `Number` that can be negated.
pub trait Signed: Number {
    /// Negates this `Number`.
    ///
    /// Integers wrap, so the minimum value of a signed
    /// integer negates to itself.
    fn negate(self) -> Self;
}

/// A signed two's-complement integer.
pub trait Int: Signed + Integer {}

/// An unsigned integer.
pub trait Uint: Number + Integer + Unsigned {}

/// An IEEE-754 binary floating-point number.
pub trait Float: Signed {
    /// Returns an infinity with a particular sign.
    fn infinity(sign: bool) -> Self;

    /// Returns the canonical NaN of this type.
    fn nan() -> Self;

    /// Returns the encoding of this `Float` in the low bits of a `u64`.
    fn to_raw(self) -> u64;

    /// Reinterprets the low bits of `bits` as a `Float`.
    fn from_raw(bits: u64) -> Self;

    /// Narrows a double-precision value to this type.
    fn from_f64(x: f64) -> Self;

    /// Classifies this `Float` by its encoding.
    fn class(self) -> Class;

    /// Returns true if this `Float` is a NaN with its quiet bit set.
    fn is_quiet(self) -> bool {
        self.class().is_signaling_nan() == Some(false)
    }

    /// Returns true if this `Float` is a NaN with its quiet bit clear.
    fn is_signaling(self) -> bool {
        self.class().is_signaling_nan() == Some(true)
    }
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                #[inline]
                fn difference(self, other: Self) -> Self {
                    SaturatingSub::saturating_sub(&self, &other)
                }
            }

            impl Signed for $t {
                #[inline]
                fn negate(self) -> Self {
                    WrappingNeg::wrapping_neg(&self)
                }
            }

            impl Int for $t {}
        )*
    };
}

macro_rules! impl_unsigned_int {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                #[inline]
                fn difference(self, other: Self) -> Self {
                    SaturatingSub::saturating_sub(&self, &other)
                }
            }

            impl Uint for $t {}
        )*
    };
}

macro_rules! impl_float {
    ($t:ty, $bits:ty, $fmt:ty) => {
        impl Number for $t {
            #[inline]
            fn difference(self, other: Self) -> Self {
                self - other
            }
        }

        impl Signed for $t {
            #[inline]
            fn negate(self) -> Self {
                -self
            }
        }

        impl Float for $t {
            #[inline]
            fn infinity(sign: bool) -> Self {
                Self::from_raw(<$fmt>::infinity_bits(sign))
            }

            #[inline]
            fn nan() -> Self {
                Self::from_raw(<$fmt>::canonical_nan())
            }

            #[inline]
            fn to_raw(self) -> u64 {
                self.to_bits() as u64
            }

            #[inline]
            fn from_raw(bits: u64) -> Self {
                <$t>::from_bits(bits as $bits)
            }

            #[inline]
            fn from_f64(x: f64) -> Self {
                AsPrimitive::<$t>::as_(x)
            }

            fn class(self) -> Class {
                <$fmt>::classify(self.to_raw())
            }
        }
    };
}

impl_signed_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_int!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, u32, Single);
impl_float!(f64, u64, Double);
