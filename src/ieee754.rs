/*
    IEEE-754 binary interchange formats
*/

use bitvec::prelude::*;

macro_rules! assert_valid_format {
    ($E:expr, $N:expr) => {
        assert!(
            (2 <= $E) && ($E <= 60),
            "invalid exponent width, must be 2 <= E <= 60: {}",
            $E
        );
        assert!(
            (2 <= ($N - $E)) && ($N <= 64),
            "invalid total width, must be 2 + E <= N <= 64: {}",
            $N
        );
    };
}

pub(crate) use assert_valid_format;

mod convert;
mod format;
mod nan;

/// Classification of an encoded floating-point value.
///
/// Finite non-zero values carry the unbiased exponent of their
/// most significant set bit, so a subnormal reports the exponent
/// it would have after normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    // signed zero
    // => (sign)
    Zero(bool),
    // subnormal number
    // => (sign, exponent)
    Subnormal(bool, i64),
    // normal number
    // => (sign, exponent)
    Normal(bool, i64),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, quiet)
    Nan { sign: bool, quiet: bool },
}

impl Class {
    /// Returns the unbiased binary exponent.
    /// The result is wrapped in an option since only finite,
    /// non-zero numbers have an exponent.
    pub fn exponent(&self) -> Option<i64> {
        match *self {
            Class::Subnormal(_, e) | Class::Normal(_, e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if this `Class` is a zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Class::Zero(_))
    }

    /// Returns true if this `Class` is an infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Class::Infinity(_))
    }

    /// Returns true if this `Class` is a NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self, Class::Nan { .. })
    }

    /// Returns true if this `Class` is a signaling NaN.
    /// The result is wrapped in an option since only NaNs
    /// can be signaling.
    pub fn is_signaling_nan(&self) -> Option<bool> {
        match *self {
            Class::Nan { quiet, .. } => Some(!quiet),
            _ => None,
        }
    }
}

/** An IEEE-754 binary interchange format.
 *
 * The generics `E` and `N` specify the number of bits in the
 * exponent field and in the entire encoding overall.
 * Encodings are passed around as the low `N` bits of a `u64`.
 *
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct Format<const E: usize, const N: usize>;

/// Alias for `Format<11, 64>` (double-precision format)
pub type Double = Format<11, 64>;
/// Alias for `Format<8, 32>` (single-precision format)
pub type Single = Format<8, 32>;
