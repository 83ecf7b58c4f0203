/*
    Format parameters
*/

use super::*;

impl<const E: usize, const N: usize> Format<E, N> {
    /// Bitwidth of the representation.
    pub const N: usize = N;

    /// Bitwidth of the exponent field.
    pub const E: usize = E;

    /// Radix, in this case, 2.
    pub const B: usize = 2;

    /// Number of (binary) digits in the significand,
    /// including the implicit bit. This is just `Self::M + 1`.
    pub const PREC: usize = N - E;

    /// Bitwidth of the mantissa field.
    pub const M: usize = Self::PREC - 1;

    /// Exponent of the largest finite value in this format when it is
    /// in the form `(-1)^s b^e m` where `m` is a fraction between 1 and 2.
    pub const EMAX: i64 = i64::pow(2, (E - 1) as u32) - 1;

    /// Exponent of the smallest normal value in this format when it is
    /// in the form `(-1)^s b^e m` where `m` is a fraction between 1 and 2.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// Exponent of the smallest positive subnormal value.
    /// This is just `Self::EMIN - Self::M`.
    pub const EXPMIN: i64 = Self::EMIN - Self::M as i64;

    /// Bitwidth of the NaN payload, the mantissa field
    /// without its quiet bit. This is just `Self::M - 1`.
    pub const NAN_PAYLOAD_SIZE: usize = Self::M - 1;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;

    /// Returns the all-ones exponent field used by infinities and NaNs.
    #[inline(always)]
    pub const fn exponent_mask() -> u64 {
        (1u64 << E) - 1
    }
}
