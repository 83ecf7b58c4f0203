/*
    NaN encodings
*/

use super::*;

impl<const E: usize, const N: usize> Format<E, N> {
    /// Returns the encoding of a NaN based on the specified sign,
    /// quiet bit, and payload. The payload occupies the mantissa bits
    /// below the quiet bit.
    pub fn nan_bits(sign: bool, quiet: bool, payload: u64) -> u64 {
        assert!(
            payload >> Self::NAN_PAYLOAD_SIZE == 0,
            "expected a payload of at most {} bits, received {:#x}",
            Self::NAN_PAYLOAD_SIZE,
            payload
        );
        assert!(
            quiet || payload != 0,
            "a signaling NaN requires a non-zero payload"
        );

        let mantissa = ((quiet as u64) << Self::NAN_PAYLOAD_SIZE) | payload;
        Self::pack(sign, Self::exponent_mask(), mantissa)
    }

    /// Returns the canonical NaN of this format:
    /// positive, quiet, with an empty payload.
    pub fn canonical_nan() -> u64 {
        Self::nan_bits(false, true, 0)
    }

    /// Returns the encoding of an infinity with a particular sign.
    pub fn infinity_bits(sign: bool) -> u64 {
        Self::pack(sign, Self::exponent_mask(), 0)
    }
}
