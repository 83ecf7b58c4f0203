/*
    Conversions between packed encodings and fields
*/

use bitvec::field::BitField;

use super::*;

// Utility
impl<const E: usize, const N: usize> Format<E, N> {
    // Views the low `N` bits of `bits` as a packed representation.
    #[inline]
    fn packed(bits: &u64) -> &BitSlice<u64, Lsb0> {
        assert_valid_format!(E, N);
        &bits.view_bits::<Lsb0>()[..N]
    }

    // Splices a packed floating-point representation into
    // the sign, exponent, and mantissa field.
    // Does not check if `bv` has the correct number of bits.
    #[inline]
    fn split_packed(
        bv: &BitSlice<u64, Lsb0>,
    ) -> (bool, &BitSlice<u64, Lsb0>, &BitSlice<u64, Lsb0>) {
        (bv[N - 1], &bv[Self::M..N - 1], &bv[..Self::M])
    }
}

// Packing and classification
impl<const E: usize, const N: usize> Format<E, N> {
    /// Builds an encoding from a sign bit, biased exponent
    /// field, and mantissa field.
    pub fn pack(sign: bool, exponent: u64, mantissa: u64) -> u64 {
        assert_valid_format!(E, N);
        assert!(
            exponent >> E == 0,
            "exponent field {:#x} does not fit in {} bits",
            exponent,
            E
        );
        assert!(
            mantissa >> Self::M == 0,
            "mantissa field {:#x} does not fit in {} bits",
            mantissa,
            Self::M
        );

        let mut bits = 0u64;
        let bv = bits.view_bits_mut::<Lsb0>();
        bv[..Self::M].store_le(mantissa);
        bv[Self::M..N - 1].store_le(exponent);
        bv.set(N - 1, sign);
        bits
    }

    /// Classifies an encoding.
    pub fn classify(bits: u64) -> Class {
        let bv = Self::packed(&bits);
        let (s, e, m) = Self::split_packed(bv);
        let exp = e.load_le::<u64>() as i64 - Self::BIAS;

        // branch on exponent
        if exp > Self::EMAX {
            if m.not_any() {
                // infinity
                Class::Infinity(s)
            } else {
                // NaN, the quiet bit leads the mantissa
                Class::Nan {
                    sign: s,
                    quiet: m[Self::M - 1],
                }
            }
        } else if exp < Self::EMIN {
            // subnormal or zero
            match m.last_one() {
                None => Class::Zero(s),
                Some(i) => Class::Subnormal(s, Self::EXPMIN + i as i64),
            }
        } else {
            // normal
            Class::Normal(s, exp)
        }
    }
}
