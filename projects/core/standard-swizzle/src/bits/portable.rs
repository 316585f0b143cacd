//! Bit-by-bit deposit/extract.
//!
//! This is the reference implementation; the BMI2 backend must produce identical output.

/// Scatters the low bits of `value` into the set bits of `mask`, lowest mask bit first.
///
/// Consumes one bit of `value` per set bit of `mask`. All bits outside `mask` are zero.
#[inline(always)]
pub const fn deposit_bits(value: u32, mut mask: u32) -> u32 {
    let mut result = 0;
    let mut value_bit = 1u32;
    while mask != 0 {
        if value & value_bit != 0 {
            // lowest set bit of the remaining mask
            result |= mask & mask.wrapping_neg();
        }
        mask &= mask - 1;
        value_bit = value_bit.wrapping_shl(1);
    }
    result
}

/// Gathers the bits of `value` selected by `mask` into the low bits of the result.
///
/// Mask bits are visited from low to high; the first visited bit lands in bit 0.
#[inline(always)]
pub const fn extract_bits(value: u32, mut mask: u32) -> u32 {
    let mut result = 0;
    let mut result_bit = 1u32;
    while mask != 0 {
        if value & mask & mask.wrapping_neg() != 0 {
            result |= result_bit;
        }
        mask &= mask - 1;
        result_bit = result_bit.wrapping_shl(1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0b0000, 0b1010, 0b0000)]
    #[case(0b0001, 0b1010, 0b0010)]
    #[case(0b0010, 0b1010, 0b1000)]
    #[case(0b0011, 0b1010, 0b1010)]
    #[case(0b0001, 0b0101, 0b0001)]
    #[case(0b0011, 0b0101, 0b0101)]
    #[case(0b0111, 0b0101, 0b0101)] // bits beyond popcount(mask) are dropped
    #[case(0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF)]
    #[case(0b1, 0x8000_0000, 0x8000_0000)]
    fn deposit_places_bits_in_mask_order(
        #[case] value: u32,
        #[case] mask: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(deposit_bits(value, mask), expected);
    }

    #[rstest]
    #[case(0b1010, 0b1010, 0b11)]
    #[case(0b1000, 0b1010, 0b10)]
    #[case(0b0010, 0b1010, 0b01)]
    #[case(0b1111, 0b0101, 0b11)]
    #[case(0b0100, 0b0101, 0b10)]
    #[case(0xFFFF_FFFF, 0xAAAA_AAAA, 0xFFFF)]
    #[case(0x8000_0000, 0x8000_0000, 0b1)]
    fn extract_packs_bits_from_mask_positions(
        #[case] value: u32,
        #[case] mask: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(extract_bits(value, mask), expected);
    }

    #[test]
    fn zero_mask_yields_zero() {
        assert_eq!(deposit_bits(0xFFFF_FFFF, 0), 0);
        assert_eq!(extract_bits(0xFFFF_FFFF, 0), 0);
    }

    #[rstest]
    #[case(0xAAAA_AAAA)]
    #[case(0x5555_5555)]
    #[case(0x4924_9249)]
    #[case(0x9249_2492)]
    #[case(0x2492_4924)]
    #[case(0x0F0F_00FF)]
    fn extract_inverts_deposit(#[case] mask: u32) {
        let kept = match mask.count_ones() {
            32 => u32::MAX,
            n => (1u32 << n) - 1,
        };

        for value in 0..(1u32 << 16) {
            assert_eq!(
                extract_bits(deposit_bits(value, mask), mask),
                value & kept,
                "value {value:#x} mask {mask:#x}"
            );
        }
    }

    #[rstest]
    #[case(0xAAAA_AAAA)]
    #[case(0x5555_5555)]
    #[case(0x2492_4924)]
    fn deposit_inverts_extract_within_mask(#[case] mask: u32) {
        // Walk a spread of values, including ones with bits outside the mask.
        let mut value = 0x1234_5678u32;
        for _ in 0..4096 {
            assert_eq!(deposit_bits(extract_bits(value, mask), mask), value & mask);
            value = value.wrapping_mul(0x9E37_79B9).wrapping_add(1);
        }
    }

    #[test]
    fn usable_in_const_context() {
        const INDEX: u32 = deposit_bits(1, 0b1010) + deposit_bits(0, 0b0101);
        assert_eq!(INDEX, 2);
    }
}
