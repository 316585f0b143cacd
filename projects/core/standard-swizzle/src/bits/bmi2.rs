//! BMI2 `PDEP`/`PEXT` backend.

#[cfg(target_arch = "x86")]
use core::arch::x86::{_pdep_u32, _pext_u32};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_pdep_u32, _pext_u32};

/// Scatters the low bits of `value` into the set bits of `mask` using `PDEP`.
///
/// # Safety
///
/// The CPU must support BMI2.
#[inline]
#[target_feature(enable = "bmi2")]
pub unsafe fn deposit_bits(value: u32, mask: u32) -> u32 {
    _pdep_u32(value, mask)
}

/// Gathers the bits of `value` selected by `mask` into the low bits using `PEXT`.
///
/// # Safety
///
/// The CPU must support BMI2.
#[inline]
#[target_feature(enable = "bmi2")]
pub unsafe fn extract_bits(value: u32, mask: u32) -> u32 {
    _pext_u32(value, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::portable;
    use crate::morton::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(MASK_2D_X)]
    #[case(MASK_2D_Y)]
    #[case(MASK_3D_X)]
    #[case(MASK_3D_Y)]
    #[case(MASK_3D_Z)]
    #[case(0x0F0F_00FF)]
    fn matches_portable_backend(#[case] mask: u32) {
        if !is_x86_feature_detected!("bmi2") {
            return;
        }

        let mut value = 0xDEAD_BEEFu32;
        for _ in 0..65536 {
            unsafe {
                assert_eq!(
                    deposit_bits(value, mask),
                    portable::deposit_bits(value, mask),
                    "deposit value {value:#x} mask {mask:#x}"
                );
                assert_eq!(
                    extract_bits(value, mask),
                    portable::extract_bits(value, mask),
                    "extract value {value:#x} mask {mask:#x}"
                );
            }
            value = value.wrapping_mul(0x9E37_79B9).wrapping_add(0x7F4A_7C15);
        }
    }
}
