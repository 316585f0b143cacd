//! # Bit Deposit / Extract
//!
//! The primitive every swizzle is built on. An axis mask selects which bits of a
//! swizzled index belong to that axis:
//!
//! ```text
//! mask   = 0b1010
//! x      = 0b  11
//! deposit(x, mask) = 0b1010
//! ```
//!
//! [`extract_bits`] is the inverse: it reads the bits under the mask and packs them
//! into the low bits of the result.
//!
//! ## Backends
//!
//! - `portable`: bit-by-bit loop. Reference semantics.
//! - `bmi2`: `PDEP`/`PEXT` on x86 CPUs.
//!
//! The backend is picked at compile time. Build with `-C target-feature=+bmi2`
//! (or a `target-cpu` that has it) to use the hardware instructions; otherwise the
//! portable loop is used. The choice never changes results.

pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod bmi2;

/// Scatters the low `popcount(mask)` bits of `value` into the set bit positions of `mask`.
///
/// Bits of `value` are consumed from bit 0 upwards and placed into the mask's set bits
/// from lowest to highest. All other bits of the result are zero.
///
/// # Examples
///
/// ```
/// use standard_swizzle::bits::deposit_bits;
///
/// assert_eq!(deposit_bits(0b11, 0b1010), 0b1010);
/// assert_eq!(deposit_bits(0b01, 0b1010), 0b0010);
/// ```
#[inline(always)]
pub fn deposit_bits(value: u32, mask: u32) -> u32 {
    #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "bmi2"))]
    {
        // SAFETY: bmi2 is enabled for the whole compilation unit.
        unsafe { bmi2::deposit_bits(value, mask) }
    }

    #[cfg(not(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "bmi2")))]
    {
        portable::deposit_bits(value, mask)
    }
}

/// Gathers the bits of `value` at the set positions of `mask` into the low bits of the result.
///
/// # Examples
///
/// ```
/// use standard_swizzle::bits::extract_bits;
///
/// assert_eq!(extract_bits(0b1010, 0b1010), 0b11);
/// assert_eq!(extract_bits(0b0100, 0b0101), 0b10);
/// ```
#[inline(always)]
pub fn extract_bits(value: u32, mask: u32) -> u32 {
    #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "bmi2"))]
    {
        // SAFETY: bmi2 is enabled for the whole compilation unit.
        unsafe { bmi2::extract_bits(value, mask) }
    }

    #[cfg(not(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "bmi2")))]
    {
        portable::extract_bits(value, mask)
    }
}

/// Number of values an axis can address through `mask`, i.e. `2^popcount(mask)`.
#[inline]
pub const fn axis_capacity(mask: u32) -> u64 {
    1u64 << mask.count_ones()
}
