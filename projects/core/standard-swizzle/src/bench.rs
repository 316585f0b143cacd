//! Benchmark functions re-exported for external benchmarks.
//!
//! This module re-exposes internal functions with `pub(crate)` visibility so that
//! external benchmarks can reach them when the `bench` feature is enabled.
#![allow(clippy::missing_safety_doc)]
#![allow(missing_docs)]
#![cfg(not(tarpaulin_include))]

/// Bit deposit / extract backends.
pub mod bits {
    pub const fn portable_deposit_bits(value: u32, mask: u32) -> u32 {
        crate::bits::portable::deposit_bits(value, mask)
    }

    pub const fn portable_extract_bits(value: u32, mask: u32) -> u32 {
        crate::bits::portable::extract_bits(value, mask)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn bmi2_deposit_bits(value: u32, mask: u32) -> u32 {
        crate::bits::bmi2::deposit_bits(value, mask)
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub unsafe fn bmi2_extract_bits(value: u32, mask: u32) -> u32 {
        crate::bits::bmi2::extract_bits(value, mask)
    }
}

/// Unchecked 2D plane loops.
pub mod plane {
    pub unsafe fn swizzle_plane(
        src: *const u8,
        src_row_pitch: usize,
        dst: *mut u8,
        width: usize,
        height: usize,
        bytes_per_unit: usize,
    ) {
        crate::transform::plane::swizzle_plane(
            src,
            src_row_pitch,
            dst,
            width,
            height,
            bytes_per_unit,
        )
    }

    pub unsafe fn deswizzle_plane(
        src: *const u8,
        dst: *mut u8,
        dst_row_pitch: usize,
        width: usize,
        height: usize,
        bytes_per_unit: usize,
    ) {
        crate::transform::plane::deswizzle_plane(
            src,
            dst,
            dst_row_pitch,
            width,
            height,
            bytes_per_unit,
        )
    }
}
