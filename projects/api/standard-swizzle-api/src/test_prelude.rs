//! Common test imports and utilities for API tests.
#![allow(unused_imports)]

pub use rstest::rstest;

pub use crate::error::{InvalidArgumentKind, StandardSwizzleError};
pub use crate::image::Image;
pub use crate::metadata::{TexDimension, TexMetadata};
pub use crate::scratch::ScratchImage;
pub use standard_swizzle::{DxgiFormat, SwizzleDirection};

pub use alloc::string::ToString;
pub use alloc::{vec, vec::Vec};

/// Bytes that differ from their neighbours, so misplaced units show up.
pub(crate) fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(37).wrapping_add((i >> 8) as u8 ^ 0x5A))
        .collect()
}

/// Row-major `width * height` 32-bit units where unit `(x, y)` holds `y << 16 | x`.
pub(crate) fn coordinate_plane_u32(width: usize, height: usize) -> Vec<u8> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| ((y as u32) << 16) | x as u32))
        .flat_map(u32::to_le_bytes)
        .collect()
}

/// Reads the little-endian 32-bit unit at `index`.
pub(crate) fn read_u32(bytes: &[u8], index: usize) -> u32 {
    let start = index * 4;
    u32::from_le_bytes([bytes[start], bytes[start + 1], bytes[start + 2], bytes[start + 3]])
}
