//! Common test imports and utilities for swizzle tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::allocate::allocate_align_64;
pub use crate::error::{Axis, FormatRejection, SwizzleError};
pub use crate::format::{DxgiFormat, PixelFormat};
pub use crate::layout::SurfaceLayout;
pub use crate::transform::{PlaneMut, PlaneRef, SwizzleDirection};

// Standard library imports commonly used in tests
pub use core::ptr::{null, null_mut};
pub use safe_allocator_api::RawAlloc;
pub use std::collections::HashSet;
pub use std::{vec, vec::Vec};

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use std::is_x86_feature_detected;

/// Bytes where every position holds a distinct-looking value, so misplaced units show up.
pub(crate) fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8)).collect()
}

/// Row-major buffer of `width * height` 32-bit units where unit `(x, y)` holds `y << 16 | x`.
pub(crate) fn coordinate_plane_u32(width: usize, height: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            out.extend_from_slice(&(((y as u32) << 16) | x as u32).to_le_bytes());
        }
    }
    out
}

/// Reads the 32-bit unit at `index` of a little-endian buffer.
pub(crate) fn read_u32(bytes: &[u8], index: usize) -> u32 {
    let start = index * 4;
    u32::from_le_bytes([bytes[start], bytes[start + 1], bytes[start + 2], bytes[start + 3]])
}
