//! # Swizzle Transforms
//!
//! Raw, allocation-free transforms between row-major and swizzled (z-order) planes.
//!
//! - [`transform_plane`]: one 2D plane.
//! - [`transform_array`]: independent 2D planes, each with its own row pitch.
//! - [`transform_volume`]: a 3D volume whose swizzled index is folded into per-slice planes.
//!
//! All transforms copy whole coordinate units (texels or 4x4 blocks) and never look at
//! their contents. Source and destination buffers must not overlap.
//!
//! ## Row pitch
//!
//! Only the row-major side of a transform reads its row pitch. Swizzled planes are
//! always tightly packed: `width * height * bytes_per_unit` bytes.

mod array;
pub(crate) mod plane;
mod volume;

pub use array::transform_array;
pub use plane::transform_plane;
pub use volume::transform_volume;

use crate::error::SwizzleError;
use crate::layout::SurfaceLayout;

/// Which way a transform converts a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwizzleDirection {
    /// Row-major source, swizzled destination.
    Swizzle,
    /// Swizzled source, row-major destination.
    Deswizzle,
}

impl From<bool> for SwizzleDirection {
    /// `true` converts to the swizzled layout.
    fn from(to_swizzle: bool) -> Self {
        if to_swizzle {
            Self::Swizzle
        } else {
            Self::Deswizzle
        }
    }
}

/// A plane read by a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneRef {
    /// First byte of the plane. May be null, which the transforms report as an error.
    pub pixels: *const u8,
    /// Bytes between the starts of two rows.
    pub row_pitch: usize,
}

impl PlaneRef {
    /// Creates a plane from a raw pointer.
    pub const fn new(pixels: *const u8, row_pitch: usize) -> Self {
        Self { pixels, row_pitch }
    }

    /// Creates a plane over `pixels`.
    pub const fn from_slice(pixels: &[u8], row_pitch: usize) -> Self {
        Self {
            pixels: pixels.as_ptr(),
            row_pitch,
        }
    }
}

/// A plane written by a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneMut {
    /// First byte of the plane. May be null, which the transforms report as an error.
    pub pixels: *mut u8,
    /// Bytes between the starts of two rows.
    pub row_pitch: usize,
}

impl PlaneMut {
    /// Creates a plane from a raw pointer.
    pub const fn new(pixels: *mut u8, row_pitch: usize) -> Self {
        Self { pixels, row_pitch }
    }

    /// Creates a plane over `pixels`.
    pub fn from_slice(pixels: &mut [u8], row_pitch: usize) -> Self {
        Self {
            pixels: pixels.as_mut_ptr(),
            row_pitch,
        }
    }
}

/// Row pitch of whichever side of the transform is row-major.
#[inline]
fn row_major_pitch(src: &PlaneRef, dst: &PlaneMut, direction: SwizzleDirection) -> usize {
    match direction {
        SwizzleDirection::Swizzle => src.row_pitch,
        SwizzleDirection::Deswizzle => dst.row_pitch,
    }
}

#[inline]
fn check_row_pitch(
    layout: &SurfaceLayout,
    row_pitch: usize,
    slice: usize,
) -> Result<(), SwizzleError> {
    let min = layout.unpadded_row_bytes();
    if row_pitch < min {
        return Err(SwizzleError::RowPitchTooSmall {
            slice,
            row_pitch,
            min,
        });
    }
    Ok(())
}
