//! Borrowed image descriptors.

use standard_swizzle::{DxgiFormat, PixelFormat};

/// One 2D plane of pixel data, borrowed from the caller.
///
/// `pixels` of [`None`] describes an image whose buffer is missing; the swizzle
/// functions report it as [`NullBuffer`](crate::StandardSwizzleError::NullBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image<'a, F: PixelFormat = DxgiFormat> {
    /// Pixel format.
    pub format: F,
    /// Width in texels.
    pub width: usize,
    /// Height in texels.
    pub height: usize,
    /// Bytes between the starts of two rows (of blocks, for compressed formats).
    pub row_pitch: usize,
    /// Bytes in the whole plane.
    pub slice_pitch: usize,
    /// Pixel data.
    pub pixels: Option<&'a [u8]>,
}

impl<'a, F: PixelFormat> Image<'a, F> {
    /// Creates an image with tightly packed rows.
    pub fn new(format: F, width: usize, height: usize, pixels: Option<&'a [u8]>) -> Self {
        let (row_pitch, slice_pitch) = tight_pitches(format, width, height);
        Self {
            format,
            width,
            height,
            row_pitch,
            slice_pitch,
            pixels,
        }
    }

    /// Creates an image with an explicit row pitch.
    pub fn with_row_pitch(
        format: F,
        width: usize,
        height: usize,
        row_pitch: usize,
        pixels: Option<&'a [u8]>,
    ) -> Self {
        let block = format.block_dimension() as usize;
        Self {
            format,
            width,
            height,
            row_pitch,
            slice_pitch: row_pitch.saturating_mul(height.div_ceil(block)),
            pixels,
        }
    }
}

/// Row and slice pitch of a tightly packed plane.
///
/// Compressed formats count rows of 4x4 blocks. Pitches that do not fit in a
/// [`usize`] saturate, so no buffer can ever satisfy them.
pub fn tight_pitches<F: PixelFormat>(format: F, width: usize, height: usize) -> (usize, usize) {
    let block = format.block_dimension() as usize;
    let bytes_per_unit = (format.bits_per_unit() / 8) as usize;
    let row_pitch = width.div_ceil(block).saturating_mul(bytes_per_unit);
    (row_pitch, row_pitch.saturating_mul(height.div_ceil(block)))
}
