//! # C API (FFI) Documentation
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! Exposes [`standard_swizzle`](crate::standard_swizzle),
//! [`standard_swizzle_array`](crate::standard_swizzle_array) and
//! [`standard_swizzle_3d`](crate::standard_swizzle_3d) to C. Results are returned
//! as opaque [`SswScratchImage`] handles which must be released with
//! [`ssw_free_scratch_image`](swizzle::ssw_free_scratch_image).
//!
//! ## Example Usage
//!
//! ```c
//! SswImage image = {
//!     .format = 28, // DXGI_FORMAT_R8G8B8A8_UNORM
//!     .width = 256,
//!     .height = 256,
//!     .row_pitch = 256 * 4,
//!     .slice_pitch = 256 * 256 * 4,
//!     .pixels = pixels,
//! };
//!
//! SswScratchImage* swizzled = NULL;
//! SswResult result = ssw_standard_swizzle(&image, true, &swizzled);
//! if (result.error_code != SSW_SUCCESS) {
//!     printf("Swizzle failed: %s\n", ssw_error_message(result.error_code));
//!     return;
//! }
//!
//! const uint8_t* data = ssw_scratch_image_pixels(swizzled);
//! size_t len = ssw_scratch_image_len(swizzled);
//! // ...
//! ssw_free_scratch_image(swizzled);
//! ```
//!
//! ## Error Handling
//!
//! All transform functions return [`SswResult`]; `error_code` is
//! [`SswErrorCode::Success`] (0) on success. [`ssw_error_message`] describes a code.

pub mod error;
pub mod swizzle;

pub use error::{ssw_error_message, SswErrorCode, SswResult};

use crate::image::Image;
use crate::metadata::{TexDimension, TexMetadata};
use standard_swizzle::DxgiFormat;

/// FFI-safe version of [`Image`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SswImage {
    /// `DXGI_FORMAT` value.
    pub format: u32,
    /// Width in texels.
    pub width: usize,
    /// Height in texels.
    pub height: usize,
    /// Bytes between the starts of two rows.
    pub row_pitch: usize,
    /// Bytes readable from `pixels`.
    pub slice_pitch: usize,
    /// Pixel data, or null.
    pub pixels: *const u8,
}

impl SswImage {
    /// Borrows this image as an [`Image`].
    ///
    /// Unrecognised format values become [`DxgiFormat::Unknown`].
    ///
    /// # Safety
    /// If non-null, `pixels` must be valid for reads of `slice_pitch` bytes for `'a`.
    pub(crate) unsafe fn as_image<'a>(&self) -> Image<'a> {
        let pixels = if self.pixels.is_null() {
            None
        } else {
            Some(unsafe { core::slice::from_raw_parts(self.pixels, self.slice_pitch) })
        };

        Image {
            format: DxgiFormat::from_u32(self.format).unwrap_or(DxgiFormat::Unknown),
            width: self.width,
            height: self.height,
            row_pitch: self.row_pitch,
            slice_pitch: self.slice_pitch,
            pixels,
        }
    }
}

/// FFI-safe version of [`TexMetadata`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SswTexMetadata {
    /// Width of the top level, in texels.
    pub width: usize,
    /// Height of the top level, in texels.
    pub height: usize,
    /// Depth of the top level.
    pub depth: usize,
    /// Number of array elements.
    pub array_size: usize,
    /// Number of mip levels.
    pub mip_levels: usize,
    /// `DXGI_FORMAT` value.
    pub format: u32,
    /// `D3D11_RESOURCE_DIMENSION` value (2, 3 or 4).
    pub dimension: u32,
}

impl SswTexMetadata {
    /// Converts to [`TexMetadata`], or [`None`] if `dimension` is not recognised.
    pub(crate) fn to_metadata(self) -> Option<TexMetadata> {
        Some(TexMetadata {
            width: self.width,
            height: self.height,
            depth: self.depth,
            array_size: self.array_size,
            mip_levels: self.mip_levels,
            format: DxgiFormat::from_u32(self.format).unwrap_or(DxgiFormat::Unknown),
            dimension: TexDimension::from_u32(self.dimension)?,
        })
    }
}

impl From<TexMetadata> for SswTexMetadata {
    fn from(metadata: TexMetadata) -> Self {
        Self {
            width: metadata.width,
            height: metadata.height,
            depth: metadata.depth,
            array_size: metadata.array_size,
            mip_levels: metadata.mip_levels,
            format: metadata.format.into(),
            dimension: metadata.dimension as u32,
        }
    }
}
