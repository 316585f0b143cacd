//! Surface extents in coordinate units, and the checks that make a swizzle well formed.

use crate::bits::axis_capacity;
use crate::error::{Axis, SwizzleError};
use crate::format::{check_format, PixelFormat};
use crate::morton::{
    swizzled_span_2d, swizzled_span_3d, MASK_2D_X, MASK_2D_Y, MASK_3D_X, MASK_3D_Y, MASK_3D_Z,
};

/// Dimensions of one plane, in coordinate units (texels, or 4x4 blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    /// Width in units.
    pub width: usize,
    /// Height in units.
    pub height: usize,
    /// Bytes occupied by one unit.
    pub bytes_per_unit: usize,
}

impl SurfaceLayout {
    /// Builds the layout of a `width_texels` x `height_texels` surface in `format`.
    ///
    /// Compressed extents are rounded up to whole blocks.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::UnsupportedFormat`] if [`check_format`] rejects `format`.
    /// - [`SwizzleError::InvalidDimensions`] if either extent is zero.
    pub fn new<F: PixelFormat>(
        format: F,
        width_texels: usize,
        height_texels: usize,
    ) -> Result<Self, SwizzleError> {
        check_format(format)?;
        if width_texels == 0 || height_texels == 0 {
            return Err(SwizzleError::InvalidDimensions {
                width: width_texels,
                height: height_texels,
                depth: 1,
            });
        }

        let block = format.block_dimension() as usize;
        Ok(Self {
            width: width_texels.div_ceil(block),
            height: height_texels.div_ceil(block),
            bytes_per_unit: (format.bits_per_unit() / 8) as usize,
        })
    }

    /// Number of units in one plane.
    #[inline]
    pub const fn units(&self) -> usize {
        self.width * self.height
    }

    /// Bytes in one row of units, without padding.
    #[inline]
    pub const fn unpadded_row_bytes(&self) -> usize {
        self.width * self.bytes_per_unit
    }

    /// Bytes in one swizzled plane. Swizzled planes have no padding.
    #[inline]
    pub const fn swizzled_len(&self) -> usize {
        self.units() * self.bytes_per_unit
    }

    /// Bytes a row-major plane with `row_pitch` must provide.
    ///
    /// The last row only needs its unpadded bytes. Returns [`None`] if the length
    /// does not fit in a [`usize`].
    #[inline]
    pub fn linear_len(&self, row_pitch: usize) -> Option<usize> {
        self.height
            .saturating_sub(1)
            .checked_mul(row_pitch)?
            .checked_add(self.unpadded_row_bytes())
    }

    /// Checks that a single plane can be swizzled without collisions or overruns.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::DimensionTooLarge`] if an extent does not fit its mask.
    /// - [`SwizzleError::InvalidDimensions`] if the z-order span differs from [`Self::units`].
    pub fn check_plane(&self) -> Result<(), SwizzleError> {
        check_extent(Axis::X, self.width, MASK_2D_X)?;
        check_extent(Axis::Y, self.height, MASK_2D_Y)?;

        if self.width == 0
            || self.height == 0
            || swizzled_span_2d(self.width, self.height) != self.units() as u64
        {
            return Err(self.invalid_dimensions(1));
        }
        Ok(())
    }

    /// Checks that `depth` planes of this layout form a volume that can be swizzled.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::DimensionTooLarge`] if an extent does not fit its mask.
    /// - [`SwizzleError::InvalidDimensions`] if the z-order span differs from the unit count.
    pub fn check_volume(&self, depth: usize) -> Result<(), SwizzleError> {
        check_extent(Axis::X, self.width, MASK_3D_X)?;
        check_extent(Axis::Y, self.height, MASK_3D_Y)?;
        check_extent(Axis::Z, depth, MASK_3D_Z)?;

        if self.width == 0 || self.height == 0 || depth == 0 {
            return Err(self.invalid_dimensions(depth));
        }

        let units = self.units() as u64 * depth as u64;
        if swizzled_span_3d(self.width, self.height, depth) != units {
            return Err(self.invalid_dimensions(depth));
        }
        Ok(())
    }

    fn invalid_dimensions(&self, depth: usize) -> SwizzleError {
        SwizzleError::InvalidDimensions {
            width: self.width,
            height: self.height,
            depth,
        }
    }
}

#[inline]
fn check_extent(axis: Axis, extent: usize, mask: u32) -> Result<(), SwizzleError> {
    let max = axis_capacity(mask);
    if extent as u64 > max {
        return Err(SwizzleError::DimensionTooLarge { axis, extent, max });
    }
    Ok(())
}
