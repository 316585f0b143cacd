//! Owned destination images.

use crate::error::{InvalidArgumentKind, StandardSwizzleError};
use crate::image::{tight_pitches, Image};
use crate::metadata::TexMetadata;
use core::fmt;
use safe_allocator_api::RawAlloc;
use standard_swizzle::allocate::allocate_zeroed_align_64;
use standard_swizzle::{DxgiFormat, PixelFormat};

/// A set of same-sized planes in one 64-byte aligned, zero-initialised allocation.
///
/// Planes are tightly packed, one after another: plane `i` starts at
/// `i * slice_pitch`.
pub struct ScratchImage<F: PixelFormat = DxgiFormat> {
    metadata: TexMetadata<F>,
    row_pitch: usize,
    slice_pitch: usize,
    image_count: usize,
    memory: RawAlloc,
}

impl<F: PixelFormat> ScratchImage<F> {
    /// Allocates `array_size` 2D planes.
    pub fn initialize_2d(
        format: F,
        width: usize,
        height: usize,
        array_size: usize,
    ) -> Result<Self, StandardSwizzleError> {
        Self::allocate(TexMetadata::new_2d(format, width, height, array_size), array_size)
    }

    /// Allocates the `depth` slices of a volume.
    pub fn initialize_3d(
        format: F,
        width: usize,
        height: usize,
        depth: usize,
    ) -> Result<Self, StandardSwizzleError> {
        Self::allocate(TexMetadata::new_3d(format, width, height, depth), depth)
    }

    fn allocate(metadata: TexMetadata<F>, image_count: usize) -> Result<Self, StandardSwizzleError> {
        let (row_pitch, slice_pitch) = tight_pitches(metadata.format, metadata.width, metadata.height);
        let len = slice_pitch
            .checked_mul(image_count)
            .filter(|&len| len > 0)
            .ok_or(InvalidArgumentKind::InvalidDimensions)?;

        Ok(Self {
            metadata,
            row_pitch,
            slice_pitch,
            image_count,
            memory: allocate_zeroed_align_64(len)?,
        })
    }

    /// Metadata of the whole resource.
    pub fn metadata(&self) -> &TexMetadata<F> {
        &self.metadata
    }

    /// Number of planes.
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Bytes between rows of each plane.
    pub fn row_pitch(&self) -> usize {
        self.row_pitch
    }

    /// Bytes in each plane.
    pub fn slice_pitch(&self) -> usize {
        self.slice_pitch
    }

    /// Plane `index`, or [`None`] if out of range.
    pub fn image(&self, index: usize) -> Option<Image<'_, F>> {
        if index >= self.image_count {
            return None;
        }

        let start = index * self.slice_pitch;
        Some(Image {
            format: self.metadata.format,
            width: self.metadata.width,
            height: self.metadata.height,
            row_pitch: self.row_pitch,
            slice_pitch: self.slice_pitch,
            pixels: Some(&self.pixels()[start..start + self.slice_pitch]),
        })
    }

    /// All planes, in order.
    pub fn images(&self) -> impl Iterator<Item = Image<'_, F>> + '_ {
        (0..self.image_count).filter_map(move |index| self.image(index))
    }

    /// All pixel data.
    pub fn pixels(&self) -> &[u8] {
        self.memory.as_slice()
    }

    /// All pixel data, mutably.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.memory.as_mut_slice()
    }

    /// Pointer to the first byte of plane `index`.
    ///
    /// `index` must be below [`Self::image_count`].
    pub(crate) fn plane_ptr_mut(&mut self, index: usize) -> *mut u8 {
        debug_assert!(index < self.image_count);
        // SAFETY: plane `index` lies within the allocation.
        unsafe { self.memory.as_mut_ptr().add(index * self.slice_pitch) }
    }
}

impl<F: PixelFormat> fmt::Debug for ScratchImage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchImage")
            .field("metadata", &self.metadata)
            .field("row_pitch", &self.row_pitch)
            .field("slice_pitch", &self.slice_pitch)
            .field("image_count", &self.image_count)
            .field("len", &self.memory.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn planes_are_tightly_packed() {
        let scratch = ScratchImage::initialize_2d(DxgiFormat::R8G8B8A8Unorm, 8, 8, 3).unwrap();
        assert_eq!(scratch.image_count(), 3);
        assert_eq!(scratch.row_pitch(), 32);
        assert_eq!(scratch.slice_pitch(), 256);
        assert_eq!(scratch.pixels().len(), 768);
        assert_eq!(scratch.pixels().as_ptr() as usize % 64, 0);
        assert!(scratch.pixels().iter().all(|&b| b == 0));

        let images: Vec<_> = scratch.images().collect();
        assert_eq!(images.len(), 3);
        for (index, image) in images.iter().enumerate() {
            let pixels = image.pixels.unwrap();
            assert_eq!(pixels.len(), 256);
            assert_eq!(
                pixels.as_ptr() as usize - scratch.pixels().as_ptr() as usize,
                index * 256
            );
        }
        assert!(scratch.image(3).is_none());
    }

    #[test]
    fn volume_metadata_records_depth() {
        let scratch = ScratchImage::initialize_3d(DxgiFormat::Bc1Unorm, 16, 16, 4).unwrap();
        let metadata = scratch.metadata();
        assert!(metadata.is_volumemap());
        assert_eq!(metadata.depth, 4);
        assert_eq!(metadata.array_size, 1);
        assert_eq!(scratch.slice_pitch(), 128);
    }

    #[test]
    fn debug_lists_layout_not_pixels() {
        let scratch = ScratchImage::initialize_2d(DxgiFormat::R8Unorm, 4, 4, 2).unwrap();
        let text = alloc::format!("{scratch:?}");
        assert!(text.starts_with("ScratchImage { metadata: TexMetadata {"));
        assert!(text.contains("row_pitch: 4, slice_pitch: 16, image_count: 2, len: 32"));
    }

    #[test]
    fn empty_allocation_is_rejected() {
        assert_eq!(
            ScratchImage::initialize_2d(DxgiFormat::R8Unorm, 4, 4, 0).err(),
            Some(StandardSwizzleError::InvalidArgument(
                InvalidArgumentKind::InvalidDimensions
            ))
        );
    }
}
