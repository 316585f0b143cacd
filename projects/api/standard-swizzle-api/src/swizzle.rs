//! The allocating swizzle entry points.
//!
//! Each function validates everything it can before allocating its result, so a
//! rejected call never produces a partially written [`ScratchImage`].

use crate::error::{InvalidArgumentKind, StandardSwizzleError};
use crate::image::Image;
use crate::metadata::TexMetadata;
use crate::scratch::ScratchImage;
use alloc::vec::Vec;
use log::{debug, trace};
use standard_swizzle::format::{check_format, check_volume_format};
use standard_swizzle::{
    transform_array, transform_plane, transform_volume, PixelFormat, PlaneMut, PlaneRef,
    SurfaceLayout, SwizzleDirection,
};

/// Converts a single 2D image to or from the standard swizzle layout.
///
/// Returns a new image with the same format and extents, tightly packed.
///
/// # Examples
///
/// ```
/// use standard_swizzle_api::{standard_swizzle, DxgiFormat, Image, SwizzleDirection};
///
/// // 4x4 texels, each holding its row-major index.
/// let pixels: Vec<u8> = (0..16u32).flat_map(u32::to_le_bytes).collect();
/// let image = Image::new(DxgiFormat::R32Uint, 4, 4, Some(&pixels));
///
/// let swizzled = standard_swizzle(&image, SwizzleDirection::Swizzle)?;
/// // Texel (1, 0) lands at swizzled index 2.
/// assert_eq!(&swizzled.pixels()[8..12], &1u32.to_le_bytes());
/// # Ok::<(), standard_swizzle_api::StandardSwizzleError>(())
/// ```
pub fn standard_swizzle<F: PixelFormat>(
    image: &Image<'_, F>,
    direction: SwizzleDirection,
) -> Result<ScratchImage<F>, StandardSwizzleError> {
    swizzle_2d_inner(image, direction)
        .inspect_err(|error| debug!("standard_swizzle rejected {image:?}: {error}"))
}

/// Converts the slices of a 2D texture array, each independently.
///
/// `metadata` describes the whole resource; `images` are its top-level slices, at
/// most `metadata.array_size` of them.
pub fn standard_swizzle_array<F: PixelFormat>(
    images: &[Image<'_, F>],
    metadata: &TexMetadata<F>,
    direction: SwizzleDirection,
) -> Result<ScratchImage<F>, StandardSwizzleError> {
    swizzle_array_inner(images, metadata, direction).inspect_err(|error| {
        debug!(
            "standard_swizzle_array rejected {} image(s) for {metadata:?}: {error}",
            images.len()
        )
    })
}

/// Converts a volume, given as `depth` row-major (or swizzled) slices.
///
/// The swizzled index spans the whole volume and is folded back into per-slice
/// planes, so every destination slice can receive texels from every source slice.
pub fn standard_swizzle_3d<F: PixelFormat>(
    images: &[Image<'_, F>],
    metadata: &TexMetadata<F>,
    direction: SwizzleDirection,
) -> Result<ScratchImage<F>, StandardSwizzleError> {
    swizzle_3d_inner(images, metadata, direction).inspect_err(|error| {
        debug!(
            "standard_swizzle_3d rejected {} slice(s) for {metadata:?}: {error}",
            images.len()
        )
    })
}

fn swizzle_2d_inner<F: PixelFormat>(
    image: &Image<'_, F>,
    direction: SwizzleDirection,
) -> Result<ScratchImage<F>, StandardSwizzleError> {
    let layout = SurfaceLayout::new(image.format, image.width, image.height)?;
    layout.check_plane()?;
    let pixels = check_source(image, &layout, direction, 0)?;

    trace!(
        "{direction:?} {}x{} units of {} bytes ({:?})",
        layout.width, layout.height, layout.bytes_per_unit, image.format
    );

    let mut result = ScratchImage::initialize_2d(image.format, image.width, image.height, 1)?;
    let dst = PlaneMut::new(result.plane_ptr_mut(0), result.row_pitch());
    // SAFETY: the source length was checked above and the destination was sized
    // for this layout.
    unsafe {
        transform_plane(
            PlaneRef::from_slice(pixels, image.row_pitch),
            dst,
            &layout,
            direction,
        )?
    };
    Ok(result)
}

fn swizzle_array_inner<F: PixelFormat>(
    images: &[Image<'_, F>],
    metadata: &TexMetadata<F>,
    direction: SwizzleDirection,
) -> Result<ScratchImage<F>, StandardSwizzleError> {
    if images.is_empty() {
        return Err(InvalidArgumentKind::NoImages.into());
    }
    if metadata.is_volumemap() {
        return Err(InvalidArgumentKind::VolumeMetadata.into());
    }
    if images.len() > metadata.array_size {
        return Err(InvalidArgumentKind::TooManySlices.into());
    }
    check_format(metadata.format)?;
    check_slices_match(images, metadata)?;

    let layout = SurfaceLayout::new(metadata.format, metadata.width, metadata.height)?;
    layout.check_plane()?;

    let mut src = Vec::with_capacity(images.len());
    for (slice, image) in images.iter().enumerate() {
        let pixels = check_source(image, &layout, direction, slice)?;
        src.push(PlaneRef::from_slice(pixels, image.row_pitch));
    }

    trace!(
        "{direction:?} {} slice(s) of {}x{} units ({:?})",
        images.len(),
        layout.width,
        layout.height,
        metadata.format
    );

    let mut result =
        ScratchImage::initialize_2d(metadata.format, metadata.width, metadata.height, images.len())?;
    let dst = destination_planes(&mut result);
    // SAFETY: every source length was checked above and each destination plane was
    // sized for this layout.
    unsafe { transform_array(&src, &dst, &layout, direction)? };
    Ok(result)
}

fn swizzle_3d_inner<F: PixelFormat>(
    images: &[Image<'_, F>],
    metadata: &TexMetadata<F>,
    direction: SwizzleDirection,
) -> Result<ScratchImage<F>, StandardSwizzleError> {
    if images.is_empty() {
        return Err(InvalidArgumentKind::NoImages.into());
    }
    if images.len() > metadata.depth {
        return Err(InvalidArgumentKind::TooManySlices.into());
    }
    if metadata.array_size > 1 {
        return Err(InvalidArgumentKind::ArrayVolume.into());
    }
    if metadata.mip_levels > 1 {
        return Err(InvalidArgumentKind::MipmappedVolume.into());
    }
    check_volume_format(metadata.format)?;
    check_slices_match(images, metadata)?;

    let depth = images.len();
    let layout = SurfaceLayout::new(metadata.format, metadata.width, metadata.height)?;
    layout.check_volume(depth)?;

    let mut src = Vec::with_capacity(depth);
    for (slice, image) in images.iter().enumerate() {
        let pixels = check_source(image, &layout, direction, slice)?;
        if direction == SwizzleDirection::Swizzle && image.row_pitch != images[0].row_pitch {
            return Err(InvalidArgumentKind::NonUniformRowPitch.into());
        }
        src.push(PlaneRef::from_slice(pixels, image.row_pitch));
    }

    trace!(
        "{direction:?} {}x{}x{depth} volume units ({:?})",
        layout.width,
        layout.height,
        metadata.format
    );

    let mut result =
        ScratchImage::initialize_3d(metadata.format, metadata.width, metadata.height, depth)?;
    let dst = destination_planes(&mut result);
    // SAFETY: every source length was checked above and each destination slice was
    // sized for this layout.
    unsafe { transform_volume(&src, &dst, &layout, direction)? };
    Ok(result)
}

/// The first image must match the metadata, and every other image the first.
fn check_slices_match<F: PixelFormat>(
    images: &[Image<'_, F>],
    metadata: &TexMetadata<F>,
) -> Result<(), StandardSwizzleError> {
    let base = &images[0];
    if base.format != metadata.format
        || base.width != metadata.width
        || base.height != metadata.height
    {
        return Err(InvalidArgumentKind::BaseMismatch.into());
    }

    let mismatched = images[1..].iter().any(|image| {
        image.format != base.format || image.width != base.width || image.height != base.height
    });
    if mismatched {
        return Err(InvalidArgumentKind::SliceMismatch.into());
    }
    Ok(())
}

/// Returns the pixels of `image` after checking they can feed `direction`.
///
/// Row-major sources need a usable row pitch and `linear_len` bytes; swizzled sources
/// are tightly packed and need `swizzled_len` bytes.
fn check_source<'a, F: PixelFormat>(
    image: &Image<'a, F>,
    layout: &SurfaceLayout,
    direction: SwizzleDirection,
    slice: usize,
) -> Result<&'a [u8], StandardSwizzleError> {
    let pixels = image
        .pixels
        .ok_or(StandardSwizzleError::NullBuffer { slice })?;

    let required = match direction {
        SwizzleDirection::Swizzle => {
            if image.row_pitch < layout.unpadded_row_bytes() {
                return Err(InvalidArgumentKind::RowPitchTooSmall.into());
            }
            layout
                .linear_len(image.row_pitch)
                .ok_or(InvalidArgumentKind::BufferTooSmall)?
        }
        SwizzleDirection::Deswizzle => layout.swizzled_len(),
    };

    if pixels.len() < required {
        return Err(InvalidArgumentKind::BufferTooSmall.into());
    }
    Ok(pixels)
}

fn destination_planes<F: PixelFormat>(result: &mut ScratchImage<F>) -> Vec<PlaneMut> {
    let row_pitch = result.row_pitch();
    (0..result.image_count())
        .map(|index| PlaneMut::new(result.plane_ptr_mut(index), row_pitch))
        .collect()
}
