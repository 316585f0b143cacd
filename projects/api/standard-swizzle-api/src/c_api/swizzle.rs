//! C exports for the swizzle functions and their results.

use super::error::{SswErrorCode, SswResult};
use super::{SswImage, SswTexMetadata};
use crate::error::StandardSwizzleError;
use crate::image::Image;
use crate::metadata::TexMetadata;
use crate::scratch::ScratchImage;
use crate::swizzle::{standard_swizzle, standard_swizzle_3d, standard_swizzle_array};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ptr;
use standard_swizzle::SwizzleDirection;

/// Opaque handle to an image produced by a swizzle function.
#[repr(C)]
pub struct SswScratchImage {
    _private: [u8; 0],
}

type SwizzleMany =
    fn(&[Image<'_>], &TexMetadata, SwizzleDirection) -> Result<ScratchImage, StandardSwizzleError>;

/// Swizzle or deswizzle a single 2D image.
///
/// On success, `*out` receives a new [`SswScratchImage`] which must be freed with
/// [`ssw_free_scratch_image`].
///
/// # Safety
/// - `image` must point to a valid [`SswImage`] whose `pixels` (if non-null) are
///   readable for `slice_pitch` bytes.
/// - `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_standard_swizzle(
    image: *const SswImage,
    to_swizzle: bool,
    out: *mut *mut SswScratchImage,
) -> SswResult {
    if image.is_null() || out.is_null() {
        return SswResult::from_error_code(SswErrorCode::NullArgumentPointer);
    }

    let image = unsafe { (*image).as_image() };
    let result = standard_swizzle(&image, to_swizzle.into());
    unsafe { store_result(result, out) }
}

/// Swizzle or deswizzle the slices of a 2D texture array.
///
/// # Safety
/// - `images` must point to `image_count` valid [`SswImage`]s (it may be null if
///   `image_count` is 0).
/// - `metadata` must point to a valid [`SswTexMetadata`].
/// - `out` must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_standard_swizzle_array(
    images: *const SswImage,
    image_count: usize,
    metadata: *const SswTexMetadata,
    to_swizzle: bool,
    out: *mut *mut SswScratchImage,
) -> SswResult {
    unsafe {
        swizzle_many(
            images,
            image_count,
            metadata,
            to_swizzle,
            out,
            standard_swizzle_array,
        )
    }
}

/// Swizzle or deswizzle a volume given as `image_count` slices.
///
/// # Safety
/// Same requirements as [`ssw_standard_swizzle_array`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_standard_swizzle_3d(
    images: *const SswImage,
    image_count: usize,
    metadata: *const SswTexMetadata,
    to_swizzle: bool,
    out: *mut *mut SswScratchImage,
) -> SswResult {
    unsafe {
        swizzle_many(
            images,
            image_count,
            metadata,
            to_swizzle,
            out,
            standard_swizzle_3d,
        )
    }
}

unsafe fn swizzle_many(
    images: *const SswImage,
    image_count: usize,
    metadata: *const SswTexMetadata,
    to_swizzle: bool,
    out: *mut *mut SswScratchImage,
    swizzle: SwizzleMany,
) -> SswResult {
    if metadata.is_null() || out.is_null() || (images.is_null() && image_count > 0) {
        return SswResult::from_error_code(SswErrorCode::NullArgumentPointer);
    }

    let Some(metadata) = (unsafe { *metadata }).to_metadata() else {
        return SswResult::from_error_code(SswErrorCode::InvalidArgument);
    };

    let images: Vec<Image<'_>> = if image_count == 0 {
        Vec::new()
    } else {
        unsafe { core::slice::from_raw_parts(images, image_count) }
            .iter()
            .map(|image| unsafe { image.as_image() })
            .collect()
    };

    let result = swizzle(&images, &metadata, to_swizzle.into());
    unsafe { store_result(result, out) }
}

unsafe fn store_result(
    result: Result<ScratchImage, StandardSwizzleError>,
    out: *mut *mut SswScratchImage,
) -> SswResult {
    match result {
        Ok(scratch) => {
            unsafe { *out = Box::into_raw(Box::new(scratch)) as *mut SswScratchImage };
            SswResult::success()
        }
        Err(error) => {
            unsafe { *out = ptr::null_mut() };
            error.into()
        }
    }
}

unsafe fn scratch_ref<'a>(image: *const SswScratchImage) -> Option<&'a ScratchImage> {
    if image.is_null() {
        None
    } else {
        Some(unsafe { &*(image as *const ScratchImage) })
    }
}

/// Pointer to the pixel data of a scratch image, or null if `image` is null.
///
/// The data is valid until the image is freed.
///
/// # Safety
/// `image` must be null or a live pointer returned by a swizzle function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_scratch_image_pixels(image: *const SswScratchImage) -> *const u8 {
    unsafe { scratch_ref(image) }.map_or(ptr::null(), |image| image.pixels().as_ptr())
}

/// Length in bytes of the pixel data of a scratch image, or 0 if `image` is null.
///
/// # Safety
/// `image` must be null or a live pointer returned by a swizzle function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_scratch_image_len(image: *const SswScratchImage) -> usize {
    unsafe { scratch_ref(image) }.map_or(0, |image| image.pixels().len())
}

/// Row pitch of each plane of a scratch image, or 0 if `image` is null.
///
/// # Safety
/// `image` must be null or a live pointer returned by a swizzle function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_scratch_image_row_pitch(image: *const SswScratchImage) -> usize {
    unsafe { scratch_ref(image) }.map_or(0, ScratchImage::row_pitch)
}

/// Size of each plane of a scratch image, or 0 if `image` is null.
///
/// # Safety
/// `image` must be null or a live pointer returned by a swizzle function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_scratch_image_slice_pitch(image: *const SswScratchImage) -> usize {
    unsafe { scratch_ref(image) }.map_or(0, ScratchImage::slice_pitch)
}

/// Number of planes in a scratch image, or 0 if `image` is null.
///
/// # Safety
/// `image` must be null or a live pointer returned by a swizzle function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_scratch_image_count(image: *const SswScratchImage) -> usize {
    unsafe { scratch_ref(image) }.map_or(0, ScratchImage::image_count)
}

/// Free a scratch image.
///
/// # Safety
/// - `image` must be null or a pointer returned by a swizzle function.
/// - `image` must not have been freed already.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_free_scratch_image(image: *mut SswScratchImage) {
    if !image.is_null() {
        unsafe {
            drop(Box::from_raw(image as *mut ScratchImage));
        }
    }
}
