use super::{check_row_pitch, row_major_pitch, PlaneMut, PlaneRef, SwizzleDirection};
use crate::bits::deposit_bits;
use crate::error::SwizzleError;
use crate::layout::SurfaceLayout;
use crate::morton::{linear_coords_2d, MASK_2D_X, MASK_2D_Y};
use core::ptr::copy_nonoverlapping;
use multiversion::multiversion;

/// Converts one 2D plane between row-major and swizzled layouts.
///
/// Nothing is written unless every check passes.
///
/// # Errors
///
/// - [`SwizzleError::DimensionTooLarge`] / [`SwizzleError::InvalidDimensions`] from
///   [`SurfaceLayout::check_plane`].
/// - [`SwizzleError::NullBuffer`] with `slice: 0` if either pointer is null.
/// - [`SwizzleError::RowPitchTooSmall`] if the row-major side's pitch cannot hold a row.
///
/// # Safety
///
/// - The row-major plane must be valid for [`SurfaceLayout::linear_len`] bytes at its pitch.
/// - The swizzled plane must be valid for [`SurfaceLayout::swizzled_len`] bytes.
/// - The planes must not overlap.
pub unsafe fn transform_plane(
    src: PlaneRef,
    dst: PlaneMut,
    layout: &SurfaceLayout,
    direction: SwizzleDirection,
) -> Result<(), SwizzleError> {
    layout.check_plane()?;
    transform_slice(src, dst, layout, direction, 0)
}

/// Checks and transforms a single slice of a validated layout.
///
/// # Safety
///
/// Same as [`transform_plane`]; `layout` must already pass [`SurfaceLayout::check_plane`].
pub(crate) unsafe fn transform_slice(
    src: PlaneRef,
    dst: PlaneMut,
    layout: &SurfaceLayout,
    direction: SwizzleDirection,
    slice: usize,
) -> Result<(), SwizzleError> {
    if src.pixels.is_null() || dst.pixels.is_null() {
        return Err(SwizzleError::NullBuffer { slice });
    }

    let row_pitch = row_major_pitch(&src, &dst, direction);
    check_row_pitch(layout, row_pitch, slice)?;

    match direction {
        SwizzleDirection::Swizzle => swizzle_plane(
            src.pixels,
            row_pitch,
            dst.pixels,
            layout.width,
            layout.height,
            layout.bytes_per_unit,
        ),
        SwizzleDirection::Deswizzle => deswizzle_plane(
            src.pixels,
            dst.pixels,
            row_pitch,
            layout.width,
            layout.height,
            layout.bytes_per_unit,
        ),
    }
    Ok(())
}

/// Row-major to swizzled.
///
/// # Safety
///
/// See [`transform_plane`].
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)]
pub(crate) unsafe fn swizzle_plane(
    src: *const u8,
    src_row_pitch: usize,
    dst: *mut u8,
    width: usize,
    height: usize,
    bytes_per_unit: usize,
) {
    unsafe {
        for y in 0..height {
            let row = src.add(y * src_row_pitch);
            let y_bits = deposit_bits(y as u32, MASK_2D_Y) as usize;
            for x in 0..width {
                let index = deposit_bits(x as u32, MASK_2D_X) as usize + y_bits;
                copy_nonoverlapping(
                    row.add(x * bytes_per_unit),
                    dst.add(index * bytes_per_unit),
                    bytes_per_unit,
                );
            }
        }
    }
}

/// Swizzled to row-major.
///
/// # Safety
///
/// See [`transform_plane`].
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)]
pub(crate) unsafe fn deswizzle_plane(
    src: *const u8,
    dst: *mut u8,
    dst_row_pitch: usize,
    width: usize,
    height: usize,
    bytes_per_unit: usize,
) {
    unsafe {
        let mut unit = src;
        for index in 0..width * height {
            let (x, y) = linear_coords_2d(index as u32);
            copy_nonoverlapping(
                unit,
                dst.add(y as usize * dst_row_pitch + x as usize * bytes_per_unit),
                bytes_per_unit,
            );
            unit = unit.add(bytes_per_unit);
        }
    }
}
