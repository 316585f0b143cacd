use super::{check_row_pitch, row_major_pitch, PlaneMut, PlaneRef, SwizzleDirection};
use crate::bits::deposit_bits;
use crate::error::SwizzleError;
use crate::layout::SurfaceLayout;
use crate::morton::{fold_volume_index, linear_coords_3d, MASK_3D_X, MASK_3D_Y, MASK_3D_Z};
use core::ptr::copy_nonoverlapping;
use multiversion::multiversion;

/// Converts a volume between row-major slices and swizzled slices.
///
/// The swizzled index of a volume spans all of its units, but each side is stored as
/// `depth` separate planes of `width * height` units. A unit of any source slice may
/// land in any destination slice, so all destination pointers and the row-major row
/// pitch are checked before the first write. Source pointers are checked when their
/// slice is reached.
///
/// # Errors
///
/// - [`SwizzleError::SliceCountMismatch`] if `src` is empty or the slice counts differ.
/// - Any error of [`SurfaceLayout::check_volume`].
/// - [`SwizzleError::NullBuffer`] for the first null destination, before any write.
/// - [`SwizzleError::RowPitchTooSmall`] / [`SwizzleError::NonUniformRowPitch`] if the
///   row-major slices do not share one usable pitch, before any write.
/// - [`SwizzleError::NullBuffer`] for a null source slice when it is reached.
///
/// # Safety
///
/// - Every row-major slice must be valid for [`SurfaceLayout::linear_len`] bytes.
/// - Every swizzled slice must be valid for [`SurfaceLayout::swizzled_len`] bytes.
/// - No source slice may overlap any destination slice.
pub unsafe fn transform_volume(
    src: &[PlaneRef],
    dst: &[PlaneMut],
    layout: &SurfaceLayout,
    direction: SwizzleDirection,
) -> Result<(), SwizzleError> {
    let depth = src.len();
    if depth == 0 || depth != dst.len() {
        return Err(SwizzleError::SliceCountMismatch {
            source_slices: depth,
            destination_slices: dst.len(),
        });
    }

    layout.check_volume(depth)?;

    if let Some(slice) = dst.iter().position(|plane| plane.pixels.is_null()) {
        return Err(SwizzleError::NullBuffer { slice });
    }

    let row_pitch = row_major_pitch(&src[0], &dst[0], direction);
    check_row_pitch(layout, row_pitch, 0)?;
    for (slice, (src, dst)) in src.iter().zip(dst).enumerate().skip(1) {
        let actual = row_major_pitch(src, dst, direction);
        if actual != row_pitch {
            return Err(SwizzleError::NonUniformRowPitch {
                slice,
                expected: row_pitch,
                actual,
            });
        }
    }

    for (z, plane) in src.iter().enumerate() {
        if plane.pixels.is_null() {
            return Err(SwizzleError::NullBuffer { slice: z });
        }

        match direction {
            SwizzleDirection::Swizzle => {
                swizzle_volume_slice(plane.pixels, row_pitch, z, dst, layout)
            }
            SwizzleDirection::Deswizzle => {
                deswizzle_volume_slice(plane.pixels, z, dst, row_pitch, layout)
            }
        }
    }
    Ok(())
}

/// Scatters row-major slice `z` into the swizzled destination slices.
///
/// # Safety
///
/// See [`transform_volume`]; all `dst` pointers must be non-null.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)]
unsafe fn swizzle_volume_slice(
    src: *const u8,
    src_row_pitch: usize,
    z: usize,
    dst: &[PlaneMut],
    layout: &SurfaceLayout,
) {
    unsafe {
        let bytes_per_unit = layout.bytes_per_unit;
        let plane_units = layout.units();
        let z_bits = deposit_bits(z as u32, MASK_3D_Z) as usize;

        for y in 0..layout.height {
            let row = src.add(y * src_row_pitch);
            let yz_bits = deposit_bits(y as u32, MASK_3D_Y) as usize + z_bits;
            for x in 0..layout.width {
                let index = deposit_bits(x as u32, MASK_3D_X) as usize + yz_bits;
                let slot = fold_volume_index(index, plane_units);
                copy_nonoverlapping(
                    row.add(x * bytes_per_unit),
                    dst.get_unchecked(slot.slice)
                        .pixels
                        .add(slot.offset * bytes_per_unit),
                    bytes_per_unit,
                );
            }
        }
    }
}

/// Gathers swizzled slice `z` into the row-major destination slices.
///
/// # Safety
///
/// See [`transform_volume`]; all `dst` pointers must be non-null.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)]
unsafe fn deswizzle_volume_slice(
    src: *const u8,
    z: usize,
    dst: &[PlaneMut],
    dst_row_pitch: usize,
    layout: &SurfaceLayout,
) {
    unsafe {
        let bytes_per_unit = layout.bytes_per_unit;
        let plane_units = layout.units();
        let first = z * plane_units;

        let mut unit = src;
        for index in first..first + plane_units {
            let (x, y, dest_z) = linear_coords_3d(index as u32);
            copy_nonoverlapping(
                unit,
                dst.get_unchecked(dest_z as usize)
                    .pixels
                    .add(y as usize * dst_row_pitch + x as usize * bytes_per_unit),
                bytes_per_unit,
            );
            unit = unit.add(bytes_per_unit);
        }
    }
}
