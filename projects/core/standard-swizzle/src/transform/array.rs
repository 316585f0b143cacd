use super::plane::transform_slice;
use super::{PlaneMut, PlaneRef, SwizzleDirection};
use crate::error::SwizzleError;
use crate::layout::SurfaceLayout;

/// Converts a sequence of same-sized 2D planes, slice by slice.
///
/// Each slice is transformed exactly like [`transform_plane`](super::transform_plane),
/// using its own row pitch. Slices never address each other.
///
/// # Errors
///
/// - [`SwizzleError::SliceCountMismatch`] if `src` is empty or the slice counts differ.
/// - Any error of [`SurfaceLayout::check_plane`].
/// - [`SwizzleError::NullBuffer`] / [`SwizzleError::RowPitchTooSmall`] for the first
///   failing slice. Slices before it have already been written and stay written.
///
/// # Safety
///
/// Every slice pair must satisfy the requirements of
/// [`transform_plane`](super::transform_plane).
pub unsafe fn transform_array(
    src: &[PlaneRef],
    dst: &[PlaneMut],
    layout: &SurfaceLayout,
    direction: SwizzleDirection,
) -> Result<(), SwizzleError> {
    if src.is_empty() || src.len() != dst.len() {
        return Err(SwizzleError::SliceCountMismatch {
            source_slices: src.len(),
            destination_slices: dst.len(),
        });
    }

    layout.check_plane()?;
    for (slice, (src, dst)) in src.iter().zip(dst).enumerate() {
        transform_slice(*src, *dst, layout, direction, slice)?;
    }
    Ok(())
}
