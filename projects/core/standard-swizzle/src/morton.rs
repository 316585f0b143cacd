//! # Axis Masks and Swizzled Index Math
//!
//! A swizzled (Morton / z-order) index is the sum of each coordinate deposited
//! into its axis mask.
//!
//! ## 2D
//!
//! X occupies the odd bits, Y the even bits:
//!
//! ```text
//! bit:   7  6  5  4  3  2  1  0
//!       x3 y3 x2 y2 x1 y1 x0 y0
//! ```
//!
//! ## 3D
//!
//! X, Y and Z repeat with a stride of 3:
//!
//! ```text
//! bit:   8  7  6  5  4  3  2  1  0
//!       z2 y2 x2 z1 y1 x1 z0 y0 x0
//! ```
//!
//! A volume index spans `width * height * depth` units, but destinations are
//! stored as `depth` separate planes of `width * height` units each.
//! [`fold_volume_index`] maps the flat index onto a plane and an offset within it.

use crate::bits::{deposit_bits, extract_bits};

/// X axis mask for 2D surfaces (odd bits).
pub const MASK_2D_X: u32 = 0xAAAA_AAAA;
/// Y axis mask for 2D surfaces (even bits).
pub const MASK_2D_Y: u32 = 0x5555_5555;

/// X axis mask for volumes (bits `0 mod 3`).
pub const MASK_3D_X: u32 = 0x4924_9249;
/// Y axis mask for volumes (bits `1 mod 3`).
pub const MASK_3D_Y: u32 = 0x9249_2492;
/// Z axis mask for volumes (bits `2 mod 3`).
pub const MASK_3D_Z: u32 = 0x2492_4924;

/// Swizzled index of unit `(x, y)` in a 2D surface.
///
/// # Examples
///
/// ```
/// use standard_swizzle::morton::swizzle_index_2d;
///
/// assert_eq!(swizzle_index_2d(1, 0), 2);
/// assert_eq!(swizzle_index_2d(0, 1), 1);
/// assert_eq!(swizzle_index_2d(3, 3), 15);
/// ```
#[inline(always)]
pub fn swizzle_index_2d(x: u32, y: u32) -> u32 {
    deposit_bits(x, MASK_2D_X) + deposit_bits(y, MASK_2D_Y)
}

/// Row-major `(x, y)` of a 2D swizzled index.
#[inline(always)]
pub fn linear_coords_2d(index: u32) -> (u32, u32) {
    (extract_bits(index, MASK_2D_X), extract_bits(index, MASK_2D_Y))
}

/// Flat swizzled index of unit `(x, y, z)` in a volume, before folding into slices.
#[inline(always)]
pub fn swizzle_index_3d(x: u32, y: u32, z: u32) -> u32 {
    deposit_bits(x, MASK_3D_X) + deposit_bits(y, MASK_3D_Y) + deposit_bits(z, MASK_3D_Z)
}

/// Row-major `(x, y, z)` of a flat volume index.
#[inline(always)]
pub fn linear_coords_3d(index: u32) -> (u32, u32, u32) {
    (
        extract_bits(index, MASK_3D_X),
        extract_bits(index, MASK_3D_Y),
        extract_bits(index, MASK_3D_Z),
    )
}

/// Location of a unit within a volume stored as separate planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeSlot {
    /// Destination plane.
    pub slice: usize,
    /// Offset within the plane, in units.
    pub offset: usize,
}

/// Splits a flat volume index into a plane and an offset within that plane.
///
/// `plane_units` is `width * height` in coordinate units and must be non-zero.
#[inline(always)]
pub const fn fold_volume_index(index: usize, plane_units: usize) -> VolumeSlot {
    VolumeSlot {
        slice: index / plane_units,
        offset: index % plane_units,
    }
}

/// Inverse of [`fold_volume_index`].
#[inline(always)]
pub const fn unfold_volume_slot(slot: VolumeSlot, plane_units: usize) -> usize {
    slot.slice * plane_units + slot.offset
}

/// One past the largest 2D swizzled index produced for the given extents.
///
/// Deposit is monotonic and the masks are disjoint, so the largest index comes from
/// the largest coordinates. Extents must be non-zero and fit their masks.
#[inline]
pub fn swizzled_span_2d(width: usize, height: usize) -> u64 {
    deposit_bits((width - 1) as u32, MASK_2D_X) as u64
        + deposit_bits((height - 1) as u32, MASK_2D_Y) as u64
        + 1
}

/// One past the largest flat volume index produced for the given extents.
///
/// Extents must be non-zero and fit their masks.
#[inline]
pub fn swizzled_span_3d(width: usize, height: usize, depth: usize) -> u64 {
    deposit_bits((width - 1) as u32, MASK_3D_X) as u64
        + deposit_bits((height - 1) as u32, MASK_3D_Y) as u64
        + deposit_bits((depth - 1) as u32, MASK_3D_Z) as u64
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn masks_partition_all_bits() {
        assert_eq!(MASK_2D_X & MASK_2D_Y, 0);
        assert_eq!(MASK_2D_X | MASK_2D_Y, u32::MAX);

        assert_eq!(MASK_3D_X & MASK_3D_Y, 0);
        assert_eq!(MASK_3D_X & MASK_3D_Z, 0);
        assert_eq!(MASK_3D_Y & MASK_3D_Z, 0);
        assert_eq!(MASK_3D_X | MASK_3D_Y | MASK_3D_Z, u32::MAX);
    }

    #[test]
    fn masks_follow_axis_order() {
        // X starts at bit 1 in 2D so (1, 0) -> 2.
        assert_eq!(MASK_2D_X & 0b1111, 0b1010);
        assert_eq!(MASK_2D_Y & 0b1111, 0b0101);

        assert_eq!(MASK_3D_X & 0b111_111, 0b001_001);
        assert_eq!(MASK_3D_Y & 0b111_111, 0b010_010);
        assert_eq!(MASK_3D_Z & 0b111_111, 0b100_100);
    }

    #[test]
    fn index_2d_matches_interleave() {
        assert_eq!(swizzle_index_2d(0, 0), 0);
        assert_eq!(swizzle_index_2d(1, 0), 2);
        assert_eq!(swizzle_index_2d(0, 1), 1);
        assert_eq!(swizzle_index_2d(2, 0), 8);
        assert_eq!(swizzle_index_2d(0, 2), 4);
        assert_eq!(swizzle_index_2d(3, 2), 0b1110);
    }

    #[test]
    fn index_3d_matches_interleave() {
        assert_eq!(swizzle_index_3d(1, 0, 0), 1);
        assert_eq!(swizzle_index_3d(0, 1, 0), 2);
        assert_eq!(swizzle_index_3d(0, 0, 1), 4);
        assert_eq!(swizzle_index_3d(2, 0, 0), 8);
        assert_eq!(swizzle_index_3d(3, 3, 3), 63);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(4, 4)]
    #[case(16, 16)]
    #[case(256, 256)]
    #[case(2, 4)]
    #[case(8, 16)]
    fn forward_map_is_bijection_for_dense_extents(#[case] width: u32, #[case] height: u32) {
        let units = (width * height) as usize;
        let mut seen = vec![false; units];

        for y in 0..height {
            for x in 0..width {
                let index = swizzle_index_2d(x, y) as usize;
                assert!(index < units, "index {index} out of range for {width}x{height}");
                assert!(!seen[index], "collision at {index} for ({x}, {y})");
                seen[index] = true;

                assert_eq!(linear_coords_2d(index as u32), (x, y));
            }
        }

        assert!(seen.iter().all(|&s| s));
        assert_eq!(swizzled_span_2d(width as usize, height as usize), units as u64);
    }

    #[rstest]
    #[case(4, 2)]
    #[case(3, 3)]
    #[case(5, 8)]
    fn span_exceeds_units_for_sparse_extents(#[case] width: usize, #[case] height: usize) {
        assert!(swizzled_span_2d(width, height) > (width * height) as u64);
    }

    #[test]
    fn fold_4x4x4_covers_every_slot_once() {
        const EXTENT: u32 = 4;
        let plane_units = (EXTENT * EXTENT) as usize;
        let mut seen = HashSet::new();

        for z in 0..EXTENT {
            for y in 0..EXTENT {
                for x in 0..EXTENT {
                    let slot = fold_volume_index(swizzle_index_3d(x, y, z) as usize, plane_units);
                    assert!(slot.slice < EXTENT as usize);
                    assert!(slot.offset < plane_units);
                    assert!(seen.insert(slot), "collision at {slot:?} for ({x}, {y}, {z})");
                }
            }
        }

        assert_eq!(seen.len(), (EXTENT * EXTENT * EXTENT) as usize);
    }

    #[rstest]
    #[case(0, 16, VolumeSlot { slice: 0, offset: 0 })]
    #[case(15, 16, VolumeSlot { slice: 0, offset: 15 })]
    #[case(16, 16, VolumeSlot { slice: 1, offset: 0 })]
    #[case(63, 16, VolumeSlot { slice: 3, offset: 15 })]
    #[case(7, 1, VolumeSlot { slice: 7, offset: 0 })]
    fn fold_splits_on_plane_boundary(
        #[case] index: usize,
        #[case] plane_units: usize,
        #[case] expected: VolumeSlot,
    ) {
        let slot = fold_volume_index(index, plane_units);
        assert_eq!(slot, expected);
        assert_eq!(unfold_volume_slot(slot, plane_units), index);
    }

    #[test]
    fn coords_3d_invert_index() {
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    assert_eq!(linear_coords_3d(swizzle_index_3d(x, y, z)), (x, y, z));
                }
            }
        }
    }

    #[rstest]
    #[case(4, 4, 4, 64)]
    #[case(8, 8, 8, 512)]
    #[case(2, 2, 1, 4)]
    #[case(1, 1, 1, 1)]
    fn span_3d_matches_units_for_cubes(
        #[case] width: usize,
        #[case] height: usize,
        #[case] depth: usize,
        #[case] expected: u64,
    ) {
        assert_eq!(swizzled_span_3d(width, height, depth), expected);
    }
}
