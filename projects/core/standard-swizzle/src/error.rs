//! Error types for the raw swizzle transforms.

use thiserror::Error;

/// Why a pixel format cannot be swizzled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRejection {
    /// The format is not a recognised format.
    Unknown,
    /// The format has no concrete type (e.g. `R8G8B8A8_TYPELESS`).
    Typeless,
    /// Planar formats store luma and chroma in separate planes.
    Planar,
    /// Palettized formats store indices into a palette.
    Palettized,
    /// A texel (or block) does not occupy a whole number of bytes.
    SubByte,
    /// The format cannot be used in a volume texture.
    VolumeIncompatible,
}

/// An axis of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal, in coordinate units.
    X,
    /// Vertical, in coordinate units.
    Y,
    /// Depth slices.
    Z,
}

/// Errors that can occur when validating or running a swizzle transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwizzleError {
    /// The pixel format cannot be swizzled.
    #[error("Unsupported pixel format: {0:?}")]
    UnsupportedFormat(FormatRejection),

    /// A source or destination pixel pointer was null.
    #[error("Null pixel buffer for slice {slice}.")]
    NullBuffer {
        /// Index of the slice whose buffer was missing.
        slice: usize,
    },

    /// An extent does not fit the bits its axis mask provides.
    #[error("{axis:?} extent of {extent} units exceeds the maximum of {max} for the axis mask.")]
    DimensionTooLarge {
        /// The offending axis.
        axis: Axis,
        /// The extent in coordinate units.
        extent: usize,
        /// The largest extent the mask can address.
        max: u64,
    },

    /// The extents are zero, or their z-order span does not match the number of units.
    ///
    /// The span matches only for power-of-two extents whose interleave is dense.
    #[error("Dimensions {width}x{height}x{depth} (in coordinate units) cannot be laid out in z-order.")]
    InvalidDimensions {
        /// Width in coordinate units.
        width: usize,
        /// Height in coordinate units.
        height: usize,
        /// Depth in slices.
        depth: usize,
    },

    /// No slices were provided, or source and destination slice counts differ.
    #[error("Slice count mismatch: {source_slices} source slice(s), {destination_slices} destination slice(s).")]
    SliceCountMismatch {
        /// Number of source slices.
        source_slices: usize,
        /// Number of destination slices.
        destination_slices: usize,
    },

    /// The row pitch of a row-major plane is smaller than one row of units.
    #[error("Row pitch of {row_pitch} bytes for slice {slice} is below the minimum of {min} bytes.")]
    RowPitchTooSmall {
        /// Index of the offending slice.
        slice: usize,
        /// The supplied row pitch.
        row_pitch: usize,
        /// The minimum row pitch.
        min: usize,
    },

    /// The slices of a volume do not share one row pitch.
    #[error("Row pitch of slice {slice} is {actual} bytes, but slice 0 uses {expected} bytes.")]
    NonUniformRowPitch {
        /// Index of the offending slice.
        slice: usize,
        /// Row pitch of slice 0.
        expected: usize,
        /// Row pitch of the offending slice.
        actual: usize,
    },
}
