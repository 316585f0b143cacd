//! Error types for the allocating swizzle API.

use standard_swizzle::allocate::AllocateError;
use standard_swizzle::{Axis, FormatRejection, SwizzleError};
use thiserror::Error;

/// Errors returned by [`standard_swizzle`](crate::standard_swizzle),
/// [`standard_swizzle_array`](crate::standard_swizzle_array) and
/// [`standard_swizzle_3d`](crate::standard_swizzle_3d).
///
/// Every error is detected before the destination is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandardSwizzleError {
    /// The images or metadata are malformed or inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(InvalidArgumentKind),

    /// The pixel format cannot be swizzled.
    #[error("Unsupported pixel format: {0:?}")]
    UnsupportedFormat(FormatRejection),

    /// An image has no pixel data.
    #[error("Image {slice} has no pixel data.")]
    NullBuffer {
        /// Index of the image without pixels.
        slice: usize,
    },

    /// An extent does not fit the swizzle pattern's bits for its axis.
    #[error("{axis:?} extent of {extent} units exceeds the maximum of {max}.")]
    DimensionTooLarge {
        /// The offending axis.
        axis: Axis,
        /// The extent in coordinate units.
        extent: usize,
        /// The largest extent the axis can address.
        max: u64,
    },

    /// The destination image could not be allocated.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),
}

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgumentKind {
    /// No images were provided.
    #[error("no images were provided")]
    NoImages,
    /// More images were provided than the metadata declares.
    #[error("more images were provided than the metadata declares")]
    TooManySlices,
    /// Array transforms cannot take volume metadata.
    #[error("volume metadata passed to an array transform")]
    VolumeMetadata,
    /// Volume transforms cannot take an array of volumes.
    #[error("volume metadata declares more than one array element")]
    ArrayVolume,
    /// Volume transforms only handle the top mip level.
    #[error("volume metadata declares more than one mip level")]
    MipmappedVolume,
    /// The first image does not match the metadata's format or extents.
    #[error("first image does not match the metadata")]
    BaseMismatch,
    /// An image does not match the first image's format or extents.
    #[error("image does not match the first image")]
    SliceMismatch,
    /// The extents are zero or cannot be laid out in z-order.
    #[error("dimensions cannot be laid out in z-order")]
    InvalidDimensions,
    /// A row-major image's row pitch is smaller than one row.
    #[error("row pitch is smaller than one row")]
    RowPitchTooSmall,
    /// The row-major slices of a volume have different row pitches.
    #[error("volume slices have different row pitches")]
    NonUniformRowPitch,
    /// An image's pixel buffer is shorter than its extents require.
    #[error("pixel buffer is too small for the image extents")]
    BufferTooSmall,
}

impl From<InvalidArgumentKind> for StandardSwizzleError {
    fn from(kind: InvalidArgumentKind) -> Self {
        Self::InvalidArgument(kind)
    }
}

impl From<SwizzleError> for StandardSwizzleError {
    fn from(error: SwizzleError) -> Self {
        match error {
            SwizzleError::UnsupportedFormat(rejection) => Self::UnsupportedFormat(rejection),
            SwizzleError::NullBuffer { slice } => Self::NullBuffer { slice },
            SwizzleError::DimensionTooLarge { axis, extent, max } => {
                Self::DimensionTooLarge { axis, extent, max }
            }
            SwizzleError::InvalidDimensions { .. } => InvalidArgumentKind::InvalidDimensions.into(),
            SwizzleError::SliceCountMismatch { source_slices: 0, .. } => {
                InvalidArgumentKind::NoImages.into()
            }
            SwizzleError::SliceCountMismatch { .. } => InvalidArgumentKind::SliceMismatch.into(),
            SwizzleError::RowPitchTooSmall { .. } => InvalidArgumentKind::RowPitchTooSmall.into(),
            SwizzleError::NonUniformRowPitch { .. } => {
                InvalidArgumentKind::NonUniformRowPitch.into()
            }
        }
    }
}
