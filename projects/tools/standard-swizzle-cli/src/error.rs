use standard_swizzle_api::StandardSwizzleError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Memory mapping failed: {0}")]
    MmapError(String),
    #[error("Path is not valid UTF-8: {0}")]
    InvalidPath(String),
    #[error("Not a DDS file, or the header is truncated.")]
    NotADds,
    #[error("Unsupported DDS pixel format ({0:#010x}).")]
    UnsupportedFormat(u32),
    #[error("Unsupported DDS resource dimension {0}.")]
    UnsupportedDimension(u32),
    #[error("DDS file has {0} mip levels; only single-level textures can be swizzled.")]
    Mipmapped(u32),
    #[error("Cube maps cannot be swizzled.")]
    Cubemap,
    #[error("Surface data is truncated: expected {expected} bytes, found {actual}.")]
    TruncatedSurface { expected: usize, actual: usize },
    #[error(transparent)]
    Swizzle(#[from] StandardSwizzleError),
}
