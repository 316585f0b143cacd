//! Texture metadata describing a whole resource.

use standard_swizzle::{DxgiFormat, PixelFormat};

/// Dimensionality of a texture, using the `D3D11_RESOURCE_DIMENSION` values.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexDimension {
    /// One-dimensional texture.
    Texture1D = 2,
    /// Two-dimensional texture (or cube map).
    Texture2D = 3,
    /// Volume texture.
    Texture3D = 4,
}

impl TexDimension {
    /// Converts a raw `D3D11_RESOURCE_DIMENSION` value.
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            2 => Some(Self::Texture1D),
            3 => Some(Self::Texture2D),
            4 => Some(Self::Texture3D),
            _ => None,
        }
    }
}

/// Shape and format of a texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexMetadata<F: PixelFormat = DxgiFormat> {
    /// Width of the top level, in texels.
    pub width: usize,
    /// Height of the top level, in texels.
    pub height: usize,
    /// Depth of the top level; 1 unless this is a volume.
    pub depth: usize,
    /// Number of array elements.
    pub array_size: usize,
    /// Number of mip levels.
    pub mip_levels: usize,
    /// Pixel format.
    pub format: F,
    /// Dimensionality.
    pub dimension: TexDimension,
}

impl<F: PixelFormat> TexMetadata<F> {
    /// Metadata of a single-mip 2D texture array.
    pub const fn new_2d(format: F, width: usize, height: usize, array_size: usize) -> Self {
        Self {
            width,
            height,
            depth: 1,
            array_size,
            mip_levels: 1,
            format,
            dimension: TexDimension::Texture2D,
        }
    }

    /// Metadata of a single-mip volume.
    pub const fn new_3d(format: F, width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            array_size: 1,
            mip_levels: 1,
            format,
            dimension: TexDimension::Texture3D,
        }
    }

    /// Whether this describes a volume texture.
    pub fn is_volumemap(&self) -> bool {
        self.dimension == TexDimension::Texture3D
    }
}
