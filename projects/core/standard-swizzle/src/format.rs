//! # Pixel Formats
//!
//! The transforms never look at texel contents; they only need to know how many
//! bytes a coordinate unit occupies and whether the format can be swizzled at all.
//! [`PixelFormat`] is the seam that answers those questions, so any format
//! enumeration can drive the transforms.
//!
//! [`DxgiFormat`] is the implementation used by the API and tooling crates.
//!
//! A "unit" is one texel for uncompressed formats, or one 4x4 block for
//! block-compressed formats.

use crate::error::{FormatRejection, SwizzleError};
use core::fmt::Debug;
use derive_enum_all_values::AllValues;

/// Queries the swizzle transforms make about a pixel format.
pub trait PixelFormat: Copy + PartialEq + Debug {
    /// Whether this is a recognised, usable format.
    fn is_valid(&self) -> bool;

    /// Whether texels are stored in fixed-size blocks (BC1-BC7).
    fn is_compressed(&self) -> bool;

    /// Whether the format lacks a concrete channel type.
    fn is_typeless(&self) -> bool;

    /// Whether luma and chroma live in separate planes.
    fn is_planar(&self) -> bool;

    /// Whether texels are indices into a palette.
    fn is_palettized(&self) -> bool;

    /// Whether the format may back a volume texture.
    fn supports_volume(&self) -> bool {
        true
    }

    /// Bits per coordinate unit: per texel, or per block for compressed formats.
    fn bits_per_unit(&self) -> u32;

    /// Edge length of a unit in texels.
    fn block_dimension(&self) -> u32 {
        if self.is_compressed() {
            4
        } else {
            1
        }
    }
}

/// Checks whether a format can be swizzled as a 2D surface.
///
/// Rejection order: unknown, typeless, planar, palettized, sub-byte.
pub fn check_format<F: PixelFormat>(format: F) -> Result<(), SwizzleError> {
    let rejection = if !format.is_valid() {
        FormatRejection::Unknown
    } else if format.is_typeless() {
        FormatRejection::Typeless
    } else if format.is_planar() {
        FormatRejection::Planar
    } else if format.is_palettized() {
        FormatRejection::Palettized
    } else if format.bits_per_unit() < 8 || format.bits_per_unit() % 8 != 0 {
        FormatRejection::SubByte
    } else {
        return Ok(());
    };

    Err(SwizzleError::UnsupportedFormat(rejection))
}

/// Checks whether a format can be swizzled as a volume.
pub fn check_volume_format<F: PixelFormat>(format: F) -> Result<(), SwizzleError> {
    check_format(format)?;
    if !format.supports_volume() {
        return Err(SwizzleError::UnsupportedFormat(
            FormatRejection::VolumeIncompatible,
        ));
    }
    Ok(())
}

/// A subset of `DXGI_FORMAT`, using the DXGI numeric values.
#[allow(missing_docs)]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum DxgiFormat {
    Unknown = 0,
    R32G32B32A32Typeless = 1,
    R32G32B32A32Float = 2,
    R32G32B32A32Uint = 3,
    R32G32B32Float = 6,
    R16G16B16A16Typeless = 9,
    R16G16B16A16Float = 10,
    R16G16B16A16Unorm = 11,
    R32G32Float = 16,
    R10G10B10A2Unorm = 24,
    R8G8B8A8Typeless = 27,
    R8G8B8A8Unorm = 28,
    R8G8B8A8UnormSrgb = 29,
    R8G8B8A8Uint = 30,
    R8G8B8A8Snorm = 31,
    R8G8B8A8Sint = 32,
    R16G16Float = 34,
    D32Float = 40,
    R32Float = 41,
    R32Uint = 42,
    D24UnormS8Uint = 45,
    R8G8Unorm = 49,
    R16Float = 54,
    D16Unorm = 55,
    R16Unorm = 56,
    R8Unorm = 61,
    A8Unorm = 65,
    R1Unorm = 66,
    Bc1Typeless = 70,
    Bc1Unorm = 71,
    Bc1UnormSrgb = 72,
    Bc2Typeless = 73,
    Bc2Unorm = 74,
    Bc2UnormSrgb = 75,
    Bc3Typeless = 76,
    Bc3Unorm = 77,
    Bc3UnormSrgb = 78,
    Bc4Typeless = 79,
    Bc4Unorm = 80,
    Bc4Snorm = 81,
    Bc5Typeless = 82,
    Bc5Unorm = 83,
    Bc5Snorm = 84,
    B5G6R5Unorm = 85,
    B5G5R5A1Unorm = 86,
    B8G8R8A8Unorm = 87,
    B8G8R8X8Unorm = 88,
    B8G8R8A8Typeless = 90,
    B8G8R8A8UnormSrgb = 91,
    Bc6hTypeless = 94,
    Bc6hUf16 = 95,
    Bc6hSf16 = 96,
    Bc7Typeless = 97,
    Bc7Unorm = 98,
    Bc7UnormSrgb = 99,
    Ayuv = 100,
    Nv12 = 103,
    P010 = 104,
    P8 = 113,
    A8P8 = 114,
    B4G4R4A4Unorm = 115,
}

impl DxgiFormat {
    /// Converts a raw `DXGI_FORMAT` value.
    ///
    /// Returns [`None`] for values outside the supported subset.
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| *format as u32 == value)
    }

    /// Whether this is a depth/stencil format.
    pub const fn is_depth_stencil(self) -> bool {
        matches!(self, Self::D32Float | Self::D24UnormS8Uint | Self::D16Unorm)
    }

    /// Whether this lies in the DXGI video range: YUV formats plus the palettized
    /// `P8`/`A8P8` and `B4G4R4A4Unorm`. None of these can back a volume.
    pub const fn is_video_range(self) -> bool {
        matches!(
            self,
            Self::Ayuv | Self::Nv12 | Self::P010 | Self::P8 | Self::A8P8 | Self::B4G4R4A4Unorm
        )
    }
}

impl From<DxgiFormat> for u32 {
    fn from(value: DxgiFormat) -> Self {
        value as u32
    }
}

impl PixelFormat for DxgiFormat {
    fn is_valid(&self) -> bool {
        *self != Self::Unknown
    }

    fn is_compressed(&self) -> bool {
        matches!(*self as u32, 70..=84 | 94..=99)
    }

    fn is_typeless(&self) -> bool {
        matches!(
            self,
            Self::R32G32B32A32Typeless
                | Self::R16G16B16A16Typeless
                | Self::R8G8B8A8Typeless
                | Self::Bc1Typeless
                | Self::Bc2Typeless
                | Self::Bc3Typeless
                | Self::Bc4Typeless
                | Self::Bc5Typeless
                | Self::B8G8R8A8Typeless
                | Self::Bc6hTypeless
                | Self::Bc7Typeless
        )
    }

    fn is_planar(&self) -> bool {
        matches!(self, Self::Nv12 | Self::P010)
    }

    fn is_palettized(&self) -> bool {
        matches!(self, Self::P8 | Self::A8P8)
    }

    fn supports_volume(&self) -> bool {
        !self.is_depth_stencil() && !self.is_video_range()
    }

    fn bits_per_unit(&self) -> u32 {
        use DxgiFormat::*;
        match self {
            Unknown => 0,
            R32G32B32A32Typeless | R32G32B32A32Float | R32G32B32A32Uint => 128,
            R32G32B32Float => 96,
            R16G16B16A16Typeless | R16G16B16A16Float | R16G16B16A16Unorm | R32G32Float => 64,
            R10G10B10A2Unorm | R8G8B8A8Typeless | R8G8B8A8Unorm | R8G8B8A8UnormSrgb
            | R8G8B8A8Uint | R8G8B8A8Snorm | R8G8B8A8Sint | R16G16Float | D32Float | R32Float
            | R32Uint | D24UnormS8Uint | B8G8R8A8Unorm | B8G8R8X8Unorm | B8G8R8A8Typeless
            | B8G8R8A8UnormSrgb | Ayuv => 32,
            P010 => 24,
            R8G8Unorm | R16Float | D16Unorm | R16Unorm | B5G6R5Unorm | B5G5R5A1Unorm | A8P8
            | B4G4R4A4Unorm => 16,
            Nv12 => 12,
            R8Unorm | A8Unorm | P8 => 8,
            R1Unorm => 1,
            Bc1Typeless | Bc1Unorm | Bc1UnormSrgb | Bc4Typeless | Bc4Unorm | Bc4Snorm => 64,
            Bc2Typeless | Bc2Unorm | Bc2UnormSrgb | Bc3Typeless | Bc3Unorm | Bc3UnormSrgb
            | Bc5Typeless | Bc5Unorm | Bc5Snorm | Bc6hTypeless | Bc6hUf16 | Bc6hSf16
            | Bc7Typeless | Bc7Unorm | Bc7UnormSrgb => 128,
        }
    }
}
