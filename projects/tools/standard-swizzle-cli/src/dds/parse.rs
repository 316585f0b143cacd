use super::constants::*;
use crate::error::CliError;
use endian_writer::{EndianReader, LittleEndianReader};
use standard_swizzle_api::image::tight_pitches;
use standard_swizzle_api::{DxgiFormat, Image, TexDimension, TexMetadata};

/// The parts of a DDS header that decide how its top-level surface is swizzled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    pub format: DxgiFormat,
    pub width: usize,
    pub height: usize,
    /// 1 unless this is a volume.
    pub depth: usize,
    /// 1 unless this is a DX10 texture array.
    pub array_size: usize,
    pub is_volume: bool,
    /// Offset of the surface data, i.e. the size of all headers.
    pub data_offset: usize,
}

impl DdsHeader {
    pub fn metadata(&self) -> TexMetadata {
        if self.is_volume {
            TexMetadata::new_3d(self.format, self.width, self.height, self.depth)
        } else {
            TexMetadata::new_2d(self.format, self.width, self.height, self.array_size)
        }
    }

    /// Number of planes stored after the header: depth slices or array elements.
    pub fn plane_count(&self) -> usize {
        if self.is_volume {
            self.depth
        } else {
            self.array_size
        }
    }

    /// Splits the surface data of `file` into one [`Image`] per plane.
    pub fn planes<'a>(&self, file: &'a [u8]) -> Result<Vec<Image<'a>>, CliError> {
        let (_, slice_pitch) = tight_pitches(self.format, self.width, self.height);
        let surface = &file[self.data_offset.min(file.len())..];
        let expected = slice_pitch.saturating_mul(self.plane_count());

        if surface.len() < expected {
            return Err(CliError::TruncatedSurface {
                expected,
                actual: surface.len(),
            });
        }

        Ok(surface[..expected]
            .chunks_exact(slice_pitch.max(1))
            .map(|plane| Image::new(self.format, self.width, self.height, Some(plane)))
            .collect())
    }
}

/// Parses the header of a DDS file.
///
/// Rejects files with mip chains and cube maps, since only a single top-level
/// surface (or array / volume of them) can be swizzled.
pub fn parse_dds(data: &[u8]) -> Result<DdsHeader, CliError> {
    if data.len() < DDS_HEADER_SIZE
        || u32::from_le_bytes([data[0], data[1], data[2], data[3]]) != DDS_MAGIC
    {
        return Err(CliError::NotADds);
    }

    // SAFETY: data.len() >= DDS_HEADER_SIZE (128), every offset read below is within it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) } as usize;
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) } as usize;
    let depth = unsafe { reader.read_u32_at(DDS_DEPTH_OFFSET as isize) } as usize;
    let mip_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    let caps2 = unsafe { reader.read_u32_at(DDS_CAPS2_OFFSET as isize) };
    let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };
    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };

    if (flags & DDSD_MIPMAPCOUNT) != 0 && mip_count > 1 {
        return Err(CliError::Mipmapped(mip_count));
    }

    let (format, array_size, is_volume, data_offset) =
        if (pixel_flags & DDPF_FOURCC) != 0 && fourcc == FOURCC_DX10 {
            if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
                return Err(CliError::NotADds);
            }

            // SAFETY: data.len() >= 148, so the DX10 header is readable.
            let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
            let dimension = unsafe { reader.read_u32_at(DX10_DIMENSION_OFFSET as isize) };
            let misc_flag = unsafe { reader.read_u32_at(DX10_MISC_FLAG_OFFSET as isize) };
            let array_size = unsafe { reader.read_u32_at(DX10_ARRAY_SIZE_OFFSET as isize) };

            if (misc_flag & DDS_RESOURCE_MISC_TEXTURECUBE) != 0 {
                return Err(CliError::Cubemap);
            }

            let format = DxgiFormat::from_u32(dxgi_format)
                .filter(|format| *format != DxgiFormat::Unknown)
                .ok_or(CliError::UnsupportedFormat(dxgi_format))?;
            let dimension = TexDimension::from_u32(dimension)
                .ok_or(CliError::UnsupportedDimension(dimension))?;

            (
                format,
                (array_size as usize).max(1),
                dimension == TexDimension::Texture3D,
                DDS_HEADER_SIZE + DX10_HEADER_SIZE,
            )
        } else {
            if (caps2 & DDSCAPS2_CUBEMAP) != 0 {
                return Err(CliError::Cubemap);
            }

            let format = legacy_format(data, pixel_flags, fourcc)?;
            let is_volume = (flags & DDSD_DEPTH) != 0 || (caps2 & DDSCAPS2_VOLUME) != 0;
            (format, 1, is_volume, DDS_HEADER_SIZE)
        };

    Ok(DdsHeader {
        format,
        width,
        height,
        depth: if is_volume { depth.max(1) } else { 1 },
        array_size,
        is_volume,
        data_offset,
    })
}

/// Maps a pre-DX10 pixel format to its DXGI equivalent.
///
/// `data` must hold at least the 128 byte header.
fn legacy_format(data: &[u8], pixel_flags: u32, fourcc: u32) -> Result<DxgiFormat, CliError> {
    if (pixel_flags & DDPF_FOURCC) != 0 {
        return match fourcc {
            FOURCC_DXT1 => Ok(DxgiFormat::Bc1Unorm),
            FOURCC_DXT2 | FOURCC_DXT3 => Ok(DxgiFormat::Bc2Unorm),
            FOURCC_DXT4 | FOURCC_DXT5 => Ok(DxgiFormat::Bc3Unorm),
            _ => Err(CliError::UnsupportedFormat(fourcc)),
        };
    }

    if (pixel_flags & DDPF_RGB) == 0 {
        return Err(CliError::UnsupportedFormat(pixel_flags));
    }

    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let bit_count = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize) };
    let r_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize) };
    let g_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize) };
    let b_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize) };
    let a_mask = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize) };
    let has_alpha = (pixel_flags & DDPF_ALPHAPIXELS) != 0;

    match (bit_count, r_mask, g_mask, b_mask, a_mask) {
        (32, RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, RGBA8888_ALPHA_MASK)
            if has_alpha =>
        {
            Ok(DxgiFormat::R8G8B8A8Unorm)
        }
        (32, BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, BGRA8888_ALPHA_MASK)
            if has_alpha =>
        {
            Ok(DxgiFormat::B8G8R8A8Unorm)
        }
        (32, BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, 0) => {
            Ok(DxgiFormat::B8G8R8X8Unorm)
        }
        _ => Err(CliError::UnsupportedFormat(bit_count)),
    }
}
