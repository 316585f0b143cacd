//! DDS format constants and definitions
#![allow(dead_code)]

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: u32 = 0x44445320_u32.to_be();

// Size of the regular DDS header, including the magic
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

// DDS header field offsets
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;

/// Offset of the FOURCC header used in DX9 and below.
pub(crate) const FOURCC_OFFSET: usize = 0x54;

pub(crate) const FOURCC_DXT1: u32 = 0x31545844_u32.to_le(); // 'DXT1'
pub(crate) const FOURCC_DXT2: u32 = 0x32545844_u32.to_le(); // 'DXT2'
pub(crate) const FOURCC_DXT3: u32 = 0x33545844_u32.to_le(); // 'DXT3'
pub(crate) const FOURCC_DXT4: u32 = 0x34545844_u32.to_le(); // 'DXT4'
pub(crate) const FOURCC_DXT5: u32 = 0x35545844_u32.to_le(); // 'DXT5'
pub(crate) const FOURCC_DX10: u32 = 0x30315844_u32.to_le(); // 'DX10'

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// DX10 header field offsets
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x80;
pub(crate) const DX10_DIMENSION_OFFSET: usize = 0x84;
pub(crate) const DX10_MISC_FLAG_OFFSET: usize = 0x88;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;

// DDS header flags
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_DEPTH: u32 = 0x800000;

// DDS caps2 flags
pub(crate) const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub(crate) const DDSCAPS2_VOLUME: u32 = 0x200000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;

// DX10 misc flags
pub(crate) const DDS_RESOURCE_MISC_TEXTURECUBE: u32 = 0x4;

// R8G8B8A8_UNORM: R=byte0, G=byte1, B=byte2, A=byte3 (0xAABBGGRR)
pub(crate) const RGBA8888_RED_MASK: u32 = 0x000000FF;
pub(crate) const RGBA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const RGBA8888_BLUE_MASK: u32 = 0x00FF0000;
pub(crate) const RGBA8888_ALPHA_MASK: u32 = 0xFF000000;

// B8G8R8A8_UNORM: R=byte2, G=byte1, B=byte0, A=byte3 (0xAAGGRRBB)
pub(crate) const BGRA8888_RED_MASK: u32 = 0x00FF0000;
pub(crate) const BGRA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const BGRA8888_BLUE_MASK: u32 = 0x000000FF;
pub(crate) const BGRA8888_ALPHA_MASK: u32 = 0xFF000000;
