//! Common test imports and utilities for CLI tests.
#![allow(unused_imports)]

pub use rstest::rstest;

use crate::dds::constants::*;
use standard_swizzle_api::DxgiFormat;

/// Builds minimal DDS files for tests.
pub(crate) struct DdsBuilder {
    header: Vec<u8>,
}

impl DdsBuilder {
    fn base(width: u32, height: u32) -> Self {
        let mut header = vec![0u8; DDS_HEADER_SIZE];
        header[0..4].copy_from_slice(b"DDS ");
        header[4..8].copy_from_slice(&124u32.to_le_bytes());
        header[DDS_FLAGS_OFFSET..DDS_FLAGS_OFFSET + 4].copy_from_slice(&0x1007u32.to_le_bytes());
        header[DDS_HEIGHT_OFFSET..DDS_HEIGHT_OFFSET + 4].copy_from_slice(&height.to_le_bytes());
        header[DDS_WIDTH_OFFSET..DDS_WIDTH_OFFSET + 4].copy_from_slice(&width.to_le_bytes());
        header[0x4C..0x50].copy_from_slice(&32u32.to_le_bytes());
        Self { header }
    }

    fn write_u32(&mut self, offset: usize, value: u32) {
        self.header[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    fn or_u32(&mut self, offset: usize, value: u32) {
        let current = u32::from_le_bytes(self.header[offset..offset + 4].try_into().unwrap());
        self.write_u32(offset, current | value);
    }

    /// Legacy header with a FOURCC pixel format.
    pub fn legacy_fourcc(fourcc: [u8; 4], width: u32, height: u32) -> Self {
        let mut builder = Self::base(width, height);
        builder.write_u32(DDS_PIXELFORMAT_FLAGS_OFFSET, DDPF_FOURCC);
        builder.header[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(&fourcc);
        builder
    }

    /// Legacy header with a 32-bit RGB + alpha pixel format.
    pub fn legacy_rgba(r_mask: u32, b_mask: u32, width: u32, height: u32) -> Self {
        let mut builder = Self::base(width, height);
        builder.write_u32(DDS_PIXELFORMAT_FLAGS_OFFSET, DDPF_RGB | DDPF_ALPHAPIXELS);
        builder.write_u32(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET, 32);
        builder.write_u32(DDS_PIXELFORMAT_RBITMASK_OFFSET, r_mask);
        builder.write_u32(DDS_PIXELFORMAT_GBITMASK_OFFSET, 0x0000_FF00);
        builder.write_u32(DDS_PIXELFORMAT_BBITMASK_OFFSET, b_mask);
        builder.write_u32(DDS_PIXELFORMAT_ABITMASK_OFFSET, 0xFF00_0000);
        builder
    }

    /// Header followed by a DX10 extension.
    pub fn dx10(
        format: DxgiFormat,
        dimension: u32,
        width: u32,
        height: u32,
        array_size: u32,
    ) -> Self {
        let mut builder = Self::legacy_fourcc(*b"DX10", width, height);
        builder.header.resize(DDS_HEADER_SIZE + DX10_HEADER_SIZE, 0);
        builder.write_u32(DX10_FORMAT_OFFSET, format.into());
        builder.write_u32(DX10_DIMENSION_OFFSET, dimension);
        builder.write_u32(DX10_ARRAY_SIZE_OFFSET, array_size);
        builder
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.write_u32(DDS_DEPTH_OFFSET, depth);
        self.or_u32(DDS_FLAGS_OFFSET, DDSD_DEPTH);
        self.or_u32(DDS_CAPS2_OFFSET, DDSCAPS2_VOLUME);
        self
    }

    pub fn mip_levels(mut self, levels: u32) -> Self {
        self.write_u32(DDS_MIPMAP_COUNT_OFFSET, levels);
        self.or_u32(DDS_FLAGS_OFFSET, DDSD_MIPMAPCOUNT);
        self
    }

    pub fn cubemap(mut self) -> Self {
        self.or_u32(DDS_CAPS2_OFFSET, DDSCAPS2_CUBEMAP);
        self
    }

    /// The header followed by `surface_len` patterned bytes.
    pub fn build(self, surface_len: usize) -> Vec<u8> {
        let mut file = self.header;
        file.extend((0..surface_len).map(|i| (i as u8).wrapping_mul(29) ^ (i >> 8) as u8));
        file
    }
}
