#![no_main]

// Swizzles then deswizzles a volume of fuzzer-chosen extents. Shapes whose interleave is
// not dense must be rejected; every accepted shape must round trip.

use libfuzzer_sys::{arbitrary, fuzz_target};
use standard_swizzle_api::{
    standard_swizzle_3d, DxgiFormat, Image, SwizzleDirection, TexMetadata,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    log2_width: u8,
    log2_height: u8,
    log2_depth: u8,
    seed: u8,
}

fuzz_target!(|input: Input| {
    let width = 1usize << (input.log2_width % 5);
    let height = 1usize << (input.log2_height % 5);
    let depth = 1usize << (input.log2_depth % 5);
    let plane_len = width * height * 2;

    let slices: Vec<Vec<u8>> = (0..depth)
        .map(|z| {
            (0..plane_len)
                .map(|i| (i as u8).wrapping_mul(13) ^ (z as u8) ^ input.seed)
                .collect()
        })
        .collect();
    let images: Vec<_> = slices
        .iter()
        .map(|s| Image::new(DxgiFormat::R16Unorm, width, height, Some(&s[..])))
        .collect();
    let metadata = TexMetadata::new_3d(DxgiFormat::R16Unorm, width, height, depth);

    let swizzled = match standard_swizzle_3d(&images, &metadata, SwizzleDirection::Swizzle) {
        Ok(swizzled) => swizzled,
        Err(_) => return,
    };
    let swizzled_images: Vec<_> = swizzled.images().collect();
    let restored =
        standard_swizzle_3d(&swizzled_images, &metadata, SwizzleDirection::Deswizzle).unwrap();

    assert_eq!(restored.pixels(), slices.concat().as_slice());
});
