pub mod deswizzle;
pub mod swizzle;

use crate::dds::parse_dds;
use crate::error::CliError;
use crate::util::*;
use core::ptr::copy_nonoverlapping;
use log::{debug, info};
use standard_swizzle_api::{standard_swizzle_3d, standard_swizzle_array, SwizzleDirection};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Reads the DDS file at `input`, converts its surface data and writes the result,
/// with the original headers, to `output`.
pub fn convert_dds_file(
    input: &Path,
    output: &Path,
    direction: SwizzleDirection,
) -> Result<(), CliError> {
    let start = Instant::now();

    let source_handle = open_read_handle(input)?;
    let source_size = get_file_size(&source_handle)? as usize;
    let source_mapping = open_readonly_mmap(&source_handle, source_size)?;
    // SAFETY: the mapping covers `len()` bytes and outlives `source`.
    let source =
        unsafe { core::slice::from_raw_parts(source_mapping.data(), source_mapping.len()) };

    let header = parse_dds(source)?;
    debug!("{}: {header:?}", input.display());

    let planes = header.planes(source)?;
    let metadata = header.metadata();
    let converted = if header.is_volume {
        standard_swizzle_3d(&planes, &metadata, direction)?
    } else {
        standard_swizzle_array(&planes, &metadata, direction)?
    };

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let pixels = converted.pixels();
    let output_len = header.data_offset + pixels.len();
    let target_handle = open_write_handle(output, output_len)?;
    let target_mapping = create_output_mapping(&target_handle, output_len)?;

    // Copy DDS headers, then the converted surface.
    unsafe {
        copy_nonoverlapping(source.as_ptr(), target_mapping.data(), header.data_offset);
        copy_nonoverlapping(
            pixels.as_ptr(),
            target_mapping.data().add(header.data_offset),
            pixels.len(),
        );
    }

    info!(
        "{direction:?} {} -> {} ({} plane(s), {:?}) in {:.2?}",
        input.display(),
        output.display(),
        header.plane_count(),
        header.format,
        start.elapsed()
    );
    Ok(())
}
