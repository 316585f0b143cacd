use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

fn path_str(path: &Path) -> Result<&str, CliError> {
    path.to_str()
        .ok_or_else(|| CliError::InvalidPath(path.to_string_lossy().into_owned()))
}

/// Opens a file in read-only mode and returns a handle.
#[inline(always)]
pub fn open_read_handle(path: &Path) -> Result<ReadOnlyFileHandle, CliError> {
    ReadOnlyFileHandle::open(path_str(path)?).map_err(|e| CliError::MmapError(e.to_string()))
}

/// Maps the first `len` bytes of a file for reading.
#[inline(always)]
pub fn open_readonly_mmap(
    handle: &ReadOnlyFileHandle,
    len: usize,
) -> Result<ReadOnlyMmap<'_>, CliError> {
    ReadOnlyMmap::new(handle, 0, len).map_err(|e| CliError::MmapError(e.to_string()))
}

/// Retrieves the size of the file for a given handle.
#[inline(always)]
pub fn get_file_size(handle: &ReadOnlyFileHandle) -> Result<i64, CliError> {
    handle
        .size()
        .map_err(|e| CliError::MmapError(e.to_string()))
}

/// Creates (or truncates) a file of `len` bytes for writing.
#[inline(always)]
pub fn open_write_handle(path: &Path, len: usize) -> Result<ReadWriteFileHandle, CliError> {
    ReadWriteFileHandle::create_preallocated(path_str(path)?, len as i64)
        .map_err(|e| CliError::MmapError(e.to_string()))
}

/// Maps the first `len` bytes of a file for writing.
#[inline(always)]
pub fn create_output_mapping(
    handle: &ReadWriteFileHandle,
    len: usize,
) -> Result<ReadWriteMmap<'_>, CliError> {
    ReadWriteMmap::new(handle, 0, len).map_err(|e| CliError::MmapError(e.to_string()))
}
