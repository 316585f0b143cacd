/// Shared constants between modules.
pub mod constants;

/// Reads the DDS header fields needed to swizzle a surface.
pub mod parse;

pub use parse::*;
