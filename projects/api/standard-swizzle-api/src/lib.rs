#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

pub mod error;
pub mod image;
pub mod metadata;
pub mod scratch;
pub mod swizzle;

/// C exports for the allocating swizzle functions.
#[cfg(feature = "c-exports")]
pub mod c_api;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use error::{InvalidArgumentKind, StandardSwizzleError};
pub use image::Image;
pub use metadata::{TexDimension, TexMetadata};
pub use scratch::ScratchImage;
pub use swizzle::{standard_swizzle, standard_swizzle_3d, standard_swizzle_array};

pub use standard_swizzle::{Axis, DxgiFormat, FormatRejection, PixelFormat, SwizzleDirection};
