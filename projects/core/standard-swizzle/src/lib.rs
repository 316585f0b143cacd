#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod allocate;
pub mod bits;
pub mod error;
pub mod format;
pub mod layout;
pub mod morton;
pub mod transform;

#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use error::{Axis, FormatRejection, SwizzleError};
pub use format::{DxgiFormat, PixelFormat};
pub use layout::SurfaceLayout;
pub use transform::{
    transform_array, transform_plane, transform_volume, PlaneMut, PlaneRef, SwizzleDirection,
};
