//! C API error handling.

use crate::error::StandardSwizzleError;
use core::ffi::c_char;

/// C-compatible error codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SswErrorCode {
    /// Operation succeeded
    Success = 0,
    /// The images or metadata are malformed or inconsistent
    InvalidArgument = 1,
    /// The pixel format cannot be swizzled
    UnsupportedFormat = 2,
    /// An image has no pixel data
    NullBuffer = 3,
    /// An extent exceeds what the swizzle pattern can address
    DimensionTooLarge = 4,
    /// Memory allocation failed
    AllocationFailed = 5,
    /// Null pointer provided for a required argument
    NullArgumentPointer = 6,
}

/// C-compatible Result type.
#[repr(C)]
#[derive(Debug)]
pub struct SswResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: SswErrorCode,
}

impl SswResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: SswErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: SswErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, SswErrorCode::Success)
    }
}

impl From<StandardSwizzleError> for SswResult {
    fn from(error: StandardSwizzleError) -> Self {
        let error_code = match error {
            StandardSwizzleError::InvalidArgument(_) => SswErrorCode::InvalidArgument,
            StandardSwizzleError::UnsupportedFormat(_) => SswErrorCode::UnsupportedFormat,
            StandardSwizzleError::NullBuffer { .. } => SswErrorCode::NullBuffer,
            StandardSwizzleError::DimensionTooLarge { .. } => SswErrorCode::DimensionTooLarge,
            StandardSwizzleError::AllocationFailed(_) => SswErrorCode::AllocationFailed,
        };
        Self::from_error_code(error_code)
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
///
/// # Safety
/// This function is safe to call with any error code value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ssw_error_message(error_code: SswErrorCode) -> *const c_char {
    match error_code {
        SswErrorCode::Success => c"Success".as_ptr() as *const c_char,
        SswErrorCode::InvalidArgument => {
            c"The images or metadata are malformed or inconsistent".as_ptr() as *const c_char
        }
        SswErrorCode::UnsupportedFormat => {
            c"The pixel format cannot be swizzled".as_ptr() as *const c_char
        }
        SswErrorCode::NullBuffer => c"An image has no pixel data".as_ptr() as *const c_char,
        SswErrorCode::DimensionTooLarge => {
            c"An extent exceeds what the swizzle pattern can address".as_ptr() as *const c_char
        }
        SswErrorCode::AllocationFailed => c"Memory allocation failed".as_ptr() as *const c_char,
        SswErrorCode::NullArgumentPointer => {
            c"Null pointer provided for a required argument".as_ptr() as *const c_char
        }
    }
}
