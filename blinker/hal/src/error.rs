//! Common error types for HAL operations

use core::fmt;

/// HAL operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Invalid parameter provided
    InvalidParameter,
    /// Operation not supported by this implementation
    NotSupported,
    /// Tick source already has a handler registered
    AlreadyStarted,
    /// Digital pin reported an error
    Pin,
    /// Display driver reported an error
    Display,
    /// Hardware error occurred
    HardwareError,
    /// Vendor-specific error code
    VendorError(i32),
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::NotSupported => write!(f, "operation not supported"),
            Self::AlreadyStarted => write!(f, "tick source already started"),
            Self::Pin => write!(f, "pin error"),
            Self::Display => write!(f, "display error"),
            Self::HardwareError => write!(f, "hardware error"),
            Self::VendorError(code) => write!(f, "vendor error code: {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

#[cfg(feature = "defmt")]
impl defmt::Format for HalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidParameter => defmt::write!(fmt, "InvalidParameter"),
            Self::NotSupported => defmt::write!(fmt, "NotSupported"),
            Self::AlreadyStarted => defmt::write!(fmt, "AlreadyStarted"),
            Self::Pin => defmt::write!(fmt, "Pin"),
            Self::Display => defmt::write!(fmt, "Display"),
            Self::HardwareError => defmt::write!(fmt, "HardwareError"),
            Self::VendorError(code) => defmt::write!(fmt, "VendorError({})", code),
        }
    }
}

/// Result type for HAL operations
pub type HalResult<T> = Result<T, HalError>;
