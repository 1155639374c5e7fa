//! Host port errors

use blinker_hal::HalError;
use thiserror::Error;

pub type PosixResult<T> = Result<T, PosixError>;

#[derive(Debug, Error)]
pub enum PosixError {
    #[error("ticker already started")]
    AlreadyStarted,
    #[error("failed to spawn ticker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("invalid input script entry {entry:?}: {reason}")]
    InvalidScript { entry: String, reason: String },
}

impl From<PosixError> for HalError {
    fn from(err: PosixError) -> Self {
        match err {
            PosixError::AlreadyStarted => HalError::AlreadyStarted,
            PosixError::Spawn(_) => HalError::HardwareError,
            PosixError::InvalidScript { .. } => HalError::InvalidParameter,
        }
    }
}
