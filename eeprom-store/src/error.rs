//! Error taxonomy for store operations.
//!
//! Every failure is surfaced to the caller as one of these values; the
//! store never retries and never recovers silently.

use core::fmt;

/// Failure reported by the [`MemoryBus`](crate::MemoryBus) port.
///
/// This is the transport-level status of a single chunk transfer. The
/// store lifts it into [`Error`] unchanged in kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The device or bus reported busy.
    Busy,
    /// The transfer exceeded the fixed per-chunk timeout.
    Timeout,
    /// Any other transport failure.
    Other,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "device or bus busy"),
            Self::Timeout => write!(f, "transfer timed out"),
            Self::Other => write!(f, "transport error"),
        }
    }
}

impl core::error::Error for TransportError {}

/// Errors returned by [`PagedStore`](crate::PagedStore) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Operation attempted before a valid configuration was installed.
    NotInitialized,
    /// The underlying transport reported the device or bus as busy.
    Busy,
    /// The underlying transport exceeded the fixed timeout bound.
    Timeout,
    /// The data read back does not match the stored checksum.
    InvalidChecksum,
    /// Any transport failure not otherwise classified.
    Other,
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Busy => Error::Busy,
            TransportError::Timeout => Error::Timeout,
            TransportError::Other => Error::Other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "store is not initialized"),
            Self::Busy => write!(f, "device or bus busy"),
            Self::Timeout => write!(f, "transfer timed out"),
            Self::InvalidChecksum => write!(f, "checksum verification failed"),
            Self::Other => write!(f, "transport error"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_maps_in_kind() {
        assert_eq!(Error::from(TransportError::Busy), Error::Busy);
        assert_eq!(Error::from(TransportError::Timeout), Error::Timeout);
        assert_eq!(Error::from(TransportError::Other), Error::Other);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Error::InvalidChecksum),
            "checksum verification failed"
        );
        assert_eq!(format!("{}", Error::NotInitialized), "store is not initialized");
    }
}
