use thiserror::Error;

/// Result type for IO operations.
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Errors raised while encoding or decoding binary formats.
#[derive(Debug, Error)]
pub enum IoError {
    /// The reader ran out of bytes before the value was complete.
    #[error("unexpected end of stream at position {position}")]
    EndOfStream {
        /// Read position at which the data ended.
        position: usize,
    },

    /// A length or count exceeded the limit the caller allowed.
    #[error("{what} of {value} exceeds the maximum of {max}")]
    ValueOutOfRange {
        /// What was being read.
        what: &'static str,
        /// The decoded value.
        value: u64,
        /// The allowed maximum.
        max: u64,
    },

    /// The bytes violate the format being decoded.
    #[error("invalid {what}: {message}")]
    InvalidData {
        /// The field or structure that failed.
        what: &'static str,
        /// Which invariant was violated.
        message: String,
    },
}

impl IoError {
    /// Convenience constructor for [`IoError::InvalidData`].
    pub fn invalid(what: &'static str, message: impl Into<String>) -> Self {
        IoError::InvalidData {
            what,
            message: message.into(),
        }
    }
}
