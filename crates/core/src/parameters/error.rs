//! Parameter error types

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name does not fit the store's key length
    NameTooLong,
    /// Parameter was never registered
    Unknown,
    /// Store is full
    StoreFull,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::NameTooLong => write!(f, "parameter name too long"),
            ParameterError::Unknown => write!(f, "unknown parameter"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
        }
    }
}
