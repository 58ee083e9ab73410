//! Closed set of reasons an outbound travel-data call produced no usable data.

use std::fmt;

/// Why an adapter call failed.
///
/// Adapters never raise past their boundary: every transport, status and
/// decoding problem is folded into one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The call exceeded the adapter's timeout.
    Timeout,
    /// Connection refused, DNS failure or another transport error.
    Unreachable,
    /// The provider answered with a non-2xx status.
    BadStatus(u16),
    /// The body could not be decoded into the expected shape.
    InvalidPayload,
}

impl FailureKind {
    /// Whether a retry-eligible adapter may try again after this failure.
    ///
    /// Only transient conditions qualify: timeouts, transport errors,
    /// server errors and rate limiting.
    pub fn is_retryable(&self) -> bool {
        match self {
            FailureKind::Timeout | FailureKind::Unreachable => true,
            FailureKind::BadStatus(code) => *code == 429 || (500..600).contains(code),
            FailureKind::InvalidPayload => false,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Unreachable => write!(f, "unreachable"),
            FailureKind::BadStatus(code) => write!(f, "bad status {}", code),
            FailureKind::InvalidPayload => write!(f, "invalid payload"),
        }
    }
}
