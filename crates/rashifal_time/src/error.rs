//! Error types for timezone resolution.

use thiserror::Error;

/// Errors from timezone lookup.
///
/// None of these are fatal to a horoscope computation: callers that go
/// through [`LocalInstant::resolve`](crate::LocalInstant::resolve) get the
/// default zone instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The identifier is not a known IANA timezone.
    #[error("invalid time zone: {0:?}")]
    InvalidTimeZone(String),
}
