//! Ephemeris error types.

use thiserror::Error;

use crate::Body;

/// Errors from an [`EphemerisProvider`](crate::EphemerisProvider).
///
/// Any of these is fatal to a single horoscope computation: there is no
/// sensible fallback longitude.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider could not produce a value for this body.
    #[error("ephemeris unavailable for {body}: {reason}")]
    Unavailable { body: Body, reason: String },
    /// The provider returned NaN or infinity.
    #[error("non-finite longitude for {body}: {value}")]
    NonFinite { body: Body, value: f64 },
    /// The instant lies outside the provider's validity window.
    #[error("epoch out of range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
}
