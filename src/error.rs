//! Error taxonomy for encoding and transmission.
//!
//! The crate reports four failure classes:
//!
//! - [`Error::InvalidConfiguration`]: bad startup parameters (key length,
//!   zero repeat count). Fatal before any RF activity.
//! - [`Error::InvalidCodeword`]: a symbol buffer of the wrong length reached
//!   the expander. This is an internal invariant violation, not an expected
//!   runtime condition.
//! - [`Error::InvalidCommand`]: a caller-facing trigger token that is neither
//!   `"on"` nor `"off"`. Rejected before the output line is touched.
//! - [`Error::Transmission`]: the output line itself failed mid-frame. The
//!   remaining level-holds of the frame are abandoned and the pin error is
//!   handed back to the caller; the protocol's own frame repetition covers
//!   RF-channel loss, not local hardware faults, so there is no retry.
//!
//! The type is generic over the `embedded-hal` pin error `E` so that drivers
//! surface their HAL's concrete error without boxing. Pure codec paths that
//! never touch hardware use the [`CodecError`] alias.

use thiserror::Error;

/// Errors produced by the codec, expander, and driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<E = core::convert::Infallible> {
    /// A startup parameter is unusable; the message names the offender.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A symbol buffer was not exactly [`CODEWORD_LEN`](crate::consts::CODEWORD_LEN)
    /// entries long. Carries the observed length.
    #[error("codeword must be 16 symbols, got {0}")]
    InvalidCodeword(usize),

    /// A trigger token was neither `"on"` nor `"off"`.
    #[error("invalid command")]
    InvalidCommand,

    /// The output line failed while being driven.
    #[error("transmission failed: output line error")]
    Transmission(E),
}

/// Error type for paths that never touch the output line.
pub type CodecError = Error<core::convert::Infallible>;

impl<E> Error<E> {
    /// Widens a hardware-free error into one carrying a pin error type.
    ///
    /// Codec results are produced before any pin access and can therefore
    /// never hold a [`Error::Transmission`] value; this conversion lets the
    /// driver thread them through its own `Result` without a `From` clash on
    /// the generic parameter.
    pub fn widen(err: CodecError) -> Self {
        match err {
            Error::InvalidConfiguration(what) => Error::InvalidConfiguration(what),
            Error::InvalidCodeword(len) => Error::InvalidCodeword(len),
            Error::InvalidCommand => Error::InvalidCommand,
            Error::Transmission(infallible) => match infallible {},
        }
    }
}
