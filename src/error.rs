//! Unified error types for the fan controller firmware.
//!
//! The control loop itself is infallible; errors only arise while bringing
//! up peripherals, validating configuration, or talking to GPIO through
//! `embedded-hal`. All variants are `Copy` so drivers can hand them back
//! without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.
    Config(&'static str),
    /// Peripheral initialisation failed (`esp_err_t` return code).
    Init(&'static str, i32),
    /// A digital pin read or write failed.
    Pin(PinError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(what, rc) => write!(f, "init: {what} (rc={rc})"),
            Self::Pin(e) => write!(f, "pin: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pin errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Setting the fan output level failed.
    FanWrite,
    /// Reading the button level failed.
    ButtonRead,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FanWrite => write!(f, "fan output write failed"),
            Self::ButtonRead => write!(f, "button input read failed"),
        }
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
