//! Outbound application events.
//!
//! The control core emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::app::boot::BootMode;
use crate::control::OverrideMode;
use crate::ticks::Tick;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The dispatcher picked a run mode.
    Booted(BootMode),

    /// A temperature sample was taken and classified.
    Sampled {
        tick: Tick,
        reading: u8,
        hot: bool,
        /// Classification differs from the previous sample.
        changed: bool,
    },

    /// The button cycled the override mode.
    OverrideChanged { from: OverrideMode, to: OverrideMode },

    /// The level driven to the fan changed.
    FanChanged { tick: Tick, on: bool },
}
