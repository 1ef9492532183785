//! Port traits — the boundary between control logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ FanService (domain)
//! ```
//!
//! Driven adapters (fan output, button, analog front end, timers, event
//! sinks) implement these traits. The [`FanService`](super::service::FanService)
//! consumes them via generics, so the control core never touches hardware
//! directly and runs unchanged against the mocks in `tests/`.
//!
//! Every port is infallible: the firmware has no recovery path for a failed
//! GPIO write, so adapters log and carry on.

use embedded_hal::delay::DelayNs;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Fan output (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The single digital fan output.
pub trait FanPort {
    fn set_fan(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Button input (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The override push-button.
pub trait ButtonPort {
    /// Current (raw) button level; `true` while held down.
    fn is_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Temperature input (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Power-gated analog front end producing an 8-bit temperature proxy.
///
/// Lower readings mean hotter.
pub trait TemperaturePort {
    /// Power the sense divider and ADC.
    fn enable(&mut self);

    /// Start one conversion. Completion is signalled asynchronously.
    fn begin_conversion(&mut self);

    /// Whether the last started conversion has finished.
    fn is_complete(&mut self) -> bool;

    /// Result of the last conversion.
    fn read(&mut self) -> u8;

    /// Remove power from the sense divider and ADC.
    fn disable(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Timing
// ───────────────────────────────────────────────────────────────

/// Periodic tick timer doubling as the supervisory watchdog.
pub trait TimerPort {
    /// Re-arm for one more period. A loop that stops calling this is
    /// reset by the watchdog.
    fn arm_next(&mut self);
}

/// The loop's only suspension primitive.
pub trait SleepPort {
    /// Sleep until the next interrupt (tick, conversion, or any other).
    fn wait_for_interrupt(&mut self);
}

/// Read-once reset cause register.
pub trait ResetCausePort {
    /// `true` if the previous reset was a watchdog timeout. Consumes and
    /// clears the cause; later calls return `false`.
    fn take_watchdog_reset(&mut self) -> bool;
}

/// Everything the normal control loop drives.
pub trait ControlHardware:
    FanPort + ButtonPort + TemperaturePort + TimerPort + SleepPort + DelayNs
{
}

impl<T> ControlHardware for T where
    T: FanPort + ButtonPort + TemperaturePort + TimerPort + SleepPort + DelayNs
{
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
