//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns every driver and exposes them through the port traits in
//! [`app::ports`](crate::app::ports). This is the only module that touches
//! actual hardware; on non-espidf targets the underlying drivers fall back
//! to simulation stubs.
//!
//! Pin errors stop here: they are logged and the control loop carries on,
//! re-driving the fan on the next tick.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{
    ButtonPort, FanPort, ResetCausePort, SleepPort, TemperaturePort, TimerPort,
};
use crate::drivers::button::ButtonInput;
use crate::drivers::fan::FanDriver;
use crate::drivers::hw_timer::TickTimer;
use crate::drivers::watchdog::{ResetCause, Watchdog};
use crate::sensors::temperature::ProxyAdc;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<F, B, D> {
    fan: FanDriver<F>,
    button: ButtonInput<B>,
    adc: ProxyAdc,
    timer: TickTimer,
    watchdog: Watchdog,
    delay: D,
}

impl<F, B, D> HardwareAdapter<F, B, D>
where
    F: OutputPin,
    B: InputPin,
    D: DelayNs,
{
    pub fn new(
        fan: FanDriver<F>,
        button: ButtonInput<B>,
        adc: ProxyAdc,
        timer: TickTimer,
        watchdog: Watchdog,
        delay: D,
    ) -> Self {
        Self {
            fan,
            button,
            adc,
            timer,
            watchdog,
            delay,
        }
    }
}

// ── FanPort / ButtonPort ──────────────────────────────────────

impl<F: OutputPin, B, D> FanPort for HardwareAdapter<F, B, D> {
    fn set_fan(&mut self, on: bool) {
        if let Err(e) = self.fan.set(on) {
            warn!("fan: {}", e);
        }
    }
}

impl<F, B: InputPin, D> ButtonPort for HardwareAdapter<F, B, D> {
    fn is_pressed(&mut self) -> bool {
        self.button.is_pressed().unwrap_or_else(|e| {
            warn!("button: {}", e);
            false
        })
    }
}

// ── TemperaturePort ───────────────────────────────────────────

impl<F, B, D> TemperaturePort for HardwareAdapter<F, B, D> {
    fn enable(&mut self) {
        self.adc.power_on();
    }

    fn begin_conversion(&mut self) {
        self.adc.start();
    }

    fn is_complete(&mut self) -> bool {
        self.adc.is_done()
    }

    fn read(&mut self) -> u8 {
        self.adc.result()
    }

    fn disable(&mut self) {
        self.adc.power_off();
    }
}

// ── Timing ────────────────────────────────────────────────────

impl<F, B, D> TimerPort for HardwareAdapter<F, B, D> {
    fn arm_next(&mut self) {
        self.watchdog.feed();
    }
}

impl<F, B, D> SleepPort for HardwareAdapter<F, B, D> {
    fn wait_for_interrupt(&mut self) {
        self.timer.wait_for_interrupt();
    }
}

impl<F, B, D: DelayNs> DelayNs for HardwareAdapter<F, B, D> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }
}

impl ResetCausePort for ResetCause {
    fn take_watchdog_reset(&mut self) -> bool {
        self.take()
    }
}
