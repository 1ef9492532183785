//! Watchdog-fault diagnostic mode.
//!
//! When the previous reset was a watchdog timeout the firmware does not
//! resume normal control. It blinks the fan forever (long off, short on)
//! so a hang is visible on the bench instead of hidden behind a silent
//! reboot loop. The watchdog is re-armed in small slices throughout, so
//! this mode itself can never trip it.

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::app::ports::{FanPort, TimerPort};
use crate::config::ControlConfig;

/// Drives the diagnostic blink pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultBlinker {
    off_ms: u32,
    on_ms: u32,
    feed_interval_us: u32,
}

impl FaultBlinker {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            off_ms: config.fault_blink_off_ms,
            on_ms: config.fault_blink_on_ms,
            feed_interval_us: config.fault_feed_interval_us.max(1),
        }
    }

    /// Blink forever. Never returns.
    pub fn run(&self, hw: &mut (impl FanPort + TimerPort + DelayNs)) -> ! {
        warn!(
            "Diagnostic blink: {}ms off / {}ms on (firmware hang detected on previous boot)",
            self.off_ms, self.on_ms
        );
        hw.set_fan(false);
        loop {
            self.cycle(hw);
        }
    }

    /// One period of the pattern: off, then on, ending with the fan off.
    pub fn cycle(&self, hw: &mut (impl FanPort + TimerPort + DelayNs)) {
        self.hold(hw, self.off_ms);
        hw.set_fan(true);
        self.hold(hw, self.on_ms);
        hw.set_fan(false);
    }

    /// Watchdog re-arms performed by one [`cycle`](Self::cycle).
    pub fn feeds_per_cycle(&self) -> u32 {
        self.slices(self.off_ms) + self.slices(self.on_ms)
    }

    fn slices(&self, ms: u32) -> u32 {
        ms.saturating_mul(1_000).div_ceil(self.feed_interval_us)
    }

    fn hold(&self, hw: &mut (impl TimerPort + DelayNs), ms: u32) {
        for _ in 0..self.slices(ms) {
            hw.arm_next();
            hw.delay_us(self.feed_interval_us);
        }
    }
}
