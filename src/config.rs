//! Control parameters
//!
//! All tunable parameters for the fan controller. Times are expressed in
//! ticks of the periodic timer (~64 ms) unless the field name says otherwise.
//! There is no persistence: the firmware runs on [`ControlConfig::default`].

use serde::Serialize;

use crate::error::{Error, Result};

/// Core control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlConfig {
    // --- Hysteresis (raw proxy units, lower = hotter) ---
    /// Readings below this are classified hot.
    pub hot_threshold: u8,
    /// Readings above this are classified cool.
    pub cool_threshold: u8,

    // --- Timing (ticks) ---
    /// Keep the fan on this long after the last hot observation.
    pub cool_hold_ticks: u8,
    /// How often to measure temperature.
    pub sample_interval_ticks: u8,
    /// Forced airflow after a normal power-up.
    pub boot_burst_ticks: u8,
    /// Nominal tick period (milliseconds).
    pub tick_period_ms: u32,

    // --- Analog front end ---
    /// Settle time after powering the sense divider (microseconds).
    pub settle_us: u32,
    /// Completion-flag polls before the conversion result is read anyway.
    pub max_conversion_polls: u8,

    // --- Supervision ---
    /// Watchdog timeout for normal operation (milliseconds).
    pub watchdog_timeout_ms: u32,
    /// Fault diagnostic blink: fan off period (milliseconds).
    pub fault_blink_off_ms: u32,
    /// Fault diagnostic blink: fan on period (milliseconds).
    pub fault_blink_on_ms: u32,
    /// Watchdog re-arm slice during the diagnostic blink (microseconds).
    pub fault_feed_interval_us: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            // Sensor is 10k @ 22C against a ~40k pull-up.
            hot_threshold: 23,
            cool_threshold: 27,

            cool_hold_ticks: 125,      // ~8 s
            sample_interval_ticks: 32, // ~2 s
            boot_burst_ticks: 31,      // ~2 s
            tick_period_ms: 64,

            settle_us: 1_000,
            max_conversion_polls: 8,

            watchdog_timeout_ms: 1_000,
            fault_blink_off_ms: 2_000,
            fault_blink_on_ms: 500,
            fault_feed_interval_us: 100,
        }
    }
}

impl ControlConfig {
    /// Reject parameter sets the control loop cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.hot_threshold >= self.cool_threshold {
            return Err(Error::Config("hot_threshold must be below cool_threshold"));
        }
        if self.cool_hold_ticks == 0 {
            return Err(Error::Config("cool_hold_ticks must be non-zero"));
        }
        if self.sample_interval_ticks == 0 {
            return Err(Error::Config("sample_interval_ticks must be non-zero"));
        }
        // The boot seed is `boot_burst - cool_hold` (mod 256); a longer burst
        // would wrap into an immediately expired deadline.
        if self.boot_burst_ticks > self.cool_hold_ticks {
            return Err(Error::Config("boot_burst_ticks must not exceed cool_hold_ticks"));
        }
        if self.tick_period_ms == 0 {
            return Err(Error::Config("tick_period_ms must be non-zero"));
        }
        if self.watchdog_timeout_ms <= self.tick_period_ms {
            return Err(Error::Config("watchdog_timeout_ms must exceed tick_period_ms"));
        }
        if self.fault_feed_interval_us == 0 {
            return Err(Error::Config("fault_feed_interval_us must be non-zero"));
        }
        Ok(())
    }
}
