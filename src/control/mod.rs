//! Control core: the state record and the three per-tick stages.
//!
//! ```text
//!  tick ──▶ sampler ──▶ override ──▶ decision ──▶ fan
//! ```
//!
//! Each stage is a plain function over [`ControlState`]; none of them touch
//! hardware. [`FanService`](crate::app::service::FanService) runs them in
//! order and applies the outputs through the port traits.

pub mod decision;
pub mod override_mode;
pub mod sampler;

use crate::config::ControlConfig;
use crate::ticks::{Tick, ticks_before};

/// Manual override selected with the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideMode {
    /// Automatic control from temperature.
    #[default]
    None,
    ForceOn,
    ForceOff,
}

impl OverrideMode {
    /// The mode after one button press.
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::ForceOn,
            Self::ForceOn => Self::ForceOff,
            Self::ForceOff => Self::None,
        }
    }
}

/// The single mutable record the main loop owns.
///
/// Interrupt handlers never see this; they only raise
/// [`IrqEvents`](crate::events::IrqEvents) bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Time base, advanced once per consumed timer interrupt.
    pub tick: Tick,
    /// Tick of the last temperature sample.
    pub last_sample_tick: Tick,
    /// Last tick the system was hot; `last_hot_tick + cool_hold` is the
    /// cool-down deadline.
    pub last_hot_tick: Tick,
    /// Hysteresis classification of the last sample.
    pub is_hot: bool,
    /// Button level seen on the previous iteration.
    pub button_held: bool,
    pub override_mode: OverrideMode,
    /// Level last driven to the fan.
    pub fan_on: bool,
}

impl ControlState {
    /// State for a normal power-up.
    ///
    /// `last_hot_tick` is seeded so the cool-down window ends exactly
    /// `boot_burst_ticks` after tick 0, which runs the fan briefly to clear
    /// the enclosure.
    pub fn at_boot(config: &ControlConfig) -> Self {
        Self {
            tick: 0,
            last_sample_tick: 0,
            last_hot_tick: ticks_before(0, config.cool_hold_ticks)
                .wrapping_add(config.boot_burst_ticks),
            is_hot: false,
            button_held: false,
            override_mode: OverrideMode::None,
            fan_on: false,
        }
    }
}
