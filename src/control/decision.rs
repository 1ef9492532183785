//! Fan decision engine.
//!
//! Recomputes the fan level from scratch every iteration. The result is
//! always driven, even when unchanged, so a glitched output latch is
//! corrected within one tick.

use super::{ControlState, OverrideMode};
use crate::ticks::{ticks_before, ticks_since};

/// Decide the fan level for the current tick.
///
/// Under automatic control the fan runs while hot and for `cool_hold`
/// ticks after the last hot tick. Once the window has expired,
/// `last_hot_tick` is pinned to exactly `cool_hold` ticks ago so the
/// 8-bit difference never wraps back into the window.
pub fn decide(state: &mut ControlState, cool_hold: u8) -> bool {
    match state.override_mode {
        OverrideMode::ForceOn => true,
        OverrideMode::ForceOff => false,
        OverrideMode::None => {
            if state.is_hot || ticks_since(state.tick, state.last_hot_tick) < cool_hold {
                true
            } else {
                state.last_hot_tick = ticks_before(state.tick, cool_hold);
                false
            }
        }
    }
}
