//! Button-driven override controller.
//!
//! The loop runs every ~64 ms, slower than any contact bounce, so the raw
//! button level is sampled directly and no debounce filter is needed.
//!
//! | Mode       | Press → | Immediate fan |
//! |------------|---------|---------------|
//! | `None`     | ForceOn | on            |
//! | `ForceOn`  | ForceOff| off           |
//! | `ForceOff` | None    | (decision)    |
//!
//! Returning to `None` while cold also expires the cool-down window, so the
//! fan does not spin up for a "cool-down" left over from before the fan
//! was forced off.

use super::{ControlState, OverrideMode};
use crate::ticks::ticks_before;

/// Outcome of a press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideTransition {
    pub from: OverrideMode,
    pub to: OverrideMode,
    /// Fan level to drive right away, if the new mode dictates one.
    pub fan: Option<bool>,
}

/// Track the button level and cycle the override on a press edge.
///
/// Release edges only update `button_held`.
pub fn poll(state: &mut ControlState, pressed: bool, cool_hold: u8) -> Option<OverrideTransition> {
    if pressed == state.button_held {
        return None;
    }
    state.button_held = pressed;
    if !pressed {
        return None;
    }

    let from = state.override_mode;
    let to = from.next();
    state.override_mode = to;

    let fan = match to {
        OverrideMode::ForceOn => Some(true),
        OverrideMode::ForceOff => Some(false),
        OverrideMode::None => {
            if !state.is_hot {
                state.last_hot_tick = ticks_before(state.tick, cool_hold);
            }
            None
        }
    };

    Some(OverrideTransition { from, to, fan })
}
