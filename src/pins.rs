//! GPIO / peripheral pin assignments for the fan controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Fan
// ---------------------------------------------------------------------------

/// Digital output to the fan MOSFET gate. HIGH = fan running.
pub const FAN_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Override button (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button to ground.
pub const BUTTON_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Temperature sense (ADC1)
// ---------------------------------------------------------------------------

/// Thermistor divider midpoint, on an ADC1-capable pad
/// ([`ADC1_CH_TEMP`](crate::drivers::hw_init::ADC1_CH_TEMP)).
pub const TEMP_ADC_GPIO: i32 = 2;

/// Feeds the top of the thermistor divider; driven HIGH only while sampling.
pub const TEMP_SENSE_POWER_GPIO: i32 = 3;
