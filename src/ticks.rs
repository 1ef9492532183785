//! 8-bit wrapping time base.
//!
//! The tick counter is the only clock the controller has. It wraps every
//! 256 ticks (~16 s at 64 ms), so every elapsed-time comparison goes
//! through [`ticks_since`].

/// One period of the tick timer, counted modulo 256.
pub type Tick = u8;

/// Ticks elapsed from `then` to `now`, modulo 256.
#[inline]
pub const fn ticks_since(now: Tick, then: Tick) -> u8 {
    now.wrapping_sub(then)
}

/// The tick `ticks` periods before `now`.
#[inline]
pub const fn ticks_before(now: Tick, ticks: u8) -> Tick {
    now.wrapping_sub(ticks)
}
