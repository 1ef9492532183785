//! Interrupt-driven event flags.
//!
//! Events are produced by:
//! - the periodic tick timer (one [`Event::Tick`] per period)
//! - the analog front end ([`Event::ConversionComplete`])
//!
//! and consumed by the main control loop. Producers only ever *set* a bit;
//! the loop is the only consumer and the only writer of control state.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Tick timer  │────▶│  IrqEvents   │────▶│  Main Loop   │
//! │ ADC done    │────▶│ (AtomicU8)   │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! A pending event is a single bit, not a queue: two ticks that arrive
//! before the loop consumes the first collapse into one, exactly like a
//! hardware interrupt flag.

use core::sync::atomic::{AtomicU8, Ordering};

/// Interrupt event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    /// The periodic timer elapsed.
    Tick = 0b0000_0001,
    /// The analog conversion finished.
    ConversionComplete = 0b0000_0010,
}

impl Event {
    const fn mask(self) -> u8 {
        self as u8
    }
}

/// Pending-event bitmask shared between interrupt context and the loop.
#[derive(Debug, Default)]
pub struct IrqEvents {
    pending: AtomicU8,
}

impl IrqEvents {
    pub const fn new() -> Self {
        Self {
            pending: AtomicU8::new(0),
        }
    }

    /// Mark an event pending.
    /// Safe to call from ISR / timer-task context (lock-free).
    pub fn signal(&self, event: Event) {
        self.pending.fetch_or(event.mask(), Ordering::Release);
    }

    /// Consume an event. Returns `true` if it was pending.
    pub fn take(&self, event: Event) -> bool {
        self.pending.fetch_and(!event.mask(), Ordering::AcqRel) & event.mask() != 0
    }

    /// Check an event without consuming it.
    pub fn is_pending(&self, event: Event) -> bool {
        self.pending.load(Ordering::Acquire) & event.mask() != 0
    }
}

/// Events raised by the on-chip timer and ADC paths.
pub static IRQ: IrqEvents = IrqEvents::new();
