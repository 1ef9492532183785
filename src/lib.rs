//! Benchfan firmware library.
//!
//! Exposes the control core and drivers for integration testing. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; the host build swaps in simulation stubs.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod pins;
pub mod ticks;

pub mod adapters;
pub mod drivers;
pub mod sensors;
