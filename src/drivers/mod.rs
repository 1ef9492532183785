//! Actuator/input drivers, hardware initialisation, and supervision.

pub mod button;
pub mod fan;
pub mod hw_init;
pub mod hw_timer;
pub mod watchdog;
