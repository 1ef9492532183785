//! Application core — control logic behind port traits.
//!
//! The boot dispatcher, the normal-mode [`service::FanService`] and the
//! events it reports. All interaction with hardware happens through the
//! **port traits** in [`ports`], so this layer runs on the host against
//! mock adapters.

pub mod boot;
pub mod events;
pub mod ports;
pub mod service;
