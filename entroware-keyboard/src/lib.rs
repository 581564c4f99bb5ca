//! High-level backlight interface for Entroware multi-zone keyboards
//!
//! The firmware exposes a small command register: per-zone RGB colour,
//! global brightness, power state and named preset selection, each issued
//! as a single 32-bit word over the WMI control method, plus asynchronous
//! event codes for the hardware Fn keys. This crate is the authoritative
//! state machine on top of that register:
//!
//! - [`protocol`] — the pure command codec and event decoder
//! - [`preset`] — the fixed table of named colour presets
//! - [`KeyboardState`] — the committed state, readable but never writable
//!   from outside the controller
//! - [`KeyboardController`] — validate → encode → call → commit for every
//!   settable attribute, plus the hardware event dispatcher
//!
//! The host environment serializes calls into this crate; nothing here
//! blocks except the transport round-trip itself.

pub mod controller;
pub mod dispatch;
pub mod error;
pub mod preset;
pub mod protocol;
pub mod state;

pub use controller::{InitialSettings, KeyboardController};
pub use error::KeyboardError;
pub use preset::{Preset, CUSTOM_PRESET, PRESETS, PRESET_COUNT};
pub use protocol::DecodedEvent;
pub use state::{KeyboardState, Zone, DEFAULT_COLOUR};
