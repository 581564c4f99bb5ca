//! Command words and event codes for the backlight firmware
//!
//! Every command the firmware accepts is a single unsigned 32-bit word
//! passed through the `SET_KB_LED` WMI method. This module holds the word
//! layouts and the pure encode/decode transforms; nothing here performs a
//! call or touches state, and every function is total — validation happens
//! in the controller before a value reaches this layer.

use crate::state::Zone;

/// Region base words for zone-colour commands
pub mod region {
    pub const LEFT: u32 = 0xF000_0000;
    pub const CENTRE: u32 = 0xF100_0000;
    pub const RIGHT: u32 = 0xF200_0000;
    pub const EXTRA: u32 = 0xF300_0000;
}

/// Base word for brightness commands; the level occupies the low byte
pub const BRIGHTNESS_BASE: u32 = 0xF400_0000;

/// Power command base and its two fixed suffixes.
///
/// The suffixes are opaque magic values from the firmware contract, not
/// derived from anything.
pub mod power {
    pub const BASE: u32 = 0xE000_0000;
    pub const ON: u32 = 0x07_F001;
    pub const OFF: u32 = 0x00_3001;
}

/// Hardware event codes delivered through the WMI notify channel
pub mod event {
    pub const BRIGHTNESS_DOWN: u32 = 0x81;
    pub const BRIGHTNESS_UP: u32 = 0x82;
    pub const NEXT_PRESET: u32 = 0x83;
    pub const TOGGLE_POWER: u32 = 0x9F;
}

/// Largest well-formed 24-bit RGB value
pub const COLOUR_MAX: u32 = 0xFF_FFFF;

/// Brightness range and the step used by the hardware Fn keys.
///
/// Three steps of 85 span the full range exactly: 255 → 170 → 85 → 0.
pub const BRIGHTNESS_MIN: u8 = 0;
pub const BRIGHTNESS_MAX: u8 = 255;
pub const BRIGHTNESS_STEP: u8 = 85;

/// A hardware notification decoded from its raw event code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedEvent {
    BrightnessDown,
    BrightnessUp,
    NextPreset,
    TogglePower,
    Unknown(u32),
}

/// Rotate a 24-bit value right by one byte: (R,G,B) → (B,R,G).
///
/// The firmware consumes colours in this byte-rotated layout. It is a fixed
/// wire permutation, not a colour-space change; [`rotate_left_24`] is the
/// exact inverse, and three right rotations return the original value.
pub fn rotate_right_24(rgb: u32) -> u32 {
    ((rgb & 0x0000_FF) << 16) | ((rgb & 0xFF_0000) >> 8) | ((rgb & 0x00_FF00) >> 8)
}

/// Rotate a 24-bit value left by one byte: (R,G,B) → (G,B,R).
///
/// Inverse of [`rotate_right_24`]. Colour readback is not part of the
/// firmware contract, so this is exercised only by the round-trip law.
pub fn rotate_left_24(rgb: u32) -> u32 {
    ((rgb & 0x00_FFFF) << 8) | ((rgb & 0xFF_0000) >> 16)
}

/// Encode a zone-colour command word.
///
/// `rgb` must already be a well-formed 24-bit value.
pub fn encode_zone_colour(zone: Zone, rgb: u32) -> u32 {
    let base = match zone {
        Zone::Left => region::LEFT,
        Zone::Centre => region::CENTRE,
        Zone::Right => region::RIGHT,
        Zone::Extra => region::EXTRA,
    };
    base | rotate_right_24(rgb)
}

/// Encode a brightness command word. `level` is used verbatim in the low byte.
pub fn encode_brightness(level: u8) -> u32 {
    BRIGHTNESS_BASE | level as u32
}

/// Encode a power-state command word.
pub fn encode_power(on: bool) -> u32 {
    power::BASE | if on { power::ON } else { power::OFF }
}

/// Encode a preset-select command word.
///
/// The hardware key is passed verbatim: the WMI method itself selects the
/// target register, so no base flag is added at this layer (unlike colour,
/// brightness and power).
pub fn encode_preset(hardware_key: u8) -> u32 {
    hardware_key as u32
}

/// Decode a raw notification code into an event
pub fn decode_event(code: u32) -> DecodedEvent {
    match code {
        event::BRIGHTNESS_DOWN => DecodedEvent::BrightnessDown,
        event::BRIGHTNESS_UP => DecodedEvent::BrightnessUp,
        event::NEXT_PRESET => DecodedEvent::NextPreset,
        event::TOGGLE_POWER => DecodedEvent::TogglePower,
        other => DecodedEvent::Unknown(other),
    }
}
