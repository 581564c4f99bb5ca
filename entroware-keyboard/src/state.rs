//! Authoritative in-memory keyboard state
//!
//! One instance per controller, alive for the process lifetime. Only the
//! controller mutates it (the setters are `pub(crate)`), and only after the
//! corresponding firmware command has succeeded, so readers can never
//! observe a value the hardware was not told about or anything outside the
//! documented ranges.

use std::fmt;
use std::str::FromStr;

use crate::preset::CUSTOM_PRESET;
use crate::protocol::BRIGHTNESS_MAX;

/// An addressable lighting region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    Centre,
    Right,
    /// Present only on some units; detected by probing at startup
    Extra,
}

impl Zone {
    /// The three zones every unit has
    pub const STANDARD: [Zone; 3] = [Zone::Left, Zone::Centre, Zone::Right];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Zone::Left => "left",
            Zone::Centre => "centre",
            Zone::Right => "right",
            Zone::Extra => "extra",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Zone::Left),
            "centre" | "center" => Ok(Zone::Centre),
            "right" => Ok(Zone::Right),
            "extra" => Ok(Zone::Extra),
            _ => Err(format!(
                "unknown zone: \"{s}\". Use left, centre, right or extra"
            )),
        }
    }
}

/// Default colour for every zone (white)
pub const DEFAULT_COLOUR: u32 = 0xFFFFFF;

/// Snapshot-style record of the last state the firmware acknowledged.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    power_on: bool,
    brightness: u8,
    active_preset: usize,
    left: u32,
    centre: u32,
    right: u32,
    /// Absent until the capability probe has confirmed the zone exists
    extra: Option<u32>,
    extra_zone_supported: bool,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            power_on: true,
            brightness: BRIGHTNESS_MAX,
            active_preset: CUSTOM_PRESET,
            left: DEFAULT_COLOUR,
            centre: DEFAULT_COLOUR,
            right: DEFAULT_COLOUR,
            extra: None,
            extra_zone_supported: false,
        }
    }
}

impl KeyboardState {
    /// Whether the backlight is on, per the last committed power command
    pub fn power_on(&self) -> bool {
        self.power_on
    }

    /// Current brightness, always in `[0, 255]`
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Index of the active preset, always a valid table index
    pub fn active_preset(&self) -> usize {
        self.active_preset
    }

    /// Whether the unit has the Extra zone (fixed after the startup probe)
    pub fn extra_zone_supported(&self) -> bool {
        self.extra_zone_supported
    }

    /// Current colour of a zone.
    ///
    /// Returns `None` for [`Zone::Extra`] on units without it; callers must
    /// check [`extra_zone_supported`](Self::extra_zone_supported) first.
    pub fn zone_colour(&self, zone: Zone) -> Option<u32> {
        match zone {
            Zone::Left => Some(self.left),
            Zone::Centre => Some(self.centre),
            Zone::Right => Some(self.right),
            Zone::Extra => self.extra,
        }
    }

    pub(crate) fn commit_power(&mut self, on: bool) {
        self.power_on = on;
    }

    pub(crate) fn commit_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    pub(crate) fn commit_preset(&mut self, index: usize) {
        self.active_preset = index;
    }

    pub(crate) fn commit_zone_colour(&mut self, zone: Zone, rgb: u32) {
        match zone {
            Zone::Left => self.left = rgb,
            Zone::Centre => self.centre = rgb,
            Zone::Right => self.right = rgb,
            Zone::Extra => self.extra = Some(rgb),
        }
    }

    pub(crate) fn set_extra_zone_supported(&mut self, supported: bool) {
        self.extra_zone_supported = supported;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_power_up() {
        let state = KeyboardState::default();
        assert!(state.power_on());
        assert_eq!(state.brightness(), 255);
        assert_eq!(state.active_preset(), CUSTOM_PRESET);
        for zone in Zone::STANDARD {
            assert_eq!(state.zone_colour(zone), Some(DEFAULT_COLOUR));
        }
        assert!(!state.extra_zone_supported());
        assert_eq!(state.zone_colour(Zone::Extra), None);
    }

    #[test]
    fn zone_parsing_accepts_both_spellings() {
        assert_eq!("centre".parse::<Zone>().unwrap(), Zone::Centre);
        assert_eq!("center".parse::<Zone>().unwrap(), Zone::Centre);
        assert!("middle".parse::<Zone>().is_err());
    }
}
