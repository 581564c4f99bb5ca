//! The keyboard controller: validate → encode → call → commit
//!
//! Every settable attribute goes through the same protocol: validate or
//! clamp the input, encode the command word, issue the transport call, and
//! only on success commit the new value into [`KeyboardState`]. A failed
//! call leaves the state exactly as it was; the controller never retries.
//!
//! The host environment serializes all entry points, so the controller
//! holds the state by plain ownership with no locking.

use tracing::{debug, info};

use entroware_wmi::{WmiMethod, WmiTransport};

use crate::error::KeyboardError;
use crate::preset::{CUSTOM_PRESET, PRESETS, PRESET_COUNT};
use crate::protocol::{
    encode_brightness, encode_power, encode_preset, encode_zone_colour, BRIGHTNESS_MAX, COLOUR_MAX,
};
use crate::state::{KeyboardState, Zone, DEFAULT_COLOUR};

/// Externally supplied startup values, one per settable attribute.
///
/// These mirror the kernel driver's module parameters. [`initialize`]
/// applies them in the fixed order zone colours → preset → brightness →
/// power.
///
/// [`initialize`]: KeyboardController::initialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialSettings {
    pub colour_left: u32,
    pub colour_centre: u32,
    pub colour_right: u32,
    /// Applied only when the capability probe finds an Extra zone
    pub colour_extra: u32,
    pub preset: usize,
    pub brightness: u8,
    pub power_on: bool,
}

impl Default for InitialSettings {
    fn default() -> Self {
        Self {
            colour_left: DEFAULT_COLOUR,
            colour_centre: DEFAULT_COLOUR,
            colour_right: DEFAULT_COLOUR,
            colour_extra: DEFAULT_COLOUR,
            preset: CUSTOM_PRESET,
            brightness: BRIGHTNESS_MAX,
            power_on: true,
        }
    }
}

/// Controller owning the transport and the authoritative state.
pub struct KeyboardController<T: WmiTransport> {
    transport: T,
    state: KeyboardState,
}

impl<T: WmiTransport> KeyboardController<T> {
    /// Create a controller over a transport.
    ///
    /// [`initialize`](Self::initialize) must be called exactly once before
    /// any other operation; until then the Extra zone is treated as absent.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: KeyboardState::default(),
        }
    }

    /// Read-only snapshot of the committed state
    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub(crate) fn transport_ref(&self) -> &T {
        &self.transport
    }

    /// Issue a backlight command word through the control method.
    fn send(&self, word: u32) -> Result<(), KeyboardError> {
        self.transport.evaluate(WmiMethod::SetKbLed, word)?;
        Ok(())
    }

    /// Turn the backlight on or off.
    pub fn set_power(&mut self, on: bool) -> Result<(), KeyboardError> {
        self.send(encode_power(on))?;
        self.state.commit_power(on);
        info!("state: {}", if on { 1 } else { 0 });
        Ok(())
    }

    /// Set the colour of one zone.
    ///
    /// Rejects colours outside 24 bits, and the Extra zone on units the
    /// probe found not to have one — in both cases without touching the
    /// transport.
    pub fn set_zone_colour(&mut self, zone: Zone, rgb: u32) -> Result<(), KeyboardError> {
        if rgb > COLOUR_MAX {
            return Err(KeyboardError::InvalidColour(rgb));
        }
        if zone == Zone::Extra && !self.state.extra_zone_supported() {
            return Err(KeyboardError::ExtraZoneNotSupported);
        }
        self.send(encode_zone_colour(zone, rgb))?;
        self.state.commit_zone_colour(zone, rgb);
        info!("colour {}: {:06x}", zone, rgb);
        Ok(())
    }

    /// Set the global brightness.
    ///
    /// Out-of-range values are clamped to `[0, 255]` rather than rejected,
    /// matching the hardware-facing contract.
    pub fn set_brightness(&mut self, level: u32) -> Result<(), KeyboardError> {
        let level = level.min(BRIGHTNESS_MAX as u32) as u8;
        self.send(encode_brightness(level))?;
        self.state.commit_brightness(level);
        info!("brightness: {}", level);
        Ok(())
    }

    /// Select a preset by table index.
    ///
    /// After the select command succeeds the index is committed, then the
    /// affected zone colours are re-issued one at a time: the preset colour
    /// to Left/Centre/Right for a real preset, or the stored custom colours
    /// to every zone (Extra included, when present) for preset 0. A failure
    /// in one of those sub-steps aborts the rest but does not roll back the
    /// zones already applied — the underlying protocol is step-wise and the
    /// firmware offers no transaction to lean on.
    pub fn set_preset(&mut self, index: usize) -> Result<(), KeyboardError> {
        if index >= PRESET_COUNT {
            return Err(KeyboardError::InvalidPreset(index));
        }
        let preset = PRESETS[index];
        self.send(encode_preset(preset.hardware_key))?;
        self.state.commit_preset(index);
        info!("colour: {}", preset.name);

        if index != CUSTOM_PRESET {
            // Uniform preset colour across the three standard zones; the
            // Extra zone keeps its custom colour.
            for zone in Zone::STANDARD {
                self.send(encode_zone_colour(zone, preset.colour))?;
                self.state.commit_zone_colour(zone, preset.colour);
            }
        } else {
            // Preset 0 restores the custom colours, not the table's white.
            for zone in Zone::STANDARD {
                let rgb = self.state.zone_colour(zone).unwrap_or(DEFAULT_COLOUR);
                self.send(encode_zone_colour(zone, rgb))?;
            }
            if let Some(rgb) = self.state.zone_colour(Zone::Extra) {
                self.send(encode_zone_colour(Zone::Extra, rgb))?;
            }
        }
        Ok(())
    }

    /// One-shot startup probe for the Extra zone.
    ///
    /// Attempts to set the Extra zone to the default colour. A transport
    /// failure is the expected "not supported" outcome, not an error; on
    /// success the default colour is committed and the capability latched.
    pub fn probe_extra_zone_support(&mut self) -> bool {
        match self.send(encode_zone_colour(Zone::Extra, DEFAULT_COLOUR)) {
            Ok(()) => {
                self.state.set_extra_zone_supported(true);
                self.state.commit_zone_colour(Zone::Extra, DEFAULT_COLOUR);
                true
            }
            Err(e) => {
                debug!("keyboard does not support the extra zone: {}", e);
                self.state.set_extra_zone_supported(false);
                false
            }
        }
    }

    /// Initialization entry point; call exactly once before anything else.
    ///
    /// Probes the Extra zone, then applies the supplied startup values in
    /// the fixed order zone colours → preset → brightness → power.
    pub fn initialize(&mut self, init: &InitialSettings) -> Result<(), KeyboardError> {
        // Status query the firmware expects on probe and resume; the result
        // is not used here.
        if let Err(e) = self.transport.evaluate(WmiMethod::GetAp, 0) {
            debug!("GET_AP query failed: {}", e);
        }

        let has_extra = self.probe_extra_zone_support();

        self.set_zone_colour(Zone::Left, init.colour_left)?;
        self.set_zone_colour(Zone::Centre, init.colour_centre)?;
        self.set_zone_colour(Zone::Right, init.colour_right)?;
        if has_extra {
            self.set_zone_colour(Zone::Extra, init.colour_extra)?;
        }

        self.set_preset(init.preset)?;
        self.set_brightness(init.brightness as u32)?;
        self.set_power(init.power_on)?;
        Ok(())
    }
}
