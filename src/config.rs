//! Startup settings file
//!
//! The TOML equivalent of the kernel driver's module parameters: one field
//! per settable attribute, every field optional. Values fold into an
//! [`InitialSettings`] that the controller applies during initialization.
//!
//! ```toml
//! colour_left = 0xFF8800
//! colour_centre = 0xFFFFFF
//! colour_right = 0x0088FF
//! colour_extra = 0xFFFFFF
//! preset = 0
//! brightness = 255
//! power_on = true
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use entroware_keyboard::{InitialSettings, PRESET_COUNT};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub colour_left: Option<u32>,
    pub colour_centre: Option<u32>,
    pub colour_right: Option<u32>,
    pub colour_extra: Option<u32>,
    pub preset: Option<usize>,
    pub brightness: Option<u8>,
    pub power_on: Option<bool>,
}

impl Config {
    /// Load and validate a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, colour) in [
            ("colour_left", self.colour_left),
            ("colour_centre", self.colour_centre),
            ("colour_right", self.colour_right),
            ("colour_extra", self.colour_extra),
        ] {
            if let Some(c) = colour {
                if c > 0xFF_FFFF {
                    bail!("{name} = {c:#x} does not fit in 24 bits");
                }
            }
        }
        if let Some(p) = self.preset {
            if p >= PRESET_COUNT {
                bail!("preset = {p} is out of range (table has {PRESET_COUNT} entries)");
            }
        }
        Ok(())
    }

    /// Fold onto the firmware defaults.
    pub fn into_settings(self) -> InitialSettings {
        let defaults = InitialSettings::default();
        InitialSettings {
            colour_left: self.colour_left.unwrap_or(defaults.colour_left),
            colour_centre: self.colour_centre.unwrap_or(defaults.colour_centre),
            colour_right: self.colour_right.unwrap_or(defaults.colour_right),
            colour_extra: self.colour_extra.unwrap_or(defaults.colour_extra),
            preset: self.preset.unwrap_or(defaults.preset),
            brightness: self.brightness.unwrap_or(defaults.brightness),
            power_on: self.power_on.unwrap_or(defaults.power_on),
        }
    }
}
