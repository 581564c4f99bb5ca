// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "entroware-kb")]
#[command(author, version, about = "Entroware multi-zone keyboard backlight controller")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log every WMI method call made through the transport
    #[arg(long, global = true)]
    pub monitor: bool,

    /// Startup settings file (TOML); unset fields use firmware defaults
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Simulate a 3-zone unit (the extra-zone probe fails)
    #[arg(long, global = true)]
    pub no_extra: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show power, brightness, preset and per-zone colours
    #[command(visible_aliases = ["state", "s"])]
    Status,

    /// List the named colour presets
    #[command(visible_alias = "p")]
    Presets,

    /// Turn the backlight on or off
    #[command(visible_alias = "sp")]
    SetPower {
        /// "on" or "off"
        #[arg(value_parser = parse_on_off)]
        state: bool,
    },

    /// Set one zone's colour
    #[command(visible_alias = "sc")]
    SetColour {
        /// Zone: left, centre, right or extra
        zone: entroware_keyboard::Zone,
        /// 24-bit colour as hex, e.g. FF8800 or 0xFF8800
        #[arg(value_parser = parse_colour)]
        colour: u32,
    },

    /// Set the global brightness
    #[command(visible_alias = "sb")]
    SetBrightness {
        /// Brightness level (0-255)
        #[arg(value_parser = clap::value_parser!(u16).range(0..256))]
        level: u16,
    },

    /// Select a colour preset by index or name
    #[command(visible_alias = "spr")]
    SetPreset {
        /// Preset index (0-6) or name (white, blue, cyan, red, green,
        /// yellow, magenta)
        preset: String,
    },

    /// Read hex event codes from stdin and dispatch them
    #[command(visible_alias = "ev")]
    Events,
}

fn parse_on_off(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "on" | "1" | "true" => Ok(true),
        "off" | "0" | "false" => Ok(false),
        _ => Err(format!("unknown power state: \"{s}\". Use on or off")),
    }
}

fn parse_colour(s: &str) -> Result<u32, String> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let value =
        u32::from_str_radix(hex, 16).map_err(|e| format!("invalid colour \"{s}\": {e}"))?;
    if value > 0xFF_FFFF {
        return Err(format!("colour {s} does not fit in 24 bits"));
    }
    Ok(value)
}
