//! The named colour preset table
//!
//! Seven fixed, 0-indexed entries. Index 0 ("white") is the distinguished
//! custom/default preset: selecting it restores the per-zone custom colours
//! instead of forcing a uniform one. The table is read-only at runtime;
//! range checks on indices are the controller's job.

/// A named colour preset understood by the firmware.
///
/// Hardware key, colour and name travel together so an index can never
/// desynchronize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Small id the firmware uses to select this preset
    pub hardware_key: u8,
    /// Uniform 24-bit colour applied to Left/Centre/Right
    pub colour: u32,
    /// Display name
    pub name: &'static str,
}

/// Index of the distinguished custom/default preset
pub const CUSTOM_PRESET: usize = 0;

/// The fixed preset table, in hardware order
pub const PRESETS: [Preset; 7] = [
    Preset { hardware_key: 0, colour: 0xFFFFFF, name: "white" },
    Preset { hardware_key: 1, colour: 0x0000FF, name: "blue" },
    Preset { hardware_key: 2, colour: 0x00FFFF, name: "cyan" },
    Preset { hardware_key: 3, colour: 0xFF0000, name: "red" },
    Preset { hardware_key: 4, colour: 0x00FF00, name: "green" },
    Preset { hardware_key: 5, colour: 0xFFFF00, name: "yellow" },
    Preset { hardware_key: 6, colour: 0xFF00FF, name: "magenta" },
];

/// Number of presets in the table
pub const PRESET_COUNT: usize = PRESETS.len();

impl Preset {
    /// Look up a preset index by name (case-insensitive).
    pub fn index_by_name(name: &str) -> Option<usize> {
        PRESETS
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }
}
