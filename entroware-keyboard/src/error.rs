//! Keyboard interface error types

use entroware_wmi::WmiError;
use thiserror::Error;

/// Errors from keyboard operations.
///
/// Validation and capability errors are raised before any transport call;
/// a transport error means the firmware round-trip failed and the in-memory
/// state was left untouched. Nothing here is fatal — every failure is local
/// to the one requested operation.
#[derive(Error, Debug)]
pub enum KeyboardError {
    /// Transport layer error
    #[error("Transport error: {0}")]
    Transport(#[from] WmiError),

    /// Colour value not representable in 24 bits
    #[error("Invalid colour {0:#x}: must be a 24-bit RGB value")]
    InvalidColour(u32),

    /// Preset index outside the table
    #[error("Invalid preset index {0}: table has {count} entries", count = crate::preset::PRESET_COUNT)]
    InvalidPreset(usize),

    /// The probed hardware has no Extra zone
    #[error("Extra zone not supported by this keyboard")]
    ExtraZoneNotSupported,
}
