//! WMI method-call transport boundary for Entroware keyboard firmware
//!
//! The keyboard firmware is driven through a Clevo ACPI-WMI control method:
//! one blocking round-trip per invocation, taking a method id and a 32-bit
//! argument word and returning a 32-bit integer result. This crate owns that
//! boundary: the [`WmiTransport`] trait, its error type, and a tracing
//! middleware for monitoring traffic. The actual channel (kernel WMI, a
//! simulator, a test mock) is supplied by the consumer.

pub mod error;
pub mod trace;

pub use error::WmiError;
pub use trace::TraceWmi;

use std::fmt;

/// Clevo WMI GUIDs for the control and event interfaces.
///
/// A real backend refuses to come up when either GUID is absent; kept here
/// so every backend checks against the same identifiers.
pub mod guid {
    /// Event notification interface
    pub const EVENT: &str = "ABBC0F6B-8EA1-11D1-00A0-C90629100000";
    /// Control method interface
    pub const CONTROL: &str = "ABBC0F6D-8EA1-11D1-00A0-C90629100000";
}

/// Method ids understood by the Clevo control interface.
///
/// Carried as an enum rather than bare integers so a caller cannot hand an
/// arbitrary id to the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum WmiMethod {
    /// Fetch the pending hardware event code
    GetEvent = 0x01,
    /// Airplane-mode/keyboard status query issued on probe and resume
    GetAp = 0x46,
    /// Backlight command register (colour, brightness, power words)
    SetKbLed = 0x67,
}

impl WmiMethod {
    /// Wire value passed to the firmware.
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Human-readable name for logging.
    pub fn name(self) -> &'static str {
        match self {
            WmiMethod::GetEvent => "GET_EVENT",
            WmiMethod::GetAp => "GET_AP",
            WmiMethod::SetKbLed => "SET_KB_LED",
        }
    }
}

impl fmt::Display for WmiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The synchronous method-call transport.
///
/// One blocking round-trip per invocation. Implementations must not retry
/// internally: the controller treats any `Err` as "this one operation did
/// not happen" and leaves its state untouched.
pub trait WmiTransport {
    /// Evaluate a firmware method with a 32-bit argument word.
    ///
    /// The returned integer is meaningful only for query methods
    /// ([`WmiMethod::GetEvent`], [`WmiMethod::GetAp`]); write commands
    /// ignore it.
    fn evaluate(&self, method: WmiMethod, arg: u32) -> Result<u32, WmiError>;
}

impl<T: WmiTransport + ?Sized> WmiTransport for Box<T> {
    fn evaluate(&self, method: WmiMethod, arg: u32) -> Result<u32, WmiError> {
        (**self).evaluate(method, arg)
    }
}
