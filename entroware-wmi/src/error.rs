//! Transport error types

use thiserror::Error;

/// Errors that can occur during a WMI method call
#[derive(Error, Debug)]
pub enum WmiError {
    /// The control or event GUID is not exposed by this machine's ACPI tables
    #[error("WMI interface not present: {0}")]
    InterfaceNotPresent(String),

    /// The firmware rejected or failed the method evaluation
    #[error("WMI method {method:#04x} failed with argument {arg:#010x}")]
    MethodFailed { method: u32, arg: u32 },

    /// The method returned something other than an integer
    #[error("Unexpected result type from method {0:#04x}")]
    UnexpectedResult(u32),

    /// Backend-specific failure (I/O, permissions)
    #[error("Transport backend error: {0}")]
    Backend(String),
}
