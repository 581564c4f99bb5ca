//! Simulated firmware backend
//!
//! The real control channel lives in the kernel's WMI layer; this backend
//! stands in for it so the CLI and manual testing work on any machine. It
//! accepts every command, optionally refusing the Extra region to emulate
//! a 3-zone unit, and keeps no state of its own — the controller is the
//! authority on what was committed.

use tracing::debug;

use entroware_keyboard::protocol::region;
use entroware_wmi::{WmiError, WmiMethod, WmiTransport};

const REGION_MASK: u32 = 0xFF00_0000;

pub struct SimulatedWmi {
    extra_zone: bool,
}

impl SimulatedWmi {
    /// Simulated unit; `extra_zone` controls whether the probe succeeds.
    pub fn new(extra_zone: bool) -> Self {
        Self { extra_zone }
    }
}

impl WmiTransport for SimulatedWmi {
    fn evaluate(&self, method: WmiMethod, arg: u32) -> Result<u32, WmiError> {
        match method {
            WmiMethod::GetEvent => Ok(0),
            WmiMethod::GetAp => Ok(0),
            WmiMethod::SetKbLed => {
                if !self.extra_zone && arg & REGION_MASK == region::EXTRA {
                    return Err(WmiError::MethodFailed {
                        method: method.id(),
                        arg,
                    });
                }
                debug!("sim: accepted command word {:#010x}", arg);
                Ok(0)
            }
        }
    }
}
