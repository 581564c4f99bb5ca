//! Hardware notification dispatch
//!
//! Maps a raw event code onto a controller operation. The relative
//! operations (brightness steps, preset cycling, power toggle) read the
//! current committed state to compute the next value, then go through the
//! ordinary validate/encode/call/commit path.

use tracing::warn;

use entroware_wmi::{WmiMethod, WmiTransport};

use crate::error::KeyboardError;
use crate::preset::PRESET_COUNT;
use crate::protocol::{decode_event, DecodedEvent, BRIGHTNESS_STEP};
use crate::KeyboardController;

impl<T: WmiTransport> KeyboardController<T> {
    /// Handle a raw notification code delivered by the host.
    ///
    /// Brightness steps clamp at the range ends rather than stepping past
    /// them; unknown codes are reported and dispatched to no operation.
    /// Returns the decoded event so the host can surface it.
    pub fn handle_event(&mut self, raw_code: u32) -> Result<DecodedEvent, KeyboardError> {
        let event = decode_event(raw_code);
        match event {
            DecodedEvent::BrightnessDown => {
                let level = self.state().brightness().saturating_sub(BRIGHTNESS_STEP);
                self.set_brightness(level as u32)?;
            }
            DecodedEvent::BrightnessUp => {
                let level = self.state().brightness().saturating_add(BRIGHTNESS_STEP);
                self.set_brightness(level as u32)?;
            }
            DecodedEvent::NextPreset => {
                let next = (self.state().active_preset() + 1) % PRESET_COUNT;
                self.set_preset(next)?;
            }
            DecodedEvent::TogglePower => {
                let on = !self.state().power_on();
                self.set_power(on)?;
            }
            DecodedEvent::Unknown(code) => {
                warn!("unknown WMI event code {:#04x}", code);
            }
        }
        Ok(event)
    }

    /// Fetch the pending event code from the firmware and dispatch it.
    ///
    /// Hosts wire this to the WMI notify callback: the notification itself
    /// carries no payload, so the code is read back through `GET_EVENT`.
    pub fn poll_and_handle_event(&mut self) -> Result<DecodedEvent, KeyboardError> {
        let code = self.transport_ref().evaluate(WmiMethod::GetEvent, 0)?;
        self.handle_event(code)
    }
}
