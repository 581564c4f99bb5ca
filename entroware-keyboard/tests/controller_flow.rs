//! End-to-end controller behaviour over a scripted mock transport.
//!
//! The mock records every command word and can be told to fail specific
//! calls, which is enough to exercise the commit rules: no partial commit
//! on failure, the documented no-rollback window inside preset selection,
//! and the startup sequence ordering.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use entroware_keyboard::{
    DecodedEvent, InitialSettings, KeyboardController, KeyboardError, Zone, CUSTOM_PRESET,
    PRESET_COUNT,
};
use entroware_wmi::{WmiError, WmiMethod, WmiTransport};

const EXTRA_REGION: u32 = 0xF300_0000;
const REGION_MASK: u32 = 0xFF00_0000;

/// Scripted transport: records `SET_KB_LED` words in order, fails the call
/// numbers listed in `fail_on` (1-based, counted across all methods), and
/// can refuse the Extra region wholesale to emulate a 3-zone unit.
#[derive(Default)]
struct ScriptedWmi {
    words: Rc<RefCell<Vec<u32>>>,
    calls: RefCell<u32>,
    fail_on: HashSet<u32>,
    reject_extra_region: bool,
    pending_event: u32,
}

impl ScriptedWmi {
    fn new() -> Self {
        Self::default()
    }

    fn without_extra_zone() -> Self {
        Self {
            reject_extra_region: true,
            ..Self::default()
        }
    }

    fn failing_call(n: u32) -> Self {
        Self {
            fail_on: HashSet::from([n]),
            ..Self::default()
        }
    }

    /// Handle onto the recording buffer, usable after the transport has
    /// moved into the controller.
    fn recording(&self) -> Rc<RefCell<Vec<u32>>> {
        Rc::clone(&self.words)
    }
}

impl WmiTransport for ScriptedWmi {
    fn evaluate(&self, method: WmiMethod, arg: u32) -> Result<u32, WmiError> {
        let call = *self.calls.borrow() + 1;
        *self.calls.borrow_mut() = call;

        if self.fail_on.contains(&call) {
            return Err(WmiError::MethodFailed {
                method: method.id(),
                arg,
            });
        }

        match method {
            WmiMethod::GetEvent => Ok(self.pending_event),
            WmiMethod::GetAp => Ok(0),
            WmiMethod::SetKbLed => {
                if self.reject_extra_region && arg & REGION_MASK == EXTRA_REGION {
                    return Err(WmiError::MethodFailed {
                        method: method.id(),
                        arg,
                    });
                }
                self.words.borrow_mut().push(arg);
                Ok(0)
            }
        }
    }
}

/// Controller with a probed 4-zone unit, no startup values applied.
fn probed_controller() -> (KeyboardController<ScriptedWmi>, Rc<RefCell<Vec<u32>>>) {
    let transport = ScriptedWmi::new();
    let words = transport.recording();
    let mut ctrl = KeyboardController::new(transport);
    assert!(ctrl.probe_extra_zone_support());
    (ctrl, words)
}

#[test]
fn initialize_applies_values_in_fixed_order() {
    let transport = ScriptedWmi::new();
    let words = transport.recording();
    let mut ctrl = KeyboardController::new(transport);
    ctrl.initialize(&InitialSettings {
        colour_left: 0x112233,
        colour_centre: 0x445566,
        colour_right: 0x778899,
        colour_extra: 0xAABBCC,
        preset: CUSTOM_PRESET,
        brightness: 128,
        power_on: true,
    })
    .unwrap();

    let state = ctrl.state();
    assert_eq!(state.zone_colour(Zone::Left), Some(0x112233));
    assert_eq!(state.zone_colour(Zone::Extra), Some(0xAABBCC));
    assert_eq!(state.brightness(), 128);
    assert!(state.power_on());
    assert!(state.extra_zone_supported());

    // Wire order: zone colours strictly before the preset select, the
    // preset before brightness, brightness before power.
    let issued = words.borrow();
    let preset_pos = issued.iter().position(|&w| w == 0x0000_0000).unwrap();
    let brightness_pos = issued.iter().position(|&w| w == 0xF400_0080).unwrap();
    let power_pos = issued.iter().position(|&w| w == 0xE007_F001).unwrap();
    let last_colour_pos = issued
        .iter()
        .rposition(|&w| w & REGION_MASK == EXTRA_REGION)
        .unwrap();
    assert!(preset_pos < brightness_pos);
    assert!(brightness_pos < power_pos);
    assert!(last_colour_pos < power_pos);
}

#[test]
fn three_zone_unit_probes_false_and_still_initializes() {
    let mut ctrl = KeyboardController::new(ScriptedWmi::without_extra_zone());
    ctrl.initialize(&InitialSettings::default()).unwrap();
    assert!(!ctrl.state().extra_zone_supported());
    assert_eq!(ctrl.state().zone_colour(Zone::Extra), None);

    let err = ctrl.set_zone_colour(Zone::Extra, 0x123456).unwrap_err();
    assert!(matches!(err, KeyboardError::ExtraZoneNotSupported));
}

#[test]
fn preset_zero_restores_custom_colours() {
    let (mut ctrl, _words) = probed_controller();
    ctrl.set_zone_colour(Zone::Left, 0x102030).unwrap();
    ctrl.set_zone_colour(Zone::Centre, 0x405060).unwrap();
    ctrl.set_zone_colour(Zone::Right, 0x708090).unwrap();
    ctrl.set_zone_colour(Zone::Extra, 0xA0B0C0).unwrap();

    ctrl.set_preset(CUSTOM_PRESET).unwrap();
    assert_eq!(ctrl.state().zone_colour(Zone::Left), Some(0x102030));
    assert_eq!(ctrl.state().zone_colour(Zone::Centre), Some(0x405060));
    assert_eq!(ctrl.state().zone_colour(Zone::Right), Some(0x708090));
    assert_eq!(ctrl.state().zone_colour(Zone::Extra), Some(0xA0B0C0));
}

#[test]
fn uniform_preset_refreshes_standard_zones_but_not_extra() {
    let (mut ctrl, _words) = probed_controller();
    ctrl.set_zone_colour(Zone::Extra, 0xA0B0C0).unwrap();

    ctrl.set_preset(4).unwrap(); // green
    for zone in [Zone::Left, Zone::Centre, Zone::Right] {
        assert_eq!(ctrl.state().zone_colour(zone), Some(0x00FF00));
    }
    // Extra is never forced to a preset colour
    assert_eq!(ctrl.state().zone_colour(Zone::Extra), Some(0xA0B0C0));
}

#[test]
fn preset_zero_reissues_stored_colours_on_the_wire() {
    let (mut ctrl, words) = probed_controller();
    ctrl.set_zone_colour(Zone::Left, 0xFF0000).unwrap();
    words.borrow_mut().clear();

    ctrl.set_preset(CUSTOM_PRESET).unwrap();
    let issued = words.borrow();
    // Select word for hardware key 0, then Left re-issued with the stored
    // red (rotated), not the table's white.
    assert_eq!(issued[0], 0x0000_0000);
    assert!(issued.contains(&0xF000_FF00));
}

#[test]
fn preset_sub_step_failure_keeps_earlier_zones() {
    // Calls: 1 = preset select, 2 = Left colour, 3 = Centre colour (fails)
    let mut ctrl = KeyboardController::new(ScriptedWmi::failing_call(3));
    let err = ctrl.set_preset(3).unwrap_err();
    assert!(matches!(err, KeyboardError::Transport(_)));

    // The select and the Left zone were committed; Centre and Right kept
    // their previous colour and no rollback happens.
    assert_eq!(ctrl.state().active_preset(), 3);
    assert_eq!(ctrl.state().zone_colour(Zone::Left), Some(0xFF0000));
    assert_eq!(ctrl.state().zone_colour(Zone::Centre), Some(0xFFFFFF));
    assert_eq!(ctrl.state().zone_colour(Zone::Right), Some(0xFFFFFF));
}

#[test]
fn failed_select_commits_nothing() {
    let mut ctrl = KeyboardController::new(ScriptedWmi::failing_call(1));
    assert!(ctrl.set_preset(5).is_err());
    assert_eq!(ctrl.state().active_preset(), CUSTOM_PRESET);
    assert_eq!(ctrl.state().zone_colour(Zone::Left), Some(0xFFFFFF));
}

#[test]
fn event_sequence_drives_state_machine() {
    let (mut ctrl, _words) = probed_controller();

    // Full brightness, three down-steps land exactly on 0
    assert_eq!(ctrl.state().brightness(), 255);
    for expected in [170, 85, 0] {
        ctrl.handle_event(0x81).unwrap();
        assert_eq!(ctrl.state().brightness(), expected);
    }

    // Cycle every preset and return to the start
    for _ in 0..PRESET_COUNT {
        ctrl.handle_event(0x83).unwrap();
    }
    assert_eq!(ctrl.state().active_preset(), CUSTOM_PRESET);

    // Toggle off and back on
    ctrl.handle_event(0x9F).unwrap();
    assert!(!ctrl.state().power_on());
    ctrl.handle_event(0x9F).unwrap();
    assert!(ctrl.state().power_on());
}

#[test]
fn unknown_event_is_surfaced_not_dispatched() {
    let (mut ctrl, words) = probed_controller();
    let before = words.borrow().len();
    let event = ctrl.handle_event(0xEE).unwrap();
    assert_eq!(event, DecodedEvent::Unknown(0xEE));
    assert_eq!(words.borrow().len(), before);
}
