//! HID input reports built from board joystick and button state, and the
//! board LED masks driven by host output reports and device status.
//!
//! ## References
//!
//! * <https://www.usb.org/sites/default/files/hid1_11.pdf>, appendix B (boot reports)

#![cfg_attr(not(test), no_std)]

mod idle;
mod input;
mod led;
mod report;

pub use idle::IdleTimer;
pub use input::{ButtonStatus, JoystickStatus};
pub use led::{led_mask, DeviceStatus, KeyboardLeds, Leds};
pub use report::{joystick_report, keyboard_report, mouse_report};
pub use report::{JoystickReport, KeyboardReport, MouseReport};
