use crate::{ButtonStatus, JoystickStatus};

// Keyboard/keypad page (0x07) usages.
const KEY_A: u8 = 0x04;
const KEY_B: u8 = 0x05;
const KEY_C: u8 = 0x06;
const KEY_D: u8 = 0x07;
const KEY_E: u8 = 0x08;

/// Boot protocol keyboard input report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardReport {
    pub modifier: u8,
    pub key_codes: [u8; 6],
}

impl KeyboardReport {
    pub fn to_bytes(&self) -> [u8; 8] {
        let [a, b, c, d, e, f] = self.key_codes;
        [self.modifier, 0, a, b, c, d, e, f]
    }
}

/// Boot protocol mouse input report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseReport {
    pub buttons: u8,
    pub x: i8,
    pub y: i8,
}

impl MouseReport {
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.buttons, self.x as u8, self.y as u8]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoystickReport {
    pub x: i8,
    pub y: i8,
    pub buttons: u8,
}

impl JoystickReport {
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.x as u8, self.y as u8, self.buttons]
    }
}

/// Keys A to E for the joystick directions, only while button 1 is held.
pub fn keyboard_report(joy: JoystickStatus, buttons: ButtonStatus) -> Option<KeyboardReport> {
    if !buttons.contains(ButtonStatus::BUTTON1) {
        return None;
    }
    let mut key = 0;
    if joy.contains(JoystickStatus::UP) {
        key = KEY_A;
    } else if joy.contains(JoystickStatus::DOWN) {
        key = KEY_B;
    }
    if joy.contains(JoystickStatus::LEFT) {
        key = KEY_C;
    } else if joy.contains(JoystickStatus::RIGHT) {
        key = KEY_D;
    }
    if joy.contains(JoystickStatus::PRESS) {
        key = KEY_E;
    }
    let mut report = KeyboardReport::default();
    report.key_codes[0] = key;
    Some(report)
}

/// Relative pointer movement from the joystick, unless button 1 is held.
pub fn mouse_report(joy: JoystickStatus, buttons: ButtonStatus) -> Option<MouseReport> {
    if buttons.contains(ButtonStatus::BUTTON1) {
        return None;
    }
    let (x, y) = axes(joy, 1);
    Some(MouseReport {
        buttons: u8::from(joy.contains(JoystickStatus::PRESS)),
        x,
        y,
    })
}

pub fn joystick_report(joy: JoystickStatus, buttons: ButtonStatus) -> JoystickReport {
    let (x, y) = axes(joy, 100);
    let mut report = JoystickReport { x, y, buttons: 0 };
    if joy.contains(JoystickStatus::PRESS) {
        report.buttons |= 1 << 1;
    }
    if buttons.contains(ButtonStatus::BUTTON1) {
        report.buttons |= 1 << 0;
    }
    report
}

// Up wins over down, right over left.
fn axes(joy: JoystickStatus, step: i8) -> (i8, i8) {
    let y = if joy.contains(JoystickStatus::UP) {
        -step
    } else if joy.contains(JoystickStatus::DOWN) {
        step
    } else {
        0
    };
    let x = if joy.contains(JoystickStatus::RIGHT) {
        step
    } else if joy.contains(JoystickStatus::LEFT) {
        -step
    } else {
        0
    };
    (x, y)
}
