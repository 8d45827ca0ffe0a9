use bitflags::bitflags;

bitflags! {
    /// Directions currently held on the board joystick.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct JoystickStatus: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const PRESS = 1 << 4;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ButtonStatus: u8 {
        const BUTTON1 = 1 << 0;
    }
}
