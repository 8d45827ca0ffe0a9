use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Leds: u8 {
        const LED1 = 1 << 0;
        const LED2 = 1 << 1;
        const LED3 = 1 << 2;
        const LED4 = 1 << 3;
    }
}

bitflags! {
    /// Keyboard LED output report (HID 1.11, B.1).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct KeyboardLeds: u8 {
        const NUM_LOCK = 1 << 0;
        const CAPS_LOCK = 1 << 1;
        const SCROLL_LOCK = 1 << 2;
        const COMPOSE = 1 << 3;
        const KANA = 1 << 4;
    }
}

/// Board LEDs mirroring the lock LEDs of a keyboard output report.
pub fn led_mask(report: u8) -> Leds {
    let report = KeyboardLeds::from_bits_truncate(report);
    let mut leds = Leds::empty();
    leds.set(Leds::LED1, report.contains(KeyboardLeds::NUM_LOCK));
    leds.set(Leds::LED3, report.contains(KeyboardLeds::CAPS_LOCK));
    leds.set(Leds::LED4, report.contains(KeyboardLeds::SCROLL_LOCK));
    leds
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceStatus {
    NotReady,
    Enumerating,
    Ready,
    Error,
}

impl DeviceStatus {
    pub fn leds(self) -> Leds {
        match self {
            Self::NotReady => Leds::LED1,
            Self::Enumerating => Leds::LED2 | Leds::LED3,
            Self::Ready => Leds::LED2 | Leds::LED4,
            Self::Error => Leds::LED1 | Leds::LED3,
        }
    }
}
