/// Millisecond countdown until an unchanged report is sent again.
///
/// A period of 0 means reports are only sent on change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleTimer {
    period_ms: u16,
    remaining_ms: u16,
}

impl IdleTimer {
    pub const fn new(period_ms: u16) -> Self {
        Self {
            period_ms,
            remaining_ms: period_ms,
        }
    }

    /// Called once per millisecond.
    pub fn tick(&mut self) {
        self.remaining_ms = self.remaining_ms.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.period_ms != 0 && self.remaining_ms == 0
    }

    pub fn reload(&mut self) {
        self.remaining_ms = self.period_ms;
    }

    /// SET_IDLE from the host.
    pub fn set_period(&mut self, period_ms: u16) {
        self.period_ms = period_ms;
        self.reload();
    }

    pub fn remaining_ms(&self) -> u16 {
        self.remaining_ms
    }
}
