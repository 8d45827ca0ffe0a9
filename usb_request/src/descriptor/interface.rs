#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interface {
    pub number: u8,
    pub alternate_setting: u8,
    pub num_endpoints: u8,
    pub class: u8,
    pub subclass: u8,
    pub protocol: u8,
    pub index: u8,
}

impl Interface {
    pub(crate) fn from_raw(buf: &[u8]) -> Result<Self, InvalidInterface> {
        if let &[a, b, c, d, e, f, g, ..] = buf {
            Ok(Interface {
                number: a,
                alternate_setting: b,
                num_endpoints: c,
                class: d,
                subclass: e,
                protocol: f,
                index: g,
            })
        } else {
            Err(InvalidInterface::UnexpectedLength)
        }
    }

    /// Whether class, subclass and protocol equal the given triple.
    pub fn is(&self, class: u8, subclass: u8, protocol: u8) -> bool {
        (self.class, self.subclass, self.protocol) == (class, subclass, protocol)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidInterface {
    UnexpectedLength,
}
