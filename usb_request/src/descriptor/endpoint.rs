use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// The address of the endpoint on the USB device described by this descriptor.
    pub address: EndpointAddress,
    pub attributes: EndpointAttributes,
    pub max_packet_size: u16,
    pub interval: u8,
}

impl Endpoint {
    pub(crate) fn from_raw(buf: &[u8]) -> Result<Endpoint, InvalidEndpoint> {
        // Trailing bytes, e.g. the audio class bRefresh and bSynchAddress, are ignored.
        if let &[a, b, c, d, e, ..] = buf {
            Ok(Endpoint {
                address: EndpointAddress(a),
                attributes: EndpointAttributes(b),
                max_packet_size: u16::from_le_bytes([c, d]),
                interval: e,
            })
        } else {
            Err(InvalidEndpoint::UnexpectedLength)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EndpointAddress(u8);

impl EndpointAddress {
    pub fn direction(&self) -> Direction {
        if self.0 & 1 << 7 == 0 {
            Direction::Out
        } else {
            Direction::In
        }
    }

    pub fn number(&self) -> u8 {
        self.0 & 0xf
    }

    /// The `bEndpointAddress` byte as found in the descriptor.
    pub fn raw(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!(EndpointAddress))
            .field("direction", &self.direction())
            .field("number", &self.number())
            .finish()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EndpointAttributes(u8);

impl EndpointAttributes {
    pub fn usage(&self) -> EndpointUsage {
        match self.0 >> 4 & 0x3 {
            0 => EndpointUsage::Data,
            1 => EndpointUsage::Feedback,
            2 => EndpointUsage::Implicit,
            _ => EndpointUsage::Reserved,
        }
    }

    pub fn sync(&self) -> EndpointSync {
        match self.0 >> 2 & 0x3 {
            0 => EndpointSync::None,
            1 => EndpointSync::Async,
            2 => EndpointSync::Adapt,
            _ => EndpointSync::Sync,
        }
    }

    pub fn transfer(&self) -> EndpointTransfer {
        match self.0 & 0x3 {
            0 => EndpointTransfer::Control,
            1 => EndpointTransfer::Isoch,
            2 => EndpointTransfer::Bulk,
            _ => EndpointTransfer::Interrupt,
        }
    }
}

impl fmt::Debug for EndpointAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!(EndpointAttributes))
            .field("usage", &self.usage())
            .field("sync", &self.sync())
            .field("transfer", &self.transfer())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointUsage {
    Data,
    Feedback,
    Implicit,
    Reserved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointSync {
    None,
    Async,
    Adapt,
    Sync,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointTransfer {
    Control,
    Isoch,
    Bulk,
    Interrupt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidEndpoint {
    UnexpectedLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_in() {
        let ep = Endpoint::from_raw(&[0x83, 0x03, 0x08, 0x00, 0x0a]).unwrap();
        assert_eq!(ep.address.direction(), Direction::In);
        assert_eq!(ep.address.number(), 3);
        assert_eq!(ep.address.raw(), 0x83);
        assert_eq!(ep.attributes.transfer(), EndpointTransfer::Interrupt);
        assert_eq!(ep.max_packet_size, 8);
        assert_eq!(ep.interval, 10);
    }

    #[test]
    fn audio_layout() {
        let ep = Endpoint::from_raw(&[0x01, 0x05, 0xc0, 0x00, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!(ep.attributes.transfer(), EndpointTransfer::Isoch);
        assert_eq!(ep.attributes.sync(), EndpointSync::Async);
        assert_eq!(ep.max_packet_size, 192);
    }

    #[test]
    fn reserved_bits_kept() {
        let ep = Endpoint::from_raw(&[0x80, 0x33, 0x40, 0x00, 0x00, 0xaa]).unwrap();
        assert_eq!(ep.address.number(), 0);
        assert_eq!(ep.attributes.usage(), EndpointUsage::Reserved);
        assert_eq!(ep.attributes.transfer(), EndpointTransfer::Interrupt);
    }

    #[test]
    fn short_body() {
        assert_eq!(
            Endpoint::from_raw(&[0x81, 0x02, 0x40, 0x00]),
            Err(InvalidEndpoint::UnexpectedLength)
        );
    }
}
