//! Configuration descriptor model (USB 2.0, 9.6.3 - 9.6.6).
//!
//! A configuration descriptor is a flat stream of sub-descriptors, each
//! prefixed with a `bLength`, `bDescriptorType` header. [`decode`] iterates the
//! whole stream, while [`Walker`] scans it for specific entries.

mod configuration;
mod endpoint;
mod interface;
mod walk;

pub use configuration::*;
pub use endpoint::*;
pub use interface::*;
pub use walk::*;

use core::mem;

#[derive(Debug)]
pub enum GetDescriptor {
    Configuration { index: u8 },
}

pub(crate) const CONFIGURATION: u8 = 0x2;
pub(crate) const INTERFACE: u8 = 0x4;
pub(crate) const ENDPOINT: u8 = 0x5;

/// Length of the configuration header, which carries `wTotalLength`.
pub const CONFIGURATION_HEADER_LEN: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Descriptor<'a> {
    Configuration(Configuration),
    Interface(Interface),
    Endpoint(Endpoint),
    Unknown { ty: u8, data: &'a [u8] },
}

macro_rules! into {
    ($v:ident $f:ident $t:ty) => {
        pub fn $f(self) -> Option<$t> {
            match self {
                Self::$v(v) => Some(v),
                _ => None,
            }
        }
    };
}

impl<'a> Descriptor<'a> {
    into!(Configuration into_configuration Configuration);
    into!(Interface into_interface Interface);
    into!(Endpoint into_endpoint Endpoint);

    /// Parse the sub-descriptor at the start of `buf`.
    ///
    /// Returns the descriptor and its declared length. A declared length
    /// below the header size or past the end of `buf` is rejected, so the
    /// caller can always advance by the returned amount.
    pub(crate) fn parse(buf: &'a [u8]) -> Result<(Self, usize), InvalidDescriptor> {
        let length = buf.first().copied().unwrap_or(0);
        let l = usize::from(length);
        if l < 2 || l > buf.len() {
            return Err(InvalidDescriptor::Truncated { length });
        }
        let b = &buf[2..l];
        let r = match buf[1] {
            CONFIGURATION => Descriptor::Configuration(
                Configuration::from_raw(b).map_err(InvalidDescriptor::Configuration)?,
            ),
            INTERFACE => {
                Descriptor::Interface(Interface::from_raw(b).map_err(InvalidDescriptor::Interface)?)
            }
            ENDPOINT => {
                Descriptor::Endpoint(Endpoint::from_raw(b).map_err(InvalidDescriptor::Endpoint)?)
            }
            ty => Descriptor::Unknown { ty, data: b },
        };
        Ok((r, l))
    }
}

pub fn decode(buf: &[u8]) -> Iter<'_> {
    Iter { buf }
}

pub struct Iter<'a> {
    buf: &'a [u8],
}

impl<'a> Iterator for Iter<'a> {
    type Item = Result<Descriptor<'a>, InvalidDescriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        (!self.buf.is_empty()).then(|| {
            // Stays empty on error so iteration ends.
            let buf = mem::take(&mut self.buf);
            let (r, l) = Descriptor::parse(buf)?;
            self.buf = &buf[l..];
            Ok(r)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidDescriptor {
    Truncated { length: u8 },
    Configuration(InvalidConfiguration),
    Interface(InvalidInterface),
    Endpoint(InvalidEndpoint),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single-interface CDC data class device with a class specific descriptor.
    const CDC_DATA: &[u8] = &[
        0x09, 0x02, 0x25, 0x00, 0x01, 0x01, 0x00, 0x80, 0x32, // Configuration
        0x09, 0x04, 0x00, 0x00, 0x02, 0x0a, 0x00, 0x00, 0x00, // Interface 0
        0x05, 0x24, 0x00, 0x10, 0x01, // class specific (0x24)
        0x07, 0x05, 0x81, 0x02, 0x40, 0x00, 0x00, // Endpoint 1 IN
        0x07, 0x05, 0x02, 0x02, 0x40, 0x00, 0x00, // Endpoint 2 OUT
    ];

    #[test]
    fn decode_cdc_data() {
        let mut it = decode(CDC_DATA);
        let config = it.next().unwrap().unwrap().into_configuration().unwrap();
        assert_eq!(config.total_length, 0x25);
        assert_eq!(config.num_interfaces, 1);
        assert_eq!(config.configuration_value, 1);
        let iface = it.next().unwrap().unwrap().into_interface().unwrap();
        assert_eq!((iface.number, iface.class, iface.num_endpoints), (0, 0x0a, 2));
        assert_eq!(
            it.next().unwrap().unwrap(),
            Descriptor::Unknown { ty: 0x24, data: &[0x00, 0x10, 0x01] }
        );
        let ep = it.next().unwrap().unwrap().into_endpoint().unwrap();
        assert_eq!(ep.address.direction(), Direction::In);
        assert_eq!(ep.attributes.transfer(), EndpointTransfer::Bulk);
        assert_eq!(ep.max_packet_size, 64);
        let ep = it.next().unwrap().unwrap().into_endpoint().unwrap();
        assert_eq!(ep.address.direction(), Direction::Out);
        assert!(it.next().is_none());
    }

    #[test]
    fn decode_stops_after_error() {
        let mut it = decode(&[0x09, 0x02, 0x00]);
        assert_eq!(
            it.next(),
            Some(Err(InvalidDescriptor::Truncated { length: 9 }))
        );
        assert!(it.next().is_none());
    }

    #[test]
    fn zero_length() {
        let mut it = decode(&[0x00, 0x04, 0x00]);
        assert_eq!(
            it.next(),
            Some(Err(InvalidDescriptor::Truncated { length: 0 }))
        );
    }

    #[test]
    fn longer_than_standard() {
        let mut it = decode(&[
            0x0a, 0x04, 0x03, 0x01, 0x02, 0x07, 0x01, 0x02, 0x00, 0xee, // Interface 3, one extra byte
            0x08, 0x05, 0x81, 0x02, 0x40, 0x00, 0x00, 0xee, // Endpoint 1 IN, one extra byte
        ]);
        let iface = it.next().unwrap().unwrap().into_interface().unwrap();
        assert_eq!((iface.number, iface.alternate_setting, iface.index), (3, 1, 0));
        let ep = it.next().unwrap().unwrap().into_endpoint().unwrap();
        assert_eq!(ep.address.raw(), 0x81);
        assert_eq!(ep.interval, 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn short_interface_body() {
        let mut it = decode(&[0x05, 0x04, 0x00, 0x00, 0x01]);
        assert_eq!(
            it.next(),
            Some(Err(InvalidDescriptor::Interface(
                InvalidInterface::UnexpectedLength
            )))
        );
    }
}
