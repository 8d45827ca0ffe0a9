//! Collaborators provided by the host stack.

use crate::Bank;
use usb_request::{
    descriptor::{
        Direction, EndpointAddress, EndpointTransfer, GetDescriptor, CONFIGURATION_HEADER_LEN,
    },
    RawRequest, Request,
};

/// Source of a device's configuration descriptor.
pub trait ConfigDescriptorSource {
    type Error;

    /// Total length of configuration descriptor `index`, header included.
    fn size(&mut self, index: u8) -> Result<u16, Self::Error>;

    /// Read configuration descriptor `index` into `buf`, returning the number
    /// of bytes written.
    fn read(&mut self, index: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Device-to-host control transfers on the default pipe.
pub trait ControlIn {
    type Error;

    /// Run `request` and store the data stage in `buf`, returning the number
    /// of bytes received.
    fn control_in(&mut self, request: RawRequest, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Fetches configuration descriptors with standard GET_DESCRIPTOR requests.
#[derive(Debug)]
pub struct ControlSource<C>(pub C);

impl<C: ControlIn> ControlSource<C> {
    fn get(&mut self, index: u8, buf: &mut [u8]) -> Result<usize, C::Error> {
        let request = Request::GetDescriptor {
            ty: GetDescriptor::Configuration { index },
            length: u16::try_from(buf.len()).unwrap_or(u16::MAX),
        };
        self.0.control_in(request.into_raw(), buf)
    }
}

impl<C: ControlIn> ConfigDescriptorSource for ControlSource<C> {
    type Error = C::Error;

    fn size(&mut self, index: u8) -> Result<u16, Self::Error> {
        let mut header = [0; CONFIGURATION_HEADER_LEN];
        let n = self.get(index, &mut header)?;
        // A short header yields 0, which then fails validation as an empty stream.
        Ok(match header[..n.min(CONFIGURATION_HEADER_LEN)] {
            [_, _, lo, hi, ..] => u16::from_le_bytes([lo, hi]),
            _ => 0,
        })
    }

    fn read(&mut self, index: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.get(index, buf)
    }
}

/// Parameters of a single host pipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipeConfig {
    pub pipe: u8,
    pub transfer: EndpointTransfer,
    /// Token direction, IN for device-to-host.
    pub direction: Direction,
    pub endpoint: EndpointAddress,
    pub max_packet_size: u16,
    pub bank: Bank,
}

/// Host pipe allocation.
pub trait PipeSetup {
    type Error;

    fn configure_pipe(&mut self, config: PipeConfig) -> Result<(), Self::Error>;

    /// Keep issuing IN tokens on `pipe` without a request count.
    fn set_infinite_in_requests(&mut self, pipe: u8) -> Result<(), Self::Error> {
        let _ = pipe;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Control<'a> {
        descriptor: &'a [u8],
        requests: Vec<RawRequest>,
    }

    impl ControlIn for Control<'_> {
        type Error = ();

        fn control_in(&mut self, request: RawRequest, buf: &mut [u8]) -> Result<usize, ()> {
            self.requests.push(request);
            let n = usize::from(request.length).min(self.descriptor.len()).min(buf.len());
            buf[..n].copy_from_slice(&self.descriptor[..n]);
            Ok(n)
        }
    }

    const DESCRIPTOR: &[u8] = &[
        0x09, 0x02, 0x12, 0x00, 0x01, 0x01, 0x00, 0x80, 0x32, // Configuration
        0x09, 0x04, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, // Interface 0
    ];

    #[test]
    fn header_then_body() {
        let mut source = ControlSource(Control {
            descriptor: DESCRIPTOR,
            requests: Vec::new(),
        });
        assert_eq!(source.size(2), Ok(18));
        let mut buf = [0; 18];
        assert_eq!(source.read(2, &mut buf), Ok(18));
        assert_eq!(&buf[..], DESCRIPTOR);

        let requests = &source.0.requests;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].to_bytes(), [0x80, 0x06, 0x02, 0x02, 0x00, 0x00, 0x09, 0x00]);
        assert_eq!(requests[1].length, 18);
    }

    #[test]
    fn short_header() {
        let mut source = ControlSource(Control {
            descriptor: &DESCRIPTOR[..3],
            requests: Vec::new(),
        });
        assert_eq!(source.size(0), Ok(0));
    }
}
