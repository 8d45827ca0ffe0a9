use crate::{
    Config, ConfigDescriptorSource, PrinterDeviceProfile, PRINTER_CLASS, PRINTER_SUBCLASS,
    PROTOCOL_BIDIRECTIONAL,
};
use core::fmt;
use heapless::Vec;
use log::{debug, warn};
use usb_request::descriptor::{
    Descriptor, Direction, EndpointTransfer, Interface, Search, WalkError, Walker,
};

/// Default capacity of the descriptor scratch buffer.
pub const MAX_CONFIG_DESCRIPTOR_SIZE: usize = 512;

/// Locates the bidirectional printer interface of a device.
///
/// The configuration descriptor is fetched into a scratch buffer of `N` bytes
/// owned by the resolver; descriptors longer than that are rejected.
#[derive(Debug)]
pub struct Resolver<D, const N: usize = MAX_CONFIG_DESCRIPTOR_SIZE> {
    device: D,
    config: Config,
    buf: Vec<u8, N>,
}

impl<D: ConfigDescriptorSource> Resolver<D> {
    pub fn new(device: D, config: Config) -> Self {
        Self::with_capacity(device, config)
    }
}

impl<D: ConfigDescriptorSource, const N: usize> Resolver<D, N> {
    pub fn with_capacity(device: D, config: Config) -> Self {
        Self {
            device,
            config,
            buf: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Fetch the configuration descriptor and locate the printer interface
    /// with its bulk IN and OUT endpoints.
    ///
    /// Every call fetches the descriptor anew; nothing is retried.
    pub fn resolve(&mut self) -> Result<PrinterDeviceProfile, ResolveError<D::Error>> {
        let r = self.fetch().and_then(locate);
        match &r {
            Ok(profile) => debug!("resolved {:?}", profile),
            Err(e) => warn!("incompatible printer: {}", e),
        }
        r
    }

    fn fetch(&mut self) -> Result<&[u8], ResolveError<D::Error>> {
        let index = self.config.configuration_index;
        let size = self
            .device
            .size(index)
            .map_err(ResolveError::ControlTransferFailed)?;
        debug!("configuration descriptor {} is {} bytes", index, size);

        self.buf.clear();
        self.buf
            .resize(usize::from(size), 0)
            .map_err(|()| ResolveError::DescriptorTooLarge { size, capacity: N })?;
        let n = self
            .device
            .read(index, &mut self.buf)
            .map_err(ResolveError::ControlTransferFailed)?;
        if n != self.buf.len() {
            return Err(InvalidData::SizeMismatch {
                expected: size,
                actual: n,
            }
            .into());
        }
        Ok(&self.buf)
    }
}

fn locate<E>(data: &[u8]) -> Result<PrinterDeviceProfile, ResolveError<E>> {
    let mut walker = Walker::new(data);
    let configuration = match walker.next_descriptor() {
        Ok(Descriptor::Configuration(c)) => c,
        Err(e @ WalkError::Malformed { .. }) => return Err(InvalidData::Malformed(e).into()),
        _ => return Err(InvalidData::NotConfiguration.into()),
    };

    let mut in_interface = false;
    let interface = walker
        .find_next(|d| match d {
            Descriptor::Interface(i) if is_bidirectional_printer(i) => Search::Found,
            Descriptor::Interface(_) => {
                in_interface = true;
                Search::NotFound
            }
            Descriptor::Endpoint(_) if !in_interface => Search::Fail,
            _ => Search::NotFound,
        })
        .map_err(|e| match e {
            WalkError::NotFound => ResolveError::InterfaceNotFound,
            WalkError::PredicateStop => InvalidData::EndpointOutsideInterface.into(),
            e @ WalkError::Malformed { .. } => InvalidData::Malformed(e).into(),
        })?
        .into_interface()
        .ok_or(ResolveError::InterfaceNotFound)?;
    debug!(
        "printer interface {} alternate setting {}",
        interface.number, interface.alternate_setting
    );

    let (mut data_in, mut data_out) = (None, None);
    let (data_in, data_out) = loop {
        if let (Some(i), Some(o)) = (data_in, data_out) {
            break (i, o);
        }
        let endpoint = walker
            .find_next(next_interface_bulk_endpoint)
            .map_err(|e| match e {
                e @ WalkError::Malformed { .. } => InvalidData::Malformed(e).into(),
                _ => ResolveError::EndpointNotFound,
            })?
            .into_endpoint()
            .ok_or(ResolveError::EndpointNotFound)?;
        let slot = match endpoint.address.direction() {
            Direction::In => &mut data_in,
            Direction::Out => &mut data_out,
        };
        if slot.is_none() {
            debug!("bulk endpoint {:?}", endpoint.address);
            *slot = Some(endpoint);
        } else {
            debug!("skipping extra bulk endpoint {:?}", endpoint.address);
        }
    };

    Ok(PrinterDeviceProfile {
        configuration_value: configuration.configuration_value,
        interface_number: interface.number,
        alternate_setting: interface.alternate_setting,
        data_in,
        data_out,
    })
}

fn is_bidirectional_printer(interface: &Interface) -> bool {
    interface.is(PRINTER_CLASS, PRINTER_SUBCLASS, PROTOCOL_BIDIRECTIONAL)
}

/// Bulk endpoints up to the next interface descriptor.
fn next_interface_bulk_endpoint(descriptor: &Descriptor<'_>) -> Search {
    match descriptor {
        Descriptor::Endpoint(e) if e.attributes.transfer() == EndpointTransfer::Bulk => {
            Search::Found
        }
        Descriptor::Interface(_) => Search::Fail,
        _ => Search::NotFound,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError<E> {
    ControlTransferFailed(E),
    DescriptorTooLarge { size: u16, capacity: usize },
    InvalidDescriptorData(InvalidData),
    InterfaceNotFound,
    EndpointNotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidData {
    /// The stream does not start with a configuration descriptor.
    NotConfiguration,
    Malformed(WalkError),
    /// An endpoint descriptor precedes the first interface descriptor.
    EndpointOutsideInterface,
    /// The device returned fewer bytes than it announced.
    SizeMismatch { expected: u16, actual: usize },
}

impl<E> From<InvalidData> for ResolveError<E> {
    fn from(e: InvalidData) -> Self {
        Self::InvalidDescriptorData(e)
    }
}

impl<E> fmt::Display for ResolveError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlTransferFailed(_) => f.write_str("control transfer failed"),
            Self::DescriptorTooLarge { size, capacity } => {
                write!(f, "descriptor of {} bytes exceeds {} byte buffer", size, capacity)
            }
            Self::InvalidDescriptorData(e) => write!(f, "invalid descriptor data: {:?}", e),
            Self::InterfaceNotFound => f.write_str("no bidirectional printer interface"),
            Self::EndpointNotFound => f.write_str("missing bulk data endpoint"),
        }
    }
}
