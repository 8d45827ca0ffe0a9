//! Host side setup of bidirectional USB printers.
//!
//! [`Resolver`] fetches a device's configuration descriptor, locates the
//! bidirectional printer interface and its bulk IN and OUT endpoints, and
//! returns them as a [`PrinterDeviceProfile`] ready for pipe setup.
//!
//! ## References
//!
//! * <https://www.usb.org/sites/default/files/usbprint11a021811.pdf>

#![cfg_attr(not(test), no_std)]

mod config;
mod host;
mod profile;
mod resolve;

pub use config::{Bank, Config};
pub use host::{ConfigDescriptorSource, ControlIn, ControlSource, PipeConfig, PipeSetup};
pub use profile::{ConfigureError, PrinterDeviceProfile};
pub use resolve::{InvalidData, ResolveError, Resolver, MAX_CONFIG_DESCRIPTOR_SIZE};

/// Printer interface class (USB printer class 1.1, 4.2).
pub const PRINTER_CLASS: u8 = 0x07;
pub const PRINTER_SUBCLASS: u8 = 0x01;
pub const PROTOCOL_UNIDIRECTIONAL: u8 = 0x01;
pub const PROTOCOL_BIDIRECTIONAL: u8 = 0x02;
