use crate::{Config, PipeConfig, PipeSetup};
use usb_request::{
    descriptor::{Endpoint, EndpointTransfer},
    RawRequest, Request,
};

/// The printer interface of a device and its bulk data endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterDeviceProfile {
    /// `bConfigurationValue` of the configuration the interface belongs to.
    pub configuration_value: u8,
    pub interface_number: u8,
    pub alternate_setting: u8,
    pub data_in: Endpoint,
    pub data_out: Endpoint,
}

impl PrinterDeviceProfile {
    /// SET_CONFIGURATION request selecting the configuration of this profile.
    pub fn set_configuration(&self) -> RawRequest {
        Request::SetConfiguration {
            value: self.configuration_value,
        }
        .into_raw()
    }

    /// Bind `config.in_pipe` and `config.out_pipe` to the data endpoints.
    pub fn configure_pipes<P>(
        &self,
        pipes: &mut P,
        config: &Config,
    ) -> Result<(), ConfigureError<P::Error>>
    where
        P: PipeSetup,
    {
        let endpoints = [
            (config.in_pipe, self.data_in),
            (config.out_pipe, self.data_out),
        ];
        for (pipe, endpoint) in endpoints {
            let pipe = PipeConfig {
                pipe,
                transfer: EndpointTransfer::Bulk,
                direction: endpoint.address.direction(),
                endpoint: endpoint.address,
                max_packet_size: endpoint.max_packet_size,
                bank: config.bank,
            };
            log::debug!("configuring {:?}", pipe);
            pipes.configure_pipe(pipe).map_err(ConfigureError::Pipe)?;
        }
        pipes
            .set_infinite_in_requests(config.in_pipe)
            .map_err(ConfigureError::Pipe)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigureError<E> {
    Pipe(E),
}
