/// Pipe buffering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Bank {
    #[default]
    Single,
    Double,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Index of the configuration descriptor to request. Index 0 is
    /// configuration number 1.
    pub configuration_index: u8,
    /// Host pipe bound to the bulk IN endpoint.
    pub in_pipe: u8,
    /// Host pipe bound to the bulk OUT endpoint.
    pub out_pipe: u8,
    pub bank: Bank,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            configuration_index: 0,
            in_pipe: 1,
            out_pipe: 2,
            bank: Bank::Single,
        }
    }
}
