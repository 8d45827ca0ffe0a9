#![cfg_attr(not(test), no_std)]

pub mod descriptor;

const GET_DESCRIPTOR: u8 = 6;
const SET_CONFIGURATION: u8 = 9;

#[derive(Debug)]
pub enum Request {
    GetDescriptor {
        ty: descriptor::GetDescriptor,
        length: u16,
    },
    SetConfiguration {
        value: u8,
    },
}

/// A standard setup packet (USB 2.0, 9.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRequest {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub length: u16,
}

impl RawRequest {
    pub fn direction_in(&self) -> bool {
        self.request_type & request_type::DIR_IN != 0
    }

    /// The 8 bytes sent in the SETUP stage.
    pub fn to_bytes(&self) -> [u8; 8] {
        let [v0, v1] = self.value.to_le_bytes();
        let [i0, i1] = self.index.to_le_bytes();
        let [l0, l1] = self.length.to_le_bytes();
        [self.request_type, self.request, v0, v1, i0, i1, l0, l1]
    }
}

mod request_type {
    pub const DIR_OUT: u8 = 0 << 7;
    pub const DIR_IN: u8 = 1 << 7;

    pub const TYPE_STANDARD: u8 = 0 << 5;

    pub const RECIPIENT_DEVICE: u8 = 0;
}

impl Request {
    pub fn into_raw(self) -> RawRequest {
        use request_type::*;
        let w_value = |ty, i| u16::from(ty) << 8 | u16::from(i);
        match self {
            Self::GetDescriptor { ty, length } => {
                use descriptor::GetDescriptor::*;
                RawRequest {
                    request_type: DIR_IN | TYPE_STANDARD | RECIPIENT_DEVICE,
                    request: GET_DESCRIPTOR,
                    value: match ty {
                        Configuration { index } => w_value(descriptor::CONFIGURATION, index),
                    },
                    index: 0,
                    length,
                }
            }
            Self::SetConfiguration { value } => RawRequest {
                request_type: DIR_OUT | TYPE_STANDARD | RECIPIENT_DEVICE,
                request: SET_CONFIGURATION,
                value: value.into(),
                index: 0,
                length: 0,
            },
        }
    }
}
