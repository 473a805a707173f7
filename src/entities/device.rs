use crate::{DeviceCategory, Headphones, Keyboard, Microphone, Peripheral, Price};
use std::fmt;

/// Any device the catalog can hold.
///
/// The set of variants is closed; every capability goes through
/// [`Peripheral`], which `Device` implements by delegating to the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Headphones(Headphones),
    Microphone(Microphone),
    Keyboard(Keyboard),
}

impl Device {
    pub fn as_peripheral(&self) -> &dyn Peripheral {
        match self {
            Self::Headphones(device) => device,
            Self::Microphone(device) => device,
            Self::Keyboard(device) => device,
        }
    }
}

impl Peripheral for Device {
    fn category(&self) -> DeviceCategory {
        self.as_peripheral().category()
    }

    fn model(&self) -> &str {
        self.as_peripheral().model()
    }

    fn brand(&self) -> &str {
        self.as_peripheral().brand()
    }

    fn price(&self) -> Price {
        self.as_peripheral().price()
    }

    fn specifics(&self) -> [&str; 2] {
        self.as_peripheral().specifics()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Headphones> for Device {
    fn from(device: Headphones) -> Self {
        Self::Headphones(device)
    }
}

impl From<Microphone> for Device {
    fn from(device: Microphone) -> Self {
        Self::Microphone(device)
    }
}

impl From<Keyboard> for Device {
    fn from(device: Keyboard) -> Self {
        Self::Keyboard(device)
    }
}
