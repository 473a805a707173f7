use crate::{DeviceCategory, Peripheral, Price};

#[derive(Debug, Clone, PartialEq)]
pub struct Keyboard {
    model: String,
    brand: String,
    price: Price,
    switch_type: String,
    interface_type: String,
}

impl Keyboard {
    pub(crate) fn new(
        model: String,
        brand: String,
        price: Price,
        switch_type: String,
        interface_type: String,
    ) -> Self {
        Self {
            model,
            brand,
            price,
            switch_type,
            interface_type,
        }
    }

    /// Returns the key switch type.
    pub fn switch_type(&self) -> &str {
        &self.switch_type
    }

    /// Returns the connection interface (USB, Bluetooth, ...).
    pub fn interface_type(&self) -> &str {
        &self.interface_type
    }
}

impl Peripheral for Keyboard {
    fn category(&self) -> DeviceCategory {
        DeviceCategory::Keyboard
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn brand(&self) -> &str {
        &self.brand
    }

    fn price(&self) -> Price {
        self.price
    }

    fn specifics(&self) -> [&str; 2] {
        [self.switch_type.as_str(), self.interface_type.as_str()]
    }
}
