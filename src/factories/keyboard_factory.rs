// src/factories/keyboard_factory.rs

use crate::{CatalogError, Device, DeviceFactory, Keyboard, Peripheral, Price};
use log::debug;

/// Factory producing [`Keyboard`] devices.
#[derive(Debug, Clone)]
pub struct KeyboardFactory {
    prototype: Keyboard,
}

impl KeyboardFactory {
    pub fn new<S: Into<String>>(
        model: S,
        brand: S,
        price: f64,
        switch_type: S,
        interface_type: S,
    ) -> Result<Self, CatalogError> {
        let (model, brand) = super::require_identity(model.into(), brand.into())?;
        let price = Price::new(price)?;

        Ok(Self {
            prototype: Keyboard::new(model, brand, price, switch_type.into(), interface_type.into()),
        })
    }
}

impl DeviceFactory for KeyboardFactory {
    fn create_device(&self) -> Device {
        debug!("creating {}", self.prototype.name());
        Device::Keyboard(self.prototype.clone())
    }
}
