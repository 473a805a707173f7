// src/factories/headphones_factory.rs

use crate::{CatalogError, Device, DeviceFactory, Headphones, Peripheral, Price};
use log::debug;

/// Factory producing [`Headphones`] from captured parameters.
///
/// Parameters are validated once, when the factory is built, so every later
/// call to [`DeviceFactory::create_device`] succeeds.
#[derive(Debug, Clone)]
pub struct HeadphonesFactory {
    prototype: Headphones,
}

impl HeadphonesFactory {
    /// Captures the attributes of one pair of headphones.
    ///
    /// # Arguments
    /// * `model` - Model designation (must be non-empty)
    /// * `brand` - Manufacturer (must be non-empty)
    /// * `price` - Price in roubles (finite, non-negative)
    /// * `construction_type` - Construction type
    /// * `mounting_method` - How the headphones are worn
    ///
    /// # Returns
    /// * `Ok(HeadphonesFactory)` - Factory ready to create devices
    /// * `Err(CatalogError)` - Validation error
    pub fn new<S: Into<String>>(
        model: S,
        brand: S,
        price: f64,
        construction_type: S,
        mounting_method: S,
    ) -> Result<Self, CatalogError> {
        let (model, brand) = super::require_identity(model.into(), brand.into())?;
        let price = Price::new(price)?;

        Ok(Self {
            prototype: Headphones::new(
                model,
                brand,
                price,
                construction_type.into(),
                mounting_method.into(),
            ),
        })
    }
}

impl DeviceFactory for HeadphonesFactory {
    fn create_device(&self) -> Device {
        debug!("creating {}", self.prototype.name());
        Device::Headphones(self.prototype.clone())
    }
}
