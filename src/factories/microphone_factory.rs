// src/factories/microphone_factory.rs

use crate::{CatalogError, Device, DeviceFactory, Microphone, Peripheral, Price};
use log::debug;

/// Factory producing [`Microphone`] devices.
#[derive(Debug, Clone)]
pub struct MicrophoneFactory {
    prototype: Microphone,
}

impl MicrophoneFactory {
    pub fn new<S: Into<String>>(
        model: S,
        brand: S,
        price: f64,
        frequency_range: S,
        sensitivity: S,
    ) -> Result<Self, CatalogError> {
        let (model, brand) = super::require_identity(model.into(), brand.into())?;
        let price = Price::new(price)?;

        Ok(Self {
            prototype: Microphone::new(
                model,
                brand,
                price,
                frequency_range.into(),
                sensitivity.into(),
            ),
        })
    }
}

impl DeviceFactory for MicrophoneFactory {
    fn create_device(&self) -> Device {
        debug!("creating {}", self.prototype.name());
        Device::Microphone(self.prototype.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_microphone() {
        let factory = MicrophoneFactory::new(
            "AT2020",
            "Audio-Technica",
            8000.0,
            "20Hz - 20kHz",
            "34 мВ/Па",
        )
        .unwrap();
        let device = factory.create_device();

        assert_eq!(device.name(), "Микрофон: Audio-Technica AT2020");
        assert_eq!(device.price().amount(), 8000.0);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = MicrophoneFactory::new("AT2020", "Audio-Technica", -1.0, "", "");
        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }
}
