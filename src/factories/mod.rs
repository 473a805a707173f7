// src/factories/mod.rs

mod headphones_factory;
mod keyboard_factory;
mod microphone_factory;

pub use headphones_factory::HeadphonesFactory;
pub use keyboard_factory::KeyboardFactory;
pub use microphone_factory::MicrophoneFactory;

use crate::{CatalogConfig, CatalogError, DeviceEntry, DeviceFactory};

impl DeviceEntry {
    /// Turns a catalog entry into the factory for its kind.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DeviceFactory>)` - Validated factory
    /// * `Err(CatalogError)` - The entry describes an invalid device
    pub fn factory(&self) -> Result<Box<dyn DeviceFactory>, CatalogError> {
        let factory: Box<dyn DeviceFactory> = match self {
            Self::Headphones {
                model,
                brand,
                price,
                construction_type,
                mounting_method,
            } => Box::new(HeadphonesFactory::new(
                model.as_str(),
                brand.as_str(),
                *price,
                construction_type.as_str(),
                mounting_method.as_str(),
            )?),
            Self::Microphone {
                model,
                brand,
                price,
                frequency_range,
                sensitivity,
            } => Box::new(MicrophoneFactory::new(
                model.as_str(),
                brand.as_str(),
                *price,
                frequency_range.as_str(),
                sensitivity.as_str(),
            )?),
            Self::Keyboard {
                model,
                brand,
                price,
                switch_type,
                interface_type,
            } => Box::new(KeyboardFactory::new(
                model.as_str(),
                brand.as_str(),
                *price,
                switch_type.as_str(),
                interface_type.as_str(),
            )?),
        };

        Ok(factory)
    }
}

impl CatalogConfig {
    /// Builds one factory per configured device, in catalog order.
    ///
    /// Fails on the first invalid entry, naming its position.
    pub fn factories(&self) -> Result<Vec<Box<dyn DeviceFactory>>, CatalogError> {
        self.devices
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                entry.factory().map_err(|e| {
                    CatalogError::config(format!(
                        "device #{} ({}): {}",
                        i + 1,
                        entry.category(),
                        e
                    ))
                })
            })
            .collect()
    }
}

/// Model and brand identify a device and must not be blank.
fn require_identity(model: String, brand: String) -> Result<(String, String), CatalogError> {
    if model.trim().is_empty() {
        return Err(CatalogError::validation(
            "Device model cannot be empty or whitespace",
        ));
    }

    if brand.trim().is_empty() {
        return Err(CatalogError::validation(
            "Device brand cannot be empty or whitespace",
        ));
    }

    Ok((model, brand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Peripheral;

    #[test]
    fn test_builtin_factories_in_order() {
        let names: Vec<String> = CatalogConfig::builtin()
            .factories()
            .unwrap()
            .iter()
            .map(|f| f.create_device().name())
            .collect();

        assert_eq!(
            names,
            vec![
                "Наушники: Sennheiser HD202",
                "Микрофон: Audio-Technica AT2020",
                "Клавиатура: Corsair K95",
            ]
        );
    }

    #[test]
    fn test_invalid_entry_names_its_position() {
        let mut config = CatalogConfig::builtin();
        config.devices.push(DeviceEntry::Keyboard {
            model: "".to_string(),
            brand: "Corsair".to_string(),
            price: 1.0,
            switch_type: "".to_string(),
            interface_type: "".to_string(),
        });

        let err = config.factories().err().unwrap();
        assert!(matches!(err, CatalogError::ConfigError(_)));
        assert!(err.to_string().contains("device #4 (keyboard)"));
    }

    #[test]
    fn test_negative_price_in_toml_is_rejected() {
        let config = CatalogConfig::from_toml_str(
            "[[devices]]\nkind = \"headphones\"\nmodel = \"HD202\"\nbrand = \"Sennheiser\"\n\
             price = -5.0\nconstruction_type = \"Обычные\"\nmounting_method = \"Оголовье\"\n",
        )
        .unwrap();

        let err = config.factories().err().unwrap();
        assert!(err.to_string().contains("device #1 (headphones)"));
        assert!(err.to_string().contains("Invalid price `-5`"));
    }

    #[test]
    fn test_entry_factory_keeps_specifics() {
        let entry = DeviceEntry::Microphone {
            model: "SM7B".to_string(),
            brand: "Shure".to_string(),
            price: 39990.5,
            frequency_range: "50Hz - 20kHz".to_string(),
            sensitivity: "1,12 мВ/Па".to_string(),
        };
        let device = entry.factory().unwrap().create_device();

        assert_eq!(device.specifics(), ["50Hz - 20kHz", "1,12 мВ/Па"]);
        assert!(device.info().contains("Цена: 39990.5 руб."));
    }
}
