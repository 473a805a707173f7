use crate::{DeviceCategory, Peripheral, Price};

#[derive(Debug, Clone, PartialEq)]
pub struct Microphone {
    model: String,
    brand: String,
    price: Price,
    frequency_range: String,
    sensitivity: String,
}

impl Microphone {
    pub(crate) fn new(
        model: String,
        brand: String,
        price: Price,
        frequency_range: String,
        sensitivity: String,
    ) -> Self {
        Self {
            model,
            brand,
            price,
            frequency_range,
            sensitivity,
        }
    }

    pub fn frequency_range(&self) -> &str {
        &self.frequency_range
    }

    pub fn sensitivity(&self) -> &str {
        &self.sensitivity
    }
}

impl Peripheral for Microphone {
    fn category(&self) -> DeviceCategory {
        DeviceCategory::Microphone
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
        [self.frequency_range.as_str(), self.sensitivity.as_str()]
    }
}
