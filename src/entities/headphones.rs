use crate::{DeviceCategory, Peripheral, Price};

/// Headphones entity.
///
/// Pure data; attribute checks happen in
/// [`HeadphonesFactory`](crate::factories::HeadphonesFactory).
#[derive(Debug, Clone, PartialEq)]
pub struct Headphones {
    model: String,
    brand: String,
    price: Price,
    construction_type: String,
    mounting_method: String,
}

impl Headphones {
    pub(crate) fn new(
        model: String,
        brand: String,
        price: Price,
        construction_type: String,
        mounting_method: String,
    ) -> Self {
        Self {
            model,
            brand,
            price,
            construction_type,
            mounting_method,
        }
    }

    /// Returns the construction type (open, closed, ...).
    pub fn construction_type(&self) -> &str {
        &self.construction_type
    }

    /// Returns how the headphones are worn.
    pub fn mounting_method(&self) -> &str {
        &self.mounting_method
    }
}

impl Peripheral for Headphones {
    fn category(&self) -> DeviceCategory {
        DeviceCategory::Headphones
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
        [self.construction_type.as_str(), self.mounting_method.as_str()]
    }
}
