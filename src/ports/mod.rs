// src/ports/mod.rs

pub use device_factory::DeviceFactory;
pub use peripheral::Peripheral;

pub mod device_factory;
pub mod peripheral;
