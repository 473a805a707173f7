use crate::{CatalogError, Device, DeviceFactory, Peripheral};
use log::debug;
use std::io::Write;

pub const LIST_HEADER: &str = "Список устройств:";
pub const NOT_FOUND: &str = "Устройство не найдено.";

/// Owns the devices of the catalog and answers list and detail queries.
///
/// Devices are appended during setup and only read afterwards. Position 1
/// in the printed list is index 0.
#[derive(Debug, Default)]
pub struct DeviceManager {
    devices: Vec<Device>,
}

impl DeviceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `device` and appends it to the list.
    pub fn add_device(&mut self, device: Device) {
        debug!("adding #{}: {}", self.devices.len() + 1, device.name());
        self.devices.push(device);
    }

    /// Invokes each factory once, in order, and stores the results.
    ///
    /// Returns the number of devices added.
    pub fn populate<'a, I>(&mut self, factories: I) -> usize
    where
        I: IntoIterator<Item = &'a Box<dyn DeviceFactory>>,
    {
        let before = self.devices.len();
        for factory in factories {
            self.add_device(factory.create_device());
        }
        self.devices.len() - before
    }

    /// Writes the header and one numbered line per device.
    pub fn show_devices<W: Write>(&self, out: &mut W) -> Result<(), CatalogError> {
        writeln!(out, "{}", LIST_HEADER)?;
        for (position, name) in self.names().enumerate() {
            writeln!(out, "{}. {}", position + 1, name)?;
        }
        Ok(())
    }

    /// Writes the report of the device at `index`, or a not-found line when
    /// `index` is outside `[0, len)`.
    pub fn show_device_info<W: Write>(&self, index: i64, out: &mut W) -> Result<(), CatalogError> {
        match usize::try_from(index).ok().and_then(|i| self.get(i)) {
            Some(device) => device.write_info(out)?,
            None => {
                debug!("no device at index {} (have {})", index, self.len());
                writeln!(out, "{}", NOT_FOUND)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// Display names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.devices.iter().map(|device| device.name())
    }
}

impl Extend<Device> for DeviceManager {
    fn extend<T: IntoIterator<Item = Device>>(&mut self, iter: T) {
        for device in iter {
            self.add_device(device);
        }
    }
}

impl FromIterator<Device> for DeviceManager {
    fn from_iter<T: IntoIterator<Item = Device>>(iter: T) -> Self {
        let mut manager = Self::new();
        manager.extend(iter);
        manager
    }
}
