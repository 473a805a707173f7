use crate::Device;

/// Builds one kind of device from parameters captured at construction.
///
/// Every call returns a fresh, independently owned device; implementors
/// must not cache or share instances between calls.
pub trait DeviceFactory {
    fn create_device(&self) -> Device;
}
