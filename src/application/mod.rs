pub mod console;
pub mod device_manager;

pub use console::*;
pub use device_manager::*;
