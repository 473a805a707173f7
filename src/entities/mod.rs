pub mod device;
pub mod headphones;
pub mod keyboard;
pub mod microphone;

pub use device::*;
pub use headphones::*;
pub use keyboard::*;
pub use microphone::*;
