pub mod category;
pub mod config;
pub mod price;
pub mod selection;

pub use category::*;
pub use config::*;
pub use price::*;
pub use selection::*;
