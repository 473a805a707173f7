pub mod application;
pub mod cli;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;

pub use application::*;
pub use entities::*;
pub use errors::*;
pub use models::*;
pub use ports::*;
