use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid price `{0}`: must be a finite, non-negative amount")]
    InvalidPrice(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Failed to read or write: {0}")]
    IoError(#[from] std::io::Error),
}

impl CatalogError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}
