use crate::{CatalogError, DeviceCategory};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog loaded at startup: which devices to build and how loud to log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Creation parameters for one device, tagged by `kind`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceEntry {
    Headphones {
        model: String,
        brand: String,
        price: f64,
        construction_type: String,
        mounting_method: String,
    },
    Microphone {
        model: String,
        brand: String,
        price: f64,
        frequency_range: String,
        sensitivity: String,
    },
    Keyboard {
        model: String,
        brand: String,
        price: f64,
        switch_type: String,
        interface_type: String,
    },
}

impl DeviceEntry {
    pub fn category(&self) -> DeviceCategory {
        match self {
            Self::Headphones { .. } => DeviceCategory::Headphones,
            Self::Microphone { .. } => DeviceCategory::Microphone,
            Self::Keyboard { .. } => DeviceCategory::Keyboard,
        }
    }
}

impl CatalogConfig {
    /// The three devices the program ships with.
    pub fn builtin() -> Self {
        Self {
            log_level: default_log_level(),
            devices: vec![
                DeviceEntry::Headphones {
                    model: "HD202".to_string(),
                    brand: "Sennheiser".to_string(),
                    price: 5000.0,
                    construction_type: "Обычные".to_string(),
                    mounting_method: "Оголовье".to_string(),
                },
                DeviceEntry::Microphone {
                    model: "AT2020".to_string(),
                    brand: "Audio-Technica".to_string(),
                    price: 8000.0,
                    frequency_range: "20Hz - 20kHz".to_string(),
                    sensitivity: "34 мВ/Па".to_string(),
                },
                DeviceEntry::Keyboard {
                    model: "K95".to_string(),
                    brand: "Corsair".to_string(),
                    price: 15000.0,
                    switch_type: "Механические".to_string(),
                    interface_type: "USB".to_string(),
                },
            ],
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self)
            .map_err(|e| CatalogError::config(format!("cannot serialize catalog: {}", e)))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" | "off" => Ok(()),
            other => Err(CatalogError::config(format!(
                "Invalid log level: '{}'. Use error, warn, info, debug, trace or off",
                other
            ))),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
log_level = "debug"

[[devices]]
kind = "keyboard"
model = "G915"
brand = "Logitech"
price = 21000.0
switch_type = "Низкопрофильные"
interface_type = "Bluetooth"

[[devices]]
kind = "microphone"
model = "SM7B"
brand = "Shure"
price = 39990.5
frequency_range = "50Hz - 20kHz"
sensitivity = "1,12 мВ/Па"
"#;

    #[test]
    fn test_builtin_catalog_order() {
        let config = CatalogConfig::builtin();
        let kinds: Vec<_> = config.devices.iter().map(|d| d.category()).collect();

        assert_eq!(
            kinds,
            vec![
                DeviceCategory::Headphones,
                DeviceCategory::Microphone,
                DeviceCategory::Keyboard
            ]
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_tagged_entries() {
        let config = CatalogConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.devices.len(), 2);
        assert!(matches!(
            &config.devices[1],
            DeviceEntry::Microphone { brand, price, .. } if brand == "Shure" && *price == 39990.5
        ));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = CatalogConfig::from_toml_str("").unwrap();

        assert_eq!(config.log_level, "warn");
        assert!(config.devices.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = CatalogConfig::from_toml_str(
            "[[devices]]\nkind = \"mouse\"\nmodel = \"M1\"\nbrand = \"X\"\nprice = 1.0\n",
        );

        assert!(matches!(result, Err(CatalogError::DeserializationError(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let result = CatalogConfig::from_toml_str("log_level = \"loud\"\n");
        assert!(matches!(result, Err(CatalogError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.devices[0].category(), DeviceCategory::Keyboard);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CatalogConfig::load(dir.path().join("absent.toml"));

        assert!(matches!(result, Err(CatalogError::ConfigError(_))));
    }

    #[test]
    fn test_builtin_survives_toml() {
        let builtin = CatalogConfig::builtin();
        let text = builtin.to_toml_string().unwrap();

        assert_eq!(CatalogConfig::from_toml_str(&text).unwrap(), builtin);
    }
}
