//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Blanket file-based loading and saving for TOML-serializable settings
/// types. Applications define a settings struct, derive serde traits and
/// `Default`, and implement this trait as a marker.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestSettings {
        fov_degrees: f32,
        label: String,
    }

    impl Default for TestSettings {
        fn default() -> Self {
            Self {
                fov_degrees: 45.0,
                label: "default".to_string(),
            }
        }
    }

    impl Config for TestSettings {}

    #[test]
    fn test_toml_roundtrip() {
        let dir = std::env::temp_dir().join("scene_engine_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        let path = path.to_str().unwrap();

        let settings = TestSettings {
            fov_degrees: 60.0,
            label: "roundtrip".to_string(),
        };
        settings.save_to_file(path).unwrap();

        let loaded = TestSettings::load_from_file(path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_unsupported_format() {
        let result = TestSettings::load_from_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TestSettings::load_from_file("/nonexistent/settings.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
