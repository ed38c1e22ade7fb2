//! TOML-based generator configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GenError;
use crate::generator::types::BucketSizes;

/// Top-level generator configuration parsed from TOML.
///
/// All fields have defaults matching the `demo` preset. Load from TOML with
/// [`GeneratorConfig::from_toml_file`] or use [`GeneratorConfig::demo`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Arrival counts per day part.
    #[serde(default)]
    pub buckets: BucketConfig,
    /// Output destination.
    #[serde(default)]
    pub output: OutputConfig,
    /// Random seed.
    #[serde(default)]
    pub generator: SeedConfig,
}

/// Arrival counts per day part.
///
/// Signed so that negative values from a file reach validation and produce a
/// field-specific error instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BucketConfig {
    /// Arrivals around 9am.
    pub morning: i64,
    /// Arrivals around 1pm.
    pub afternoon: i64,
    /// Arrivals around 6pm.
    pub evening: i64,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            morning: 50,
            afternoon: 5,
            evening: 30,
        }
    }
}

/// Output destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// CSV file path, overwritten on every run.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ev_data.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Master random seed.
    pub seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"buckets.morning"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl From<ConfigError> for GenError {
    fn from(e: ConfigError) -> Self {
        GenError::Config(format!("{}: {}", e.field, e.message))
    }
}

impl GeneratorConfig {
    /// Returns the demo scenario: 50 morning, 5 afternoon, 30 evening arrivals.
    pub fn demo() -> Self {
        Self {
            buckets: BucketConfig::default(),
            output: OutputConfig::default(),
            generator: SeedConfig::default(),
        }
    }

    /// Returns an even split across the three day parts.
    pub fn balanced() -> Self {
        Self {
            buckets: BucketConfig {
                morning: 30,
                afternoon: 30,
                evening: 30,
            },
            ..Self::demo()
        }
    }

    /// Returns a commuter-heavy preset where most sessions start after work.
    pub fn evening_peak() -> Self {
        Self {
            buckets: BucketConfig {
                morning: 10,
                afternoon: 20,
                evening: 70,
            },
            ..Self::demo()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["demo", "balanced", "evening_peak"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "demo" => Ok(Self::demo()),
            "balanced" => Ok(Self::balanced()),
            "evening_peak" => Ok(Self::evening_peak()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let b = &self.buckets;

        for (field, value) in [
            ("buckets.morning", b.morning),
            ("buckets.afternoon", b.afternoon),
            ("buckets.evening", b.evening),
        ] {
            if value < 0 {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("must be >= 0, got {value}"),
                });
            }
        }

        if self.output.path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "output.path".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }

    /// Converts the bucket section into validated sizes.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidBucket`] if any bucket is negative.
    pub fn bucket_sizes(&self) -> Result<BucketSizes, GenError> {
        let b = &self.buckets;
        BucketSizes::try_new(b.morning, b.afternoon, b.evening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_preset_valid() {
        let cfg = GeneratorConfig::demo();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "demo should be valid: {errors:?}");
        assert_eq!(
            cfg.bucket_sizes().ok(),
            Some(BucketSizes::new(50, 5, 30))
        );
    }

    #[test]
    fn from_preset_unknown() {
        let err = GeneratorConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in GeneratorConfig::PRESETS {
            let cfg = GeneratorConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn evening_peak_favors_evening() {
        let cfg = GeneratorConfig::evening_peak();
        assert!(cfg.buckets.evening > cfg.buckets.morning + cfg.buckets.afternoon);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[buckets]
morning = 12
afternoon = 0
evening = 3

[output]
path = "out/readings.csv"

[generator]
seed = 7
"#;
        let cfg = GeneratorConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.buckets.morning), Some(12));
        assert_eq!(cfg.as_ref().map(|c| c.generator.seed), Some(7));
        assert_eq!(
            cfg.as_ref().map(|c| c.output.path.clone()),
            Some(PathBuf::from("out/readings.csv"))
        );
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[buckets]
evening = 99
"#;
        let cfg = GeneratorConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.buckets.evening), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.buckets.morning), Some(50));
        assert_eq!(cfg.as_ref().map(|c| c.generator.seed), Some(42));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[buckets]
morning = 1
night = 4
"#;
        assert!(GeneratorConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_negative_bucket() {
        let cfg = GeneratorConfig::from_toml_str("[buckets]\nafternoon = -2\n");
        let errors = cfg.map(|c| c.validate()).unwrap_or_default();
        assert!(errors.iter().any(|e| e.field == "buckets.afternoon"));
    }

    #[test]
    fn validation_catches_empty_path() {
        let mut cfg = GeneratorConfig::demo();
        cfg.output.path = PathBuf::new();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "output.path"));
    }

    #[test]
    fn negative_bucket_fails_conversion() {
        let mut cfg = GeneratorConfig::demo();
        cfg.buckets.morning = -1;
        assert!(matches!(
            cfg.bucket_sizes(),
            Err(GenError::InvalidBucket { value: -1, .. })
        ));
    }

    #[test]
    fn config_error_converts_to_gen_error() {
        let err: GenError = ConfigError {
            field: "preset".into(),
            message: "unknown".into(),
        }
        .into();
        assert_eq!(err.to_string(), "config error: preset: unknown");
    }
}
