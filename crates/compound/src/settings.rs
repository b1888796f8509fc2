//! Read-only startup settings.
//!
//! `settings.yaml` in the data directory can supply the parameters the form
//! starts with and the directory exports are written to. The file is never
//! written back: edits made in the form last only for the session.
//!
//! ```yaml
//! defaults:
//!   initial_value: 1000
//!   rate_percent: 7.5
//!   years: 30
//!   frequency: monthly
//!   direction: growth
//! export_dir: /home/me/exports
//! ```

use std::path::PathBuf;
#[cfg(feature = "native")]
use std::path::Path;

use compound_core::{CompoundingFrequency, Direction, Parameters};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.yaml";

#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IO error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Partial parameters; unset fields keep whatever they are applied over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    pub initial_value: Option<f64>,
    pub rate_percent: Option<f64>,
    pub years: Option<u32>,
    pub frequency: Option<CompoundingFrequency>,
    pub direction: Option<Direction>,
}

impl ParameterOverrides {
    pub fn apply(&self, mut params: Parameters) -> Parameters {
        if let Some(initial_value) = self.initial_value {
            params.initial_value = initial_value;
        }
        if let Some(rate_percent) = self.rate_percent {
            params.rate_percent = rate_percent;
        }
        if let Some(years) = self.years {
            params.years = years;
        }
        if let Some(frequency) = self.frequency {
            params = params.with_compounding(frequency);
        }
        if let Some(direction) = self.direction {
            params.direction = direction;
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: ParameterOverrides,
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        serde_saphyr::from_str(yaml).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// Load settings from the data directory. A missing file yields defaults.
    #[cfg(feature = "native")]
    pub fn load(data_dir: &Path) -> Result<Self, SettingsError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| SettingsError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Load settings, logging and falling back to defaults on failure.
    #[cfg(feature = "native")]
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Starting parameters: built-in defaults overlaid with the settings file.
    pub fn initial_parameters(&self) -> Parameters {
        self.defaults.apply(Parameters::default())
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_settings() {
        let yaml = r#"
defaults:
  initial_value: 1000
  rate_percent: 7.5
  years: 30
  frequency: monthly
  direction: decay
export_dir: /tmp/exports
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        let params = settings.initial_parameters();

        assert_eq!(params.initial_value, 1000.0);
        assert_eq!(params.rate_percent, 7.5);
        assert_eq!(params.years, 30);
        assert_eq!(params.compounding_frequency, 12);
        assert_eq!(params.direction, Direction::Decay);
        assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = Settings::from_yaml("defaults:\n  years: 25\n").unwrap();
        let params = settings.initial_parameters();
        let mut expected = Parameters::default();
        expected.years = 25;
        assert_eq!(params, expected);
        assert_eq!(settings.export_dir, None);
    }

    #[test]
    fn test_semi_annual_spelling() {
        let settings = Settings::from_yaml("defaults:\n  frequency: semi-annually\n").unwrap();
        assert_eq!(
            settings.defaults.frequency,
            Some(CompoundingFrequency::SemiAnnually)
        );
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = Settings::from_yaml("defaults:\n  years: many\n");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        std::fs::write(Settings::path(dir.path()), "defaults:\n  rate_percent: 3\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.initial_parameters().rate_percent, 3.0);
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let dir = tempdir().unwrap();
        std::fs::write(Settings::path(dir.path()), "defaults: [").unwrap();
        assert_eq!(Settings::load_or_default(dir.path()), Settings::default());
    }
}
