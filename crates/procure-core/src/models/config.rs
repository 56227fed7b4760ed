//! Configuration structures for the extraction pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{ProcureError, Result};

/// Main configuration for the procure pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcureConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Date to resolve deadlines against. Uses the system clock when unset.
    pub reference_date: Option<NaiveDate>,
}

impl ExtractionConfig {
    /// Clock matching this configuration.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_date {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON with 2-space indentation.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ProcureConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ProcureError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ProcureConfig::default();
        assert!(config.output.pretty);
        assert_eq!(config.extraction.reference_date, None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ProcureConfig =
            serde_json::from_str(r#"{"extraction": {"reference_date": "2024-01-01"}}"#).unwrap();
        assert_eq!(
            config.extraction.reference_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert!(config.output.pretty);
        assert_eq!(
            config.extraction.clock().today(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ProcureConfig::default();
        config.output.pretty = false;
        config.save(&path).unwrap();

        assert_eq!(ProcureConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ProcureConfig::from_file(&path),
            Err(ProcureError::Config(_))
        ));
    }
}
