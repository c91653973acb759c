//! Application configuration
//!
//! JSON with camelCase keys. Every field has a default, so an empty object
//! is a valid config.

use std::path::Path;
use std::time::Duration;

use app_ui::components::ModalTiming;
use app_ui::theme::ThemeName;
use app_ui::tokens::duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Motion preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionConfig {
    /// Collapse all transitions to zero duration
    pub reduce_motion: bool,
    /// Modal entry duration
    pub modal_enter_ms: u64,
    /// Modal exit duration
    pub modal_exit_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            modal_enter_ms: duration::MODAL_ENTER as u64,
            modal_exit_ms: duration::MODAL_EXIT as u64,
        }
    }
}

impl From<&MotionConfig> for ModalTiming {
    fn from(motion: &MotionConfig) -> Self {
        if motion.reduce_motion {
            ModalTiming::instant()
        } else {
            ModalTiming::from_millis(motion.modal_enter_ms, motion.modal_exit_ms)
        }
    }
}

/// A fixed-step progress sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    /// Percentage added per tick (1..=100)
    pub step: u32,
    /// Time between ticks
    pub interval_ms: u64,
}

impl StepConfig {
    /// Create a step config
    pub fn new(step: u32, interval_ms: u64) -> Self {
        Self { step, interval_ms }
    }

    /// Tick interval
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Number of ticks until 100%
    pub fn ticks(&self) -> u32 {
        if self.step == 0 {
            return 0;
        }
        100u32.div_ceil(self.step)
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        if self.step == 0 || self.step > 100 {
            return Err(ConfigError::Invalid {
                field,
                reason: format!("step must be within 1..=100, got {}", self.step),
            });
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field,
                reason: "interval must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Simulated flow timings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Cover scan progress
    pub scan: StepConfig,
    /// Book recognition
    pub recognition: StepConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scan: StepConfig::new(10, 200),
            recognition: StepConfig::new(25, 500),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Active theme
    pub theme: ThemeName,
    /// Motion preferences
    pub motion: MotionConfig,
    /// Simulated flow timings
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), theme = %config.theme, "loaded config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        self.simulation.scan.validate("simulation.scan")?;
        self.simulation.recognition.validate("simulation.recognition")?;

        if self.motion.modal_exit_ms > self.motion.modal_enter_ms {
            return Err(ConfigError::Invalid {
                field: "motion.modalExitMs",
                reason: format!(
                    "exit ({} ms) must not exceed enter ({} ms)",
                    self.motion.modal_exit_ms, self.motion.modal_enter_ms
                ),
            });
        }

        Ok(())
    }

    /// Modal timing derived from the motion preferences
    pub fn modal_timing(&self) -> ModalTiming {
        ModalTiming::from(&self.motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.motion.modal_enter_ms, 300);
        assert_eq!(config.motion.modal_exit_ms, 200);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = AppConfig::from_json(
            r#"{
                "theme": "dark",
                "motion": { "reduceMotion": true },
                "simulation": { "scan": { "step": 20, "intervalMs": 100 } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
        assert!(config.motion.reduce_motion);
        assert_eq!(config.simulation.scan, StepConfig::new(20, 100));
        assert_eq!(config.simulation.recognition, SimulationConfig::default().recognition);
    }

    #[test]
    fn test_rejects_bad_steps() {
        let zero = AppConfig::from_json(r#"{"simulation":{"scan":{"step":0,"intervalMs":100}}}"#);
        assert!(matches!(
            zero,
            Err(ConfigError::Invalid { field: "simulation.scan", .. })
        ));

        let over = AppConfig::from_json(
            r#"{"simulation":{"recognition":{"step":101,"intervalMs":100}}}"#,
        );
        assert!(matches!(
            over,
            Err(ConfigError::Invalid { field: "simulation.recognition", .. })
        ));
    }

    #[test]
    fn test_rejects_exit_longer_than_enter() {
        let result = AppConfig::from_json(r#"{"motion":{"modalEnterMs":100,"modalExitMs":250}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "motion.modalExitMs", .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            AppConfig::from_json(r#"{"theme":"sepia"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_modal_timing_bridge() {
        let mut motion = MotionConfig::default();
        let timing = ModalTiming::from(&motion);
        assert_eq!(timing.enter, Duration::from_millis(300));
        assert_eq!(timing.exit, Duration::from_millis(200));

        motion.reduce_motion = true;
        let timing = ModalTiming::from(&motion);
        assert_eq!(timing.enter, Duration::ZERO);
        assert_eq!(timing.exit, Duration::ZERO);
    }

    #[test]
    fn test_step_ticks() {
        assert_eq!(StepConfig::new(10, 1).ticks(), 10);
        assert_eq!(StepConfig::new(30, 1).ticks(), 4);
        assert_eq!(StepConfig::new(100, 1).ticks(), 1);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"theme":"dark"}}"#).unwrap();

        let config = AppConfig::load(file.path()).await.unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
