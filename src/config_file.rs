//! Configuration file handling for the demo timeline.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change. Durations are stored in milliseconds.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::demo::script::DEFAULT_PROMPT;
use crate::error::MerchError;

/// Longest delay any single timing field may request
pub const MAX_DELAY_MS: u64 = 60_000;

/// Longest prompt accepted as `default_prompt`
pub const MAX_PROMPT_CHARS: usize = 500;

/// Delays between timeline transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Delay between submission and the steps appearing
    pub thinking_ms: u64,
    /// Fixed part of each step's simulated work
    pub step_base_ms: u64,
    /// Upper bound (exclusive) of the random part of each step's work
    pub step_jitter_ms: u64,
    /// Pause after each completed step
    pub step_pause_ms: u64,
    /// Delay between streamed response chunks
    pub chunk_interval_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            thinking_ms: 3500,
            step_base_ms: 800,
            step_jitter_ms: 500,
            step_pause_ms: 400,
            chunk_interval_ms: 15,
        }
    }
}

impl Timing {
    /// Timing with every delay set to zero
    pub fn instant() -> Self {
        Self {
            thinking_ms: 0,
            step_base_ms: 0,
            step_jitter_ms: 0,
            step_pause_ms: 0,
            chunk_interval_ms: 0,
        }
    }

    /// Divide every delay by `speed` (2.0 plays twice as fast)
    pub fn scaled(&self, speed: f64) -> Self {
        let scale = |ms: u64| (ms as f64 / speed).round() as u64;
        Self {
            thinking_ms: scale(self.thinking_ms),
            step_base_ms: scale(self.step_base_ms),
            step_jitter_ms: scale(self.step_jitter_ms),
            step_pause_ms: scale(self.step_pause_ms),
            chunk_interval_ms: scale(self.chunk_interval_ms),
        }
    }

    pub fn thinking(&self) -> Duration {
        Duration::from_millis(self.thinking_ms)
    }

    pub fn step_pause(&self) -> Duration {
        Duration::from_millis(self.step_pause_ms)
    }

    pub fn chunk_interval(&self) -> Duration {
        Duration::from_millis(self.chunk_interval_ms)
    }

    fn fields(&self) -> [(&'static str, u64); 5] {
        [
            ("thinking_ms", self.thinking_ms),
            ("step_base_ms", self.step_base_ms),
            ("step_jitter_ms", self.step_jitter_ms),
            ("step_pause_ms", self.step_pause_ms),
            ("chunk_interval_ms", self.chunk_interval_ms),
        ]
    }
}

/// Demo configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub timing: Timing,
    /// Characters appended per streamed chunk
    pub chunk_size: usize,
    /// Text the prompt line starts with
    pub default_prompt: String,
    /// Fixes the jitter RNG so runs are reproducible
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            chunk_size: 3,
            default_prompt: DEFAULT_PROMPT.to_string(),
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.chunk_size == 0 {
            return Err(MerchError::config("chunk_size must be at least 1"));
        }

        for (name, ms) in self.timing.fields() {
            if ms > MAX_DELAY_MS {
                return Err(MerchError::config(format!(
                    "timing.{} must not exceed {} ms (got {})",
                    name, MAX_DELAY_MS, ms
                )));
            }
        }

        if self.default_prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(MerchError::config(format!(
                "default_prompt must be at most {} characters",
                MAX_PROMPT_CHARS
            )));
        }

        Ok(())
    }

    /// Copy of this configuration with all delays divided by `speed`
    pub fn with_speed(&self, speed: f64) -> crate::error::Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(MerchError::config(format!(
                "speed must be a positive number (got {})",
                speed
            )));
        }
        Ok(Self {
            timing: self.timing.scaled(speed),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 3);
        assert_eq!(config.timing.thinking_ms, 3500);
        assert_eq!(config.timing.step_base_ms, 800);
        assert_eq!(config.timing.step_jitter_ms, 500);
        assert_eq!(config.timing.step_pause_ms, 400);
        assert_eq!(config.timing.chunk_interval_ms, 15);
    }

    #[test]
    fn test_zero_chunk_size_invalid() {
        let config = DemoConfig {
            chunk_size: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, MerchError::Config(_)));
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_excessive_delay_invalid() {
        let mut config = DemoConfig::default();
        config.timing.step_pause_ms = MAX_DELAY_MS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timing.step_pause_ms"));
    }

    #[test]
    fn test_long_prompt_invalid() {
        let config = DemoConfig {
            default_prompt: "a".repeat(MAX_PROMPT_CHARS + 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "timing": { "thinking_ms": 100 }, "seed": 7 }"#).unwrap();
        assert_eq!(config.timing.thinking_ms, 100);
        assert_eq!(config.timing.step_base_ms, 800);
        assert_eq!(config.chunk_size, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.default_prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_speed_scales_delays() {
        let config = DemoConfig::default().with_speed(2.0).unwrap();
        assert_eq!(config.timing.thinking_ms, 1750);
        assert_eq!(config.timing.step_pause_ms, 200);
        assert_eq!(config.chunk_size, 3);
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        assert!(DemoConfig::default().with_speed(0.0).is_err());
        assert!(DemoConfig::default().with_speed(-1.0).is_err());
        assert!(DemoConfig::default().with_speed(f64::NAN).is_err());
    }

    #[test]
    fn test_instant_timing() {
        let timing = Timing::instant();
        assert_eq!(timing.thinking(), Duration::ZERO);
        assert_eq!(timing.chunk_interval(), Duration::ZERO);
    }
}
